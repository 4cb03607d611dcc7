use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the recommendation endpoint
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api/recomendar/".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 780.0,
        }
    }
}

pub fn load() -> Config {
    let path = config_path();
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

fn config_path() -> PathBuf {
    // Use ~/.config/ (XDG convention) on every platform
    dirs::home_dir()
        .expect("Could not determine home directory")
        .join(".config")
        .join("librujula")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api/recomendar/");
        assert_eq!(config.window.width, 1100.0);
        assert_eq!(config.window.height, 780.0);
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://librujula.example/api/recomendar/"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://librujula.example/api/recomendar/");
        assert_eq!(config.window.width, 1100.0);
    }

    #[test]
    fn test_window_override() {
        let config: Config = toml::from_str(
            r#"
            [window]
            width = 800.0
            height = 600.0
            "#,
        )
        .unwrap();

        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api/recomendar/");
    }
}
