mod api;
mod app;
mod config;
mod ui;

use std::sync::Mutex;

use app::State;

use crate::config::Config;

static BOOT_PARAMS: Mutex<Option<Config>> = Mutex::new(None);

fn boot() -> (State, iced::Task<app::Message>) {
    let config = BOOT_PARAMS
        .lock()
        .unwrap()
        .take()
        .expect("boot() called more than once");
    State::new(config)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = config::load();
    let window_size = iced::Size::new(config.window.width, config.window.height);

    tracing::info!("Starting Librújula");

    *BOOT_PARAMS.lock().unwrap() = Some(config);

    iced::application(boot, State::update, State::view)
        .title("Librújula")
        .theme(State::theme)
        .window_size(window_size)
        .run()
}
