use serde::Deserialize;

/// Response body of the recommendation endpoint.
///
/// The service reports failures in-band: a body with `error` set can
/// arrive under a 4xx status, so callers parse the JSON regardless of the
/// HTTP status code. Unknown fields (scoring metadata, descriptions) are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub error: Option<String>,
    #[serde(default)]
    pub recomendaciones: Vec<ApiBook>,
    pub basado_en: Option<String>,
}

/// One recommendation as the service encodes it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiBook {
    pub titulo: String,
    pub autor: String,
    pub imagen: Option<String>,
    pub puntuacion: Option<f32>,
}

/// One recommendation as the rest of the client consumes it.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub title: String,
    pub author: String,
    pub cover_url: Option<String>,
    /// Relevance score in 0.0–5.0, when the service has one
    pub score: Option<f32>,
}

impl From<ApiBook> for Recommendation {
    fn from(book: ApiBook) -> Self {
        Self {
            title: book.titulo,
            author: book.autor,
            cover_url: book.imagen,
            // The service emits 0 for books it has no rating for
            score: book.puntuacion.filter(|&p| p > 0.0),
        }
    }
}

/// Fetch recommendations for a free-form query.
///
/// The query text lands in the `libro` parameter, percent-encoded by
/// reqwest.
pub async fn search(
    client: reqwest::Client,
    base_url: String,
    query: String,
) -> Result<ApiResponse, reqwest::Error> {
    client
        .get(&base_url)
        .query(&[("libro", query.as_str())])
        .send()
        .await?
        .json::<ApiResponse>()
        .await
}

/// Fetch cover image bytes. A non-2xx status counts as a failure.
pub async fn fetch_cover(
    client: reqwest::Client,
    url: String,
) -> Result<Vec<u8>, reqwest::Error> {
    let bytes = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_seed_deserialization() {
        let json = r#"{
            "recomendaciones": [
                {"titulo": "Dune", "autor": "Frank Herbert", "puntuacion": 4.5}
            ],
            "basado_en": "1984"
        }"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();

        assert!(response.error.is_none());
        assert_eq!(response.basado_en.as_deref(), Some("1984"));
        assert_eq!(response.recomendaciones.len(), 1);
        assert_eq!(response.recomendaciones[0].titulo, "Dune");
        assert_eq!(response.recomendaciones[0].autor, "Frank Herbert");
        assert_eq!(response.recomendaciones[0].puntuacion, Some(4.5));
        assert!(response.recomendaciones[0].imagen.is_none());
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"error": "Libro no encontrado"}"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.error.as_deref(), Some("Libro no encontrado"));
        assert!(response.recomendaciones.is_empty());
        assert!(response.basado_en.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "recomendaciones": [
                {
                    "titulo": "Fundación",
                    "autor": "Isaac Asimov",
                    "imagen": "https://covers.example/foundation.jpg",
                    "puntuacion": 4.0,
                    "descripcion": "...",
                    "num_ratings": 1234,
                    "categorias": ["Fiction"]
                }
            ],
            "basado_en": "Dune",
            "total_encontradas": 1,
            "mejoras_aplicadas": []
        }"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.recomendaciones.len(), 1);
        assert_eq!(
            response.recomendaciones[0].imagen.as_deref(),
            Some("https://covers.example/foundation.jpg")
        );
    }

    #[test]
    fn test_zero_score_means_unrated() {
        let book = ApiBook {
            titulo: "Sin valorar".to_string(),
            autor: "Anónimo".to_string(),
            imagen: None,
            puntuacion: Some(0.0),
        };
        let rec = Recommendation::from(book);
        assert!(rec.score.is_none());
    }

    #[test]
    fn test_positive_score_is_kept() {
        let book = ApiBook {
            titulo: "Dune".to_string(),
            autor: "Frank Herbert".to_string(),
            imagen: None,
            puntuacion: Some(4.5),
        };
        let rec = Recommendation::from(book);
        assert_eq!(rec.score, Some(4.5));
    }
}
