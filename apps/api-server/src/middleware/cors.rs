//! CORS policy for the single browser client origin.

use actix_cors::Cors;
use actix_web::http::header;

/// CORS settings loaded from configuration.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origin: String,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub supports_credentials: bool,
    /// Preflight cache lifetime in seconds.
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:5173".to_string(),
            allowed_methods: ["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"]
                .map(String::from)
                .to_vec(),
            allowed_headers: vec![
                header::CONTENT_TYPE.to_string(),
                header::AUTHORIZATION.to_string(),
                header::ACCEPT.to_string(),
            ],
            supports_credentials: true,
            max_age: 3600,
        }
    }
}

/// Build the CORS middleware. Actix builds one per worker.
pub fn build_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_origin(&config.allowed_origin)
        .allowed_methods(config.allowed_methods.iter().map(String::as_str))
        .allowed_headers(config.allowed_headers.iter().map(String::as_str))
        .max_age(config.max_age);

    if config.supports_credentials {
        cors.supports_credentials()
    } else {
        cors
    }
}
