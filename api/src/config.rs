use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the hosted backend store
    pub backend_url: String,
    /// API key sent with every backend request
    pub backend_api_key: String,
    /// Port this service listens on
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:54321".to_string()),
            backend_api_key: env::var("BACKEND_API_KEY").unwrap_or_default(),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}
