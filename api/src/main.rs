//! Vice Kink feed API
//!
//! Assembles the ranked post feed for the Vice Kink rendering layer. All
//! durable state lives in the remote hosted backend; this service fetches
//! post, author, and community rows, joins and ranks them, and serves the
//! result as JSON. Uses hexagonal (ports & adapters) architecture.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::BackendClient;
use app::FeedService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<BackendClient, BackendClient, BackendClient>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vicekink_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vice Kink feed API...");

    // Load configuration
    let config = Config::from_env();

    // One backend client serves all three store ports
    let backend = Arc::new(BackendClient::new(
        config.backend_url.clone(),
        config.backend_api_key.clone(),
    ));

    let feed_service = Arc::new(FeedService::new(
        backend.clone(),
        backend.clone(),
        backend.clone(),
    ));

    let state = AppState { feed_service };

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .route("/feed", get(handlers::get_feed))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
