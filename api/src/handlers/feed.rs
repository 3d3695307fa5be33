//! Feed handlers
//!
//! The single endpoint the rendering layer consumes. Pagination, retries,
//! and pull-to-refresh live on the client side.

use axum::{extract::State, Json};
use chrono::Utc;

use crate::app::DisplayPost;
use crate::error::AppError;
use crate::AppState;

/// GET /feed
///
/// Returns the assembled, ranked feed. The wall clock is captured here so
/// the pipeline itself stays deterministic.
pub async fn get_feed(State(state): State<AppState>) -> Result<Json<Vec<DisplayPost>>, AppError> {
    let feed = state.feed_service.assemble(Utc::now()).await?;
    Ok(Json(feed))
}
