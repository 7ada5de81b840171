//! API routing
//!
//! # Structure
//!
//! - [`statistics`] — the analytics dashboard report

pub mod statistics;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::core::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(statistics::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health — liveness probe
async fn health() -> &'static str {
    "ok"
}
