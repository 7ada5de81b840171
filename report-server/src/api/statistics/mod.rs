//! Statistics API module

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/statistics", routes())
}

fn routes() -> Router<AppState> {
    Router::new().route("/", get(handler::get_statistics))
}
