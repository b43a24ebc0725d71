//! Defines the HTTP routes for the welcome message and store check.

use axum::{routing::get, Router};

use super::handlers::{store_check, welcome};
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/api/test-firestore", get(store_check))
}
