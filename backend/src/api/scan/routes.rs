//! Defines the HTTP routes for scan results.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_scan, list_user_scans};
use crate::state::AppState;

pub fn scan_routes() -> Router<AppState> {
    Router::new()
        .route("/api/scans", post(create_scan))
        .route("/api/scans/:user_id", get(list_user_scans))
}
