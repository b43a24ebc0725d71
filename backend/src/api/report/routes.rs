//! Defines the HTTP routes for community reports.

use axum::{routing::post, Router};

use super::handlers::{create_report, list_reports};
use crate::state::AppState;

pub fn report_routes() -> Router<AppState> {
    Router::new().route("/api/reports", post(create_report).get(list_reports))
}
