//! Central module for organizing the application's API endpoints.
//!
//! This module acts as a top-level container for the API domains (users,
//! scans, community reports, activities, and the service health routes) and
//! merges their routers into one.

pub mod activity;
pub mod health;
pub mod report;
pub mod scan;
pub mod user;

use axum::Router;

use crate::errors::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::routes::health_routes())
        .merge(user::routes::user_routes())
        .merge(scan::routes::scan_routes())
        .merge(report::routes::report_routes())
        .merge(activity::routes::activity_routes())
        .fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}

/// Unwraps a required request field or names it in a 400 error.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::missing_field(field))
}
