//! Handler functions for the service-level routes.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to Sakhi Web API";

pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// Writes a check document; any store failure surfaces as a 500.
pub async fn store_check(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let check = queries::write_health_check(state.store()).await?;
    info!(backend = state.store().backend_tag(), check_id = %check.id, "store check passed");

    Ok(Json(json!({ "message": "Document store is working correctly" })))
}
