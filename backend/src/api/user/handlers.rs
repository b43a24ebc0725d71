//! Handler functions for user profile and management API endpoints.
//!
//! These functions validate request bodies, call the user queries, and map
//! a missing user to a 404.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sakhi_adapters::{Fields, Record, StoreError};
use tracing::info;

use super::models::CreateUserRequest;
use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;

fn user_not_found() -> ApiError {
    ApiError::NotFound("User not found".to_string())
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let Json(request) = payload?;
    let user = request.into_user()?;

    let record = queries::insert_user(state.store(), &user).await?;
    info!(user_id = %record.id, "registered user");

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    queries::find_user(state.store(), &id)
        .await?
        .map(Json)
        .ok_or_else(user_not_found)
}

/// Merges the body into the stored user; fields not in the body are kept.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Fields>, JsonRejection>,
) -> Result<Json<Record>, ApiError> {
    let Json(fields) = payload?;

    match queries::update_user(state.store(), &id, fields).await {
        Ok(record) => Ok(Json(record)),
        Err(StoreError::NotFound { .. }) => Err(user_not_found()),
        Err(err) => Err(err.into()),
    }
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    Ok(Json(queries::list_users(state.store()).await?))
}
