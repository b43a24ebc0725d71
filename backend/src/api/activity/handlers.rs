//! Handler functions for the user activity log API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sakhi_adapters::Record;

use super::models::CreateActivityRequest;
use crate::database::queries;
use crate::errors::ApiError;
use crate::state::AppState;

pub async fn create_activity(
    State(state): State<AppState>,
    payload: Result<Json<CreateActivityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let Json(request) = payload?;
    let activity = request.into_activity()?;

    let record = queries::insert_activity(state.store(), &activity).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_user_activities(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Record>>, ApiError> {
    Ok(Json(queries::activities_for_user(state.store(), &user_id).await?))
}
