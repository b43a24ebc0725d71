//! Handler functions for the scan result API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sakhi_adapters::Record;
use tracing::info;

use super::models::CreateScanRequest;
use crate::database::queries;
use crate::errors::ApiError;
use crate::services::rewards;
use crate::state::AppState;

/// Stores the scan and bumps the owner's `total_scans`.
///
/// The response is the scan record whether or not the owner exists.
pub async fn create_scan(
    State(state): State<AppState>,
    payload: Result<Json<CreateScanRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let Json(request) = payload?;
    let scan = request.into_scan()?;

    let recorded = rewards::record_scan(state.store(), &scan).await?;
    info!(scan_id = %recorded.record.id, user_id = %scan.user_id, "recorded scan");

    Ok((StatusCode::CREATED, Json(recorded.record)))
}

pub async fn list_user_scans(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Record>>, ApiError> {
    Ok(Json(queries::scans_for_user(state.store(), &user_id).await?))
}
