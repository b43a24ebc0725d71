//! Handler functions for the community report API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use sakhi_adapters::Record;
use tracing::info;

use super::models::CreateReportRequest;
use crate::database::queries;
use crate::errors::ApiError;
use crate::services::rewards;
use crate::state::AppState;

/// Stores the report, then credits the reporter one report and the coin reward.
pub async fn create_report(
    State(state): State<AppState>,
    payload: Result<Json<CreateReportRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let Json(request) = payload?;
    let report = request.into_report()?;

    let recorded = rewards::record_report(state.store(), &report).await?;
    info!(
        report_id = %recorded.record.id,
        user_id = %report.user_id,
        "recorded community report"
    );

    Ok((StatusCode::CREATED, Json(recorded.record)))
}

pub async fn list_reports(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    Ok(Json(queries::list_reports(state.store()).await?))
}
