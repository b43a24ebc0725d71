//! Defines the HTTP routes for user activities.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_activity, list_user_activities};
use crate::state::AppState;

pub fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/api/activities", post(create_activity))
        .route("/api/activities/:user_id", get(list_user_activities))
}
