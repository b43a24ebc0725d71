//! Defines the HTTP routes for user management.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_user, get_user, list_users, update_user};
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/:id", get(get_user).put(update_user))
}
