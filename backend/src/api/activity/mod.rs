//! Module for the user activity log API.

pub mod handlers;
pub mod models;
pub mod routes;
