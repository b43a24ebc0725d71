//! Module for user profile and management API endpoints.
//!
//! This module handles registration, profile lookup and update, and listing
//! of users. The counters on a user (scans, reports, coins) are maintained by
//! `services::rewards`, not by these endpoints.

pub mod handlers;
pub mod models;
pub mod routes;
