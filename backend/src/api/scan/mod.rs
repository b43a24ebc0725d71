//! Module for the scan result API.
//!
//! This module records the outcome of a scan (a message, link, or number the
//! user checked) and lists a user's past scans.

pub mod handlers;
pub mod models;
pub mod routes;
