//! Module for the service-level routes.
//!
//! This module exposes the welcome route and the document store connectivity
//! check used by deployments to verify the store accepts writes.

pub mod handlers;
pub mod routes;
