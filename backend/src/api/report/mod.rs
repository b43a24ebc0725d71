//! Module for the community report API.
//!
//! Users report fraudulent numbers, links, and messages here; every accepted
//! report earns the reporter coins.

pub mod handlers;
pub mod models;
pub mod routes;
