//! Module for core business logic services.
//!
//! This module encapsulates operations that span more than one collection,
//! such as creating a scan or report and then crediting the owning user.

pub mod rewards;
