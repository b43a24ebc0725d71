//! Module for database connection setup and common utilities.
//!
//! This module is responsible for constructing the configured document store
//! and naming the collections each entity kind lives in.

pub mod models;
pub mod queries;

use std::sync::Arc;

use sakhi_adapters::{DocumentStore, MemoryStore, MongoStore, StoreResult};
use tracing::{info, warn};

use crate::config::StoreConfig;

pub const USERS: &str = "users";
pub const SCANS: &str = "scans";
pub const REPORTS: &str = "reports";
pub const ACTIVITIES: &str = "activities";
/// Scratch collection written by the connectivity check.
pub const HEALTH_CHECKS: &str = "test";

pub async fn connect(config: &StoreConfig) -> StoreResult<Arc<dyn DocumentStore>> {
    let store: Arc<dyn DocumentStore> = match config {
        StoreConfig::Memory => {
            warn!("Using the in-memory store; data is lost on restart");
            Arc::new(MemoryStore::new())
        }
        StoreConfig::Mongo { uri, database } => {
            Arc::new(MongoStore::connect(uri, database).await?)
        }
    };

    info!(backend = store.backend_tag(), "Document store ready");
    Ok(store)
}
