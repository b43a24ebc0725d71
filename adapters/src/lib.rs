//! Core `adapters` crate for abstracting document database interactions.
//!
//! This crate defines the `DocumentStore` trait, which outlines the generic
//! create/read/update/list/query operations the backend needs from a
//! document database, and provides the concrete implementations (an in-process
//! memory store and MongoDB).

pub mod errors;
pub mod memory;
pub mod models;
pub mod mongo;

use async_trait::async_trait;
use serde_json::Value;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::{Comparison, Fields, Record, CREATED_AT_FIELD};
pub use mongo::MongoStore;

/// Uniform access to named collections of schema-less records.
///
/// Every record gets a store-generated id and a `created_at` timestamp on
/// [`create`](DocumentStore::create); callers never choose either.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name used in logs.
    fn backend_tag(&self) -> &'static str;

    async fn create(&self, collection: &str, fields: Fields) -> StoreResult<Record>;

    /// Returns `Ok(None)` when no record has this id.
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Record>>;

    /// Merges `fields` into an existing record and returns the result.
    ///
    /// Fails with [`StoreError::NotFound`] instead of creating the record.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> StoreResult<Record>;

    /// Atomically adds each delta to its integer field; absent fields start at 0.
    async fn increment(
        &self,
        collection: &str,
        id: &str,
        deltas: &[(&str, i64)],
    ) -> StoreResult<Record>;

    async fn list_all(&self, collection: &str) -> StoreResult<Vec<Record>>;

    /// Records whose `field` satisfies `field <comparison> value`.
    ///
    /// Records without the field are never returned.
    async fn query_by_field(
        &self,
        collection: &str,
        field: &str,
        comparison: Comparison,
        value: &Value,
    ) -> StoreResult<Vec<Record>>;
}
