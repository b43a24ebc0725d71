//! Custom error types specific to the `adapters` crate.
//!
//! This module defines errors that can occur while talking to a document
//! store, keeping "record not found" distinct from every other backend failure
//! so callers can map it to its own response.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record {id} not found in collection {collection}")]
    NotFound { collection: String, id: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(collection: &str, id: &str) -> Self {
        StoreError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Encoding(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
