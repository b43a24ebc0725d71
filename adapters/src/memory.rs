//! In-process implementation of the `DocumentStore` trait.
//!
//! Keeps every collection in a map guarded by a single tokio `RwLock`, so each
//! operation (including `increment`) is atomic with respect to the others.
//! Data lives only as long as the process; used for local runs and tests.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{StoreError, StoreResult};
use crate::models::{server_timestamp, Comparison, Fields, Record, CREATED_AT_FIELD};
use crate::DocumentStore;

type Collection = BTreeMap<String, Fields>;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, collection: &str, mut fields: Fields) -> StoreResult<Record> {
        let id = Uuid::new_v4().simple().to_string();
        fields.insert(CREATED_AT_FIELD.to_string(), server_timestamp());

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields.clone());

        debug!(collection, id = %id, "created record");
        Ok(Record::new(id, fields))
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Record>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|records| records.get(id))
            .map(|fields| Record::new(id, fields.clone())))
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> StoreResult<Record> {
        let mut collections = self.collections.write().await;
        let stored = collections
            .get_mut(collection)
            .and_then(|records| records.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        for (key, value) in fields {
            stored.insert(key, value);
        }

        Ok(Record::new(id, stored.clone()))
    }

    async fn increment(
        &self,
        collection: &str,
        id: &str,
        deltas: &[(&str, i64)],
    ) -> StoreResult<Record> {
        let mut collections = self.collections.write().await;
        let stored = collections
            .get_mut(collection)
            .and_then(|records| records.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        // Validate every field before touching any of them.
        let mut updated = Vec::with_capacity(deltas.len());
        for &(field, delta) in deltas {
            let next = match stored.get(field) {
                None | Some(Value::Null) => Value::from(delta),
                Some(Value::Number(current)) => match current.as_i64() {
                    Some(current) => current.checked_add(delta).map(Value::from).ok_or_else(|| {
                        StoreError::Backend(format!("integer overflow incrementing '{field}'"))
                    })?,
                    // Doubles add as doubles, like `$inc`.
                    None => current
                        .as_f64()
                        .map(|current| current + delta as f64)
                        .and_then(serde_json::Number::from_f64)
                        .map(Value::Number)
                        .ok_or_else(|| {
                            StoreError::Backend(format!(
                                "cannot increment '{field}' of {collection}/{id} past {current}"
                            ))
                        })?,
                },
                Some(_) => {
                    return Err(StoreError::Backend(format!(
                        "cannot increment non-numeric field '{field}' of {collection}/{id}"
                    )));
                }
            };
            updated.push((field, next));
        }

        for (field, next) in updated {
            stored.insert(field.to_string(), next);
        }

        Ok(Record::new(id, stored.clone()))
    }

    async fn list_all(&self, collection: &str) -> StoreResult<Vec<Record>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .map(|(id, fields)| Record::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn query_by_field(
        &self,
        collection: &str,
        field: &str,
        comparison: Comparison,
        value: &Value,
    ) -> StoreResult<Vec<Record>> {
        let collections = self.collections.read().await;
        let Some(records) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(records
            .iter()
            .filter(|(_, fields)| {
                fields
                    .get(field)
                    .is_some_and(|stored| comparison.matches(stored, value))
            })
            .map(|(id, fields)| Record::new(id.clone(), fields.clone()))
            .collect())
    }
}
