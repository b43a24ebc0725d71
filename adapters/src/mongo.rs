//! MongoDB implementation of the `DocumentStore` trait.
//!
//! This file contains the concrete adapter for a managed MongoDB deployment:
//! the client wrapper, the mapping between `Fields` and BSON documents, and the
//! translation of store operations into driver calls. Record ids are
//! `ObjectId`s rendered as hex strings; increments use the server-side `$inc`
//! operator so concurrent writers never lose updates.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Bson, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::{StoreError, StoreResult};
use crate::models::{server_timestamp, Comparison, Fields, Record, CREATED_AT_FIELD};
use crate::DocumentStore;

const ID_FIELD: &str = "_id";

pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connects to `uri` and verifies the deployment answers a ping.
    pub async fn connect(uri: &str, database: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await.map_err(backend_error)?;
        let database = client.database(database);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(backend_error)?;
        info!(database = database.name(), "connected to MongoDB");

        Ok(Self { database })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

fn backend_error(err: mongodb::error::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

fn to_document(fields: &Fields) -> StoreResult<Document> {
    bson::to_document(fields).map_err(|err| StoreError::Encoding(err.to_string()))
}

fn into_record(mut document: Document) -> StoreResult<Record> {
    let id = match document.remove(ID_FIELD) {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(id)) => id,
        Some(other) => other.to_string(),
        None => {
            return Err(StoreError::Encoding(
                "document returned without an _id".to_string(),
            ))
        }
    };

    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(data) => Ok(Record::new(id, data)),
        other => Err(StoreError::Encoding(format!(
            "expected a document, got {other}"
        ))),
    }
}

fn comparison_operator(comparison: Comparison) -> &'static str {
    match comparison {
        Comparison::Equal => "$eq",
        Comparison::NotEqual => "$ne",
        Comparison::LessThan => "$lt",
        Comparison::LessThanOrEqual => "$lte",
        Comparison::GreaterThan => "$gt",
        Comparison::GreaterThanOrEqual => "$gte",
    }
}

/// Builds `{ field: { <op>: value, $exists: true } }`.
fn field_filter(field: &str, comparison: Comparison, value: &Value) -> StoreResult<Document> {
    let operand = bson::to_bson(value).map_err(|err| StoreError::Encoding(err.to_string()))?;

    let mut condition = Document::new();
    condition.insert(comparison_operator(comparison), operand);
    condition.insert("$exists", true);

    let mut filter = Document::new();
    filter.insert(field, condition);
    Ok(filter)
}

fn increment_document(deltas: &[(&str, i64)]) -> Document {
    let mut inc = Document::new();
    for &(field, delta) in deltas {
        inc.insert(field, Bson::Int64(delta));
    }
    inc
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend_tag(&self) -> &'static str {
        "mongodb"
    }

    async fn create(&self, collection: &str, mut fields: Fields) -> StoreResult<Record> {
        let oid = ObjectId::new();
        fields.remove(ID_FIELD);
        fields.insert(CREATED_AT_FIELD.to_string(), server_timestamp());

        let mut document = to_document(&fields)?;
        document.insert(ID_FIELD, oid);

        self.collection(collection)
            .insert_one(document)
            .await
            .map_err(backend_error)?;

        debug!(collection, id = %oid, "created record");
        Ok(Record::new(oid.to_hex(), fields))
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Record>> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };

        self.collection(collection)
            .find_one(doc! { "_id": oid })
            .await
            .map_err(backend_error)?
            .map(into_record)
            .transpose()
    }

    async fn update(&self, collection: &str, id: &str, mut fields: Fields) -> StoreResult<Record> {
        let oid = parse_id(id).ok_or_else(|| StoreError::not_found(collection, id))?;
        fields.remove(ID_FIELD);

        if fields.is_empty() {
            return self
                .get(collection, id)
                .await?
                .ok_or_else(|| StoreError::not_found(collection, id));
        }

        let set = to_document(&fields)?;
        self.collection(collection)
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(backend_error)?
            .map(into_record)
            .transpose()?
            .ok_or_else(|| StoreError::not_found(collection, id))
    }

    async fn increment(
        &self,
        collection: &str,
        id: &str,
        deltas: &[(&str, i64)],
    ) -> StoreResult<Record> {
        let oid = parse_id(id).ok_or_else(|| StoreError::not_found(collection, id))?;

        if deltas.is_empty() {
            return self
                .get(collection, id)
                .await?
                .ok_or_else(|| StoreError::not_found(collection, id));
        }

        let inc = increment_document(deltas);
        self.collection(collection)
            .find_one_and_update(doc! { "_id": oid }, doc! { "$inc": inc })
            .return_document(ReturnDocument::After)
            .await
            .map_err(backend_error)?
            .map(into_record)
            .transpose()?
            .ok_or_else(|| StoreError::not_found(collection, id))
    }

    async fn list_all(&self, collection: &str) -> StoreResult<Vec<Record>> {
        let documents: Vec<Document> = self
            .collection(collection)
            .find(doc! {})
            .await
            .map_err(backend_error)?
            .try_collect()
            .await
            .map_err(backend_error)?;

        documents.into_iter().map(into_record).collect()
    }

    async fn query_by_field(
        &self,
        collection: &str,
        field: &str,
        comparison: Comparison,
        value: &Value,
    ) -> StoreResult<Vec<Record>> {
        let filter = field_filter(field, comparison, value)?;

        let documents: Vec<Document> = self
            .collection(collection)
            .find(filter)
            .await
            .map_err(backend_error)?
            .try_collect()
            .await
            .map_err(backend_error)?;

        documents.into_iter().map(into_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_filter_requires_field_presence() {
        let filter = field_filter("user_id", Comparison::NotEqual, &json!("u1")).unwrap();
        let condition = filter.get_document("user_id").unwrap();

        assert_eq!(condition.get_str("$ne").unwrap(), "u1");
        assert!(condition.get_bool("$exists").unwrap());
    }

    #[test]
    fn test_increment_document_uses_int64() {
        let inc = increment_document(&[("reports_submitted", 1), ("coins", 10)]);
        assert_eq!(inc.get_i64("reports_submitted").unwrap(), 1);
        assert_eq!(inc.get_i64("coins").unwrap(), 10);
    }

    #[test]
    fn test_into_record_hex_id_and_plain_json() {
        let oid = ObjectId::new();
        let document = doc! {
            "_id": oid,
            "name": "Asha",
            "total_scans": 3_i64,
            "details": { "source": "sms" },
        };

        let record = into_record(document).unwrap();
        assert_eq!(record.id, oid.to_hex());
        assert_eq!(record.data["name"], "Asha");
        assert_eq!(record.data["total_scans"], json!(3));
        assert_eq!(record.data["details"]["source"], "sms");
        assert!(!record.data.contains_key("_id"));
    }

    #[test]
    fn test_malformed_id_is_not_an_object_id() {
        assert!(parse_id("not-an-object-id").is_none());
        assert!(parse_id(&ObjectId::new().to_hex()).is_some());
    }
}
