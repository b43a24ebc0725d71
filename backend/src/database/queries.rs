//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct store operations, pairing each entity
//! kind with its collection so handlers and services never spell collection
//! names or query shapes themselves.

use sakhi_adapters::{Comparison, DocumentStore, Fields, Record, StoreResult};
use serde_json::{json, Value};

use super::models::{to_fields, Activity, CommunityReport, ScanResult, User};
use super::{ACTIVITIES, HEALTH_CHECKS, REPORTS, SCANS, USERS};

const OWNER_FIELD: &str = "user_id";

async fn owned_by(
    store: &dyn DocumentStore,
    collection: &str,
    user_id: &str,
) -> StoreResult<Vec<Record>> {
    store
        .query_by_field(
            collection,
            OWNER_FIELD,
            Comparison::Equal,
            &Value::String(user_id.to_string()),
        )
        .await
}

pub async fn insert_user(store: &dyn DocumentStore, user: &User) -> StoreResult<Record> {
    store.create(USERS, to_fields(user)?).await
}

pub async fn find_user(store: &dyn DocumentStore, id: &str) -> StoreResult<Option<Record>> {
    store.get(USERS, id).await
}

pub async fn update_user(
    store: &dyn DocumentStore,
    id: &str,
    fields: Fields,
) -> StoreResult<Record> {
    store.update(USERS, id, fields).await
}

pub async fn list_users(store: &dyn DocumentStore) -> StoreResult<Vec<Record>> {
    store.list_all(USERS).await
}

/// Adds the given deltas to a user's counters in one store operation.
pub async fn credit_user(
    store: &dyn DocumentStore,
    id: &str,
    deltas: &[(&str, i64)],
) -> StoreResult<Record> {
    store.increment(USERS, id, deltas).await
}

pub async fn insert_scan(store: &dyn DocumentStore, scan: &ScanResult) -> StoreResult<Record> {
    store.create(SCANS, to_fields(scan)?).await
}

pub async fn scans_for_user(store: &dyn DocumentStore, user_id: &str) -> StoreResult<Vec<Record>> {
    owned_by(store, SCANS, user_id).await
}

pub async fn insert_report(
    store: &dyn DocumentStore,
    report: &CommunityReport,
) -> StoreResult<Record> {
    store.create(REPORTS, to_fields(report)?).await
}

pub async fn list_reports(store: &dyn DocumentStore) -> StoreResult<Vec<Record>> {
    store.list_all(REPORTS).await
}

pub async fn insert_activity(
    store: &dyn DocumentStore,
    activity: &Activity,
) -> StoreResult<Record> {
    store.create(ACTIVITIES, to_fields(activity)?).await
}

pub async fn activities_for_user(
    store: &dyn DocumentStore,
    user_id: &str,
) -> StoreResult<Vec<Record>> {
    owned_by(store, ACTIVITIES, user_id).await
}

/// Writes a throwaway document to prove the store accepts writes.
pub async fn write_health_check(store: &dyn DocumentStore) -> StoreResult<Record> {
    let mut fields = Fields::new();
    fields.insert("test".to_string(), json!(true));
    store.create(HEALTH_CHECKS, fields).await
}
