#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use sakhi_adapters::{
    Comparison, DocumentStore, Fields, MemoryStore, Record, StoreError, StoreResult,
};
use sakhi_backend::{build_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

pub fn app(store: Arc<dyn DocumentStore>) -> Router {
    build_router(AppState::new(store))
}

pub fn memory_app() -> Router {
    app(Arc::new(MemoryStore::new()))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    send_request(app, builder.body(body).expect("request")).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Registers a user and returns its id.
pub async fn register(app: &Router, name: &str) -> String {
    let (status, body) = post(
        app,
        "/api/users",
        serde_json::json!({ "name": name, "email": format!("{}@example.in", name.to_lowercase()) }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("user id").to_string()
}

/// Memory store that counts the writes made against existing records.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    pub updates: AtomicUsize,
    pub increments: AtomicUsize,
}

impl CountingStore {
    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn increments(&self) -> usize {
        self.increments.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    fn backend_tag(&self) -> &'static str {
        "counting"
    }

    async fn create(&self, collection: &str, fields: Fields) -> StoreResult<Record> {
        self.inner.create(collection, fields).await
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Record>> {
        self.inner.get(collection, id).await
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> StoreResult<Record> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(collection, id, fields).await
    }

    async fn increment(
        &self,
        collection: &str,
        id: &str,
        deltas: &[(&str, i64)],
    ) -> StoreResult<Record> {
        self.increments.fetch_add(1, Ordering::SeqCst);
        self.inner.increment(collection, id, deltas).await
    }

    async fn list_all(&self, collection: &str) -> StoreResult<Vec<Record>> {
        self.inner.list_all(collection).await
    }

    async fn query_by_field(
        &self,
        collection: &str,
        field: &str,
        comparison: Comparison,
        value: &Value,
    ) -> StoreResult<Vec<Record>> {
        self.inner
            .query_by_field(collection, field, comparison, value)
            .await
    }
}

/// Store whose every operation fails like an unreachable database.
pub struct UnreachableStore;

pub const UNREACHABLE: &str = "connection refused: db.internal:27017";

fn unreachable() -> StoreError {
    StoreError::Backend(UNREACHABLE.to_string())
}

#[async_trait]
impl DocumentStore for UnreachableStore {
    fn backend_tag(&self) -> &'static str {
        "unreachable"
    }

    async fn create(&self, _: &str, _: Fields) -> StoreResult<Record> {
        Err(unreachable())
    }

    async fn get(&self, _: &str, _: &str) -> StoreResult<Option<Record>> {
        Err(unreachable())
    }

    async fn update(&self, _: &str, _: &str, _: Fields) -> StoreResult<Record> {
        Err(unreachable())
    }

    async fn increment(&self, _: &str, _: &str, _: &[(&str, i64)]) -> StoreResult<Record> {
        Err(unreachable())
    }

    async fn list_all(&self, _: &str) -> StoreResult<Vec<Record>> {
        Err(unreachable())
    }

    async fn query_by_field(
        &self,
        _: &str,
        _: &str,
        _: Comparison,
        _: &Value,
    ) -> StoreResult<Vec<Record>> {
        Err(unreachable())
    }
}
