//! Rust structs that represent the stored document shapes.
//!
//! These models define the fields each entity kind is created with. They are
//! converted to the adapter's generic `Fields` mapping on write; reads return
//! generic records, since stored users may carry fields added by updates.

use sakhi_adapters::{Fields, StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub total_scans: i64,
    #[serde(default)]
    pub reports_submitted: i64,
    #[serde(default)]
    pub coins: i64,
}

impl User {
    pub fn new(name: String, email: String, phone: Option<String>) -> Self {
        Self {
            name,
            email,
            phone,
            total_scans: 0,
            reports_submitted: 0,
            coins: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub user_id: String,
    pub scan_type: String,
    pub content: String,
    pub result: String,
    #[serde(default)]
    pub details: Fields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityReport {
    pub user_id: String,
    pub report_type: String,
    pub content: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub user_id: String,
    pub activity_type: String,
    #[serde(default)]
    pub details: Fields,
}

/// Serializes a model into the mapping handed to the store.
pub fn to_fields<T: Serialize>(model: &T) -> StoreResult<Fields> {
    match serde_json::to_value(model)? {
        Value::Object(fields) => Ok(fields),
        other => Err(StoreError::Encoding(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_user_starts_with_zero_counters() {
        let user = User::new("Asha".into(), "asha@example.in".into(), None);
        let fields = to_fields(&user).unwrap();

        assert_eq!(
            Value::Object(fields),
            json!({
                "name": "Asha",
                "email": "asha@example.in",
                "phone": null,
                "total_scans": 0,
                "reports_submitted": 0,
                "coins": 0,
            })
        );
    }

    #[test]
    fn test_scan_details_default_to_empty_mapping() {
        let scan: ScanResult = serde_json::from_value(json!({
            "user_id": "u1",
            "scan_type": "url",
            "content": "http://example.in",
            "result": "safe",
        }))
        .unwrap();

        assert!(scan.details.is_empty());
        assert_eq!(to_fields(&scan).unwrap()["details"], json!({}));
    }
}
