//! Generic data models for the `adapters` crate.
//!
//! These models define the backend-neutral representation of a stored
//! document (an identifier plus a field mapping) and of field comparisons, so
//! the backend services can work against any `DocumentStore` implementation
//! with a consistent data format.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::StoreError;

/// Field name the store stamps on every record it creates.
pub const CREATED_AT_FIELD: &str = "created_at";

/// The field mapping of a single document.
pub type Fields = Map<String, Value>;

/// A stored document: its store-assigned id and its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub data: Fields,
}

impl Record {
    pub fn new(id: impl Into<String>, data: Fields) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Integer value of `field`, treating an absent field as 0.
    ///
    /// Doubles (a counter overwritten with `2.0`, say) are truncated.
    pub fn counter(&self, field: &str) -> i64 {
        self.data
            .get(field)
            .and_then(|value| value.as_i64().or_else(|| value.as_f64().map(|f| f as i64)))
            .unwrap_or(0)
    }
}

/// Server-side creation timestamp in RFC 3339 form.
pub(crate) fn server_timestamp() -> Value {
    Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Comparison applied by `DocumentStore::query_by_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl Comparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
            Comparison::LessThan => "<",
            Comparison::LessThanOrEqual => "<=",
            Comparison::GreaterThan => ">",
            Comparison::GreaterThanOrEqual => ">=",
        }
    }

    /// Whether a stored `field` value satisfies `field <op> expected`.
    ///
    /// Ordered comparisons only apply between two numbers or two strings;
    /// anything else never matches.
    pub fn matches(&self, field: &Value, expected: &Value) -> bool {
        let ordering = match self {
            Comparison::Equal => return values_equal(field, expected),
            Comparison::NotEqual => return !values_equal(field, expected),
            _ => order_values(field, expected),
        };
        let Some(ordering) = ordering else {
            return false;
        };

        match self {
            Comparison::LessThan => ordering == Ordering::Less,
            Comparison::LessThanOrEqual => ordering != Ordering::Greater,
            Comparison::GreaterThan => ordering == Ordering::Greater,
            Comparison::GreaterThanOrEqual => ordering != Ordering::Less,
            Comparison::Equal | Comparison::NotEqual => false,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Comparison {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "==" => Ok(Comparison::Equal),
            "!=" => Ok(Comparison::NotEqual),
            "<" => Ok(Comparison::LessThan),
            "<=" => Ok(Comparison::LessThanOrEqual),
            ">" => Ok(Comparison::GreaterThan),
            ">=" => Ok(Comparison::GreaterThanOrEqual),
            other => Err(StoreError::InvalidQuery(format!(
                "unsupported comparison operator '{other}'"
            ))),
        }
    }
}

// 1 and 1.0 are the same number to a document store.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

fn order_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comparison_parse_round_trips_display() {
        for op in ["==", "!=", "<", "<=", ">", ">="] {
            let parsed: Comparison = op.parse().unwrap();
            assert_eq!(parsed.to_string(), op);
        }
    }

    #[test]
    fn test_unknown_operator_is_invalid_query() {
        let err = "array-contains".parse::<Comparison>().unwrap_err();
        assert!(matches!(err, StoreError::InvalidQuery(_)));
    }

    #[test]
    fn test_equality_treats_int_and_float_alike() {
        assert!(Comparison::Equal.matches(&json!(1), &json!(1.0)));
        assert!(!Comparison::Equal.matches(&json!("1"), &json!(1)));
        assert!(Comparison::NotEqual.matches(&json!("a"), &json!("b")));
    }

    #[test]
    fn test_ordered_comparisons() {
        assert!(Comparison::LessThan.matches(&json!(3), &json!(10)));
        assert!(Comparison::GreaterThanOrEqual.matches(&json!(10), &json!(10)));
        assert!(Comparison::GreaterThan.matches(&json!("b"), &json!("a")));
        assert!(!Comparison::LessThan.matches(&json!("3"), &json!(10)));
        assert!(!Comparison::LessThanOrEqual.matches(&json!(null), &json!(1)));
    }

    #[test]
    fn test_record_counter_defaults_to_zero() {
        let mut data = Fields::new();
        data.insert("coins".to_string(), json!(20));
        let record = Record::new("abc", data);

        assert_eq!(record.counter("coins"), 20);
        assert_eq!(record.counter("total_scans"), 0);
    }
}
