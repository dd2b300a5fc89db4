// Field values used for equality queries and row binding

use chrono::{DateTime, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{DomainError, Result};

/// Primary key assigned by the store
pub type EntityId = i64;

/// Storage kind of a column, used to parse raw filter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Integer,
    Bool,
    Timestamp,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Bool => write!(f, "boolean"),
            ColumnKind::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// A single column value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Null,
    Text(String),
    Integer(i64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// Parse a raw string (query parameter, CLI flag) according to the column kind.
    ///
    /// Text is taken verbatim, so `" Space"` and `"null"` match those exact
    /// strings. For the other kinds the value is trimmed and the literal
    /// `null` yields [`FieldValue::Null`]. Booleans accept `true/false/1/0`,
    /// timestamps accept RFC 3339 or epoch milliseconds.
    pub fn parse(column: &str, kind: ColumnKind, raw: &str) -> Result<Self> {
        if kind == ColumnKind::Text {
            return Ok(FieldValue::Text(raw.to_string()));
        }

        let raw = raw.trim();
        if raw == "null" {
            return Ok(FieldValue::Null);
        }

        let invalid = || DomainError::InvalidValue {
            column: column.to_string(),
            value: raw.to_string(),
            expected: kind.to_string(),
        };

        match kind {
            ColumnKind::Text => Ok(FieldValue::Text(raw.to_string())),
            ColumnKind::Integer => raw
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| invalid()),
            ColumnKind::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(FieldValue::Bool(true)),
                "false" | "0" => Ok(FieldValue::Bool(false)),
                _ => Err(invalid()),
            },
            ColumnKind::Timestamp => {
                if let Ok(millis) = raw.parse::<i64>() {
                    return from_millis(millis).map(FieldValue::Timestamp).ok_or_else(invalid);
                }
                DateTime::parse_from_rfc3339(raw)
                    .map(|dt| FieldValue::Timestamp(truncate_millis(dt.with_timezone(&Utc))))
                    .map_err(|_| invalid())
            }
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value as i64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Drop sub-millisecond precision (timestamps are stored as epoch ms)
pub fn truncate_millis(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(3)
}

/// Epoch milliseconds to UTC, `None` when out of range
pub fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_variants() {
        for raw in ["true", "TRUE", "1"] {
            assert_eq!(
                FieldValue::parse("remote", ColumnKind::Bool, raw).unwrap(),
                FieldValue::Bool(true)
            );
        }
        assert_eq!(
            FieldValue::parse("remote", ColumnKind::Bool, "0").unwrap(),
            FieldValue::Bool(false)
        );
        assert!(FieldValue::parse("remote", ColumnKind::Bool, "yes").is_err());
    }

    #[test]
    fn test_parse_integer_rejects_text() {
        let err = FieldValue::parse("salary", ColumnKind::Integer, "lots").unwrap_err();
        assert!(err.to_string().contains("salary"));
        assert!(err.to_string().contains("integer"));
    }

    #[test]
    fn test_parse_timestamp_rfc3339_and_millis() {
        let from_text =
            FieldValue::parse("posted_at", ColumnKind::Timestamp, "2024-01-02T03:04:05.678Z")
                .unwrap();
        let from_ms = FieldValue::parse("posted_at", ColumnKind::Timestamp, "1704164645678")
            .unwrap();
        assert_eq!(from_text, from_ms);
    }

    #[test]
    fn test_parse_null_literal() {
        assert!(FieldValue::parse("employer_id", ColumnKind::Integer, "null")
            .unwrap()
            .is_null());
    }

    #[test]
    fn test_text_is_taken_verbatim() {
        assert_eq!(
            FieldValue::parse("location", ColumnKind::Text, " Space").unwrap(),
            FieldValue::Text(" Space".into())
        );
        assert_eq!(
            FieldValue::parse("title", ColumnKind::Text, "null").unwrap(),
            FieldValue::Text("null".into())
        );
        assert_eq!(
            FieldValue::parse("salary", ColumnKind::Integer, " 25 ").unwrap(),
            FieldValue::Integer(25)
        );
    }

    #[test]
    fn test_empty_text_is_kept() {
        assert_eq!(
            FieldValue::parse("domain", ColumnKind::Text, "").unwrap(),
            FieldValue::Text(String::new())
        );
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some("x")), FieldValue::Text("x".into()));
    }
}
