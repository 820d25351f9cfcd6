//! Field checks shared by the entity constructors
//!
//! Entities accept either a typed payload struct or a loosely typed JSON
//! mapping. Both paths funnel through these helpers so the two error kinds
//! are raised the same way: every presence check runs before any type check.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult, EntityKind};

/// Fail with `NOT_CONTAIN_NEEDED_PROPERTY` if any required text is empty
pub(crate) fn require_text(entity: EntityKind, fields: &[&str]) -> DomainResult<()> {
    if fields.iter().any(|field| field.is_empty()) {
        return Err(DomainError::missing_property(entity));
    }
    Ok(())
}

/// Like counts are derived from `COUNT(*)` and can never be negative
pub(crate) fn like_count(entity: EntityKind, count: i64) -> DomainResult<u64> {
    u64::try_from(count).map_err(|_| DomainError::invalid_type(entity))
}

/// Read-only view over a JSON object payload
pub(crate) struct JsonPayload<'a> {
    entity: EntityKind,
    fields: &'a Map<String, Value>,
}

impl<'a> JsonPayload<'a> {
    /// Wrap a JSON value. A non-object carries none of the needed properties.
    pub(crate) fn new(entity: EntityKind, value: &'a Value) -> DomainResult<Self> {
        value
            .as_object()
            .map(|fields| Self { entity, fields })
            .ok_or_else(|| DomainError::missing_property(entity))
    }

    /// Every key must be present with a truthy value
    pub(crate) fn require(&self, keys: &[&str]) -> DomainResult<()> {
        if keys
            .iter()
            .all(|key| self.fields.get(*key).is_some_and(is_truthy))
        {
            Ok(())
        } else {
            Err(DomainError::missing_property(self.entity))
        }
    }

    /// A string field that must exist
    pub(crate) fn string(&self, key: &str) -> DomainResult<String> {
        match self.fields.get(key) {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(DomainError::invalid_type(self.entity)),
        }
    }

    /// A string field that may be absent or null
    pub(crate) fn optional_string(&self, key: &str) -> DomainResult<Option<String>> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(DomainError::invalid_type(self.entity)),
        }
    }

    /// An RFC 3339 timestamp; absent means "now"
    pub(crate) fn date(&self, key: &str) -> DomainResult<DateTime<Utc>> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(Utc::now()),
            Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .map(|date| date.with_timezone(&Utc))
                .map_err(|_| DomainError::invalid_type(self.entity)),
            Some(_) => Err(DomainError::invalid_type(self.entity)),
        }
    }

    /// A boolean flag; absent means `false`
    pub(crate) fn flag(&self, key: &str) -> DomainResult<bool> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(DomainError::invalid_type(self.entity)),
        }
    }

    /// A non-negative integer; absent means zero
    pub(crate) fn count(&self, key: &str) -> DomainResult<u64> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(0),
            Some(Value::Number(n)) => n
                .as_u64()
                .ok_or_else(|| DomainError::invalid_type(self.entity)),
            Some(_) => Err(DomainError::invalid_type(self.entity)),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
