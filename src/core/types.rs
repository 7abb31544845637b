//! Core data types for the AGENTLAND search core.
//!
//! Generic records, field weights and scored results. Typed catalogs
//! (listings, knowledge entries) live in [`crate::core::catalog`] and plug
//! into the same scoring pipeline through a [`Schema`](crate::core::search::Schema).

use crate::core::error::{AgentlandError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Anything that can appear in a ranking
pub trait Searchable {
    /// Opaque unique identifier
    fn id(&self) -> &str;

    /// Display title for result lists
    fn title(&self) -> &str;

    /// Secondary text shown under the title
    fn summary(&self) -> &str {
        ""
    }
}

/// Borrowed view of a single field's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldText<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl<'a> FieldText<'a> {
    /// Iterate over the field's values (one for text, many for lists)
    pub fn values(&self) -> impl Iterator<Item = &'a str> + 'a {
        let (single, list): (Option<&'a str>, &'a [String]) = match *self {
            FieldText::Text(s) => (Some(s), &[]),
            FieldText::List(items) => (None, items),
        };
        single.into_iter().chain(list.iter().map(String::as_str))
    }
}

/// Owned value of a generic record field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_field_text(&self) -> FieldText<'_> {
        match self {
            FieldValue::Text(s) => FieldText::Text(s),
            FieldValue::List(items) => FieldText::List(items),
        }
    }

    /// Coalesce an arbitrary JSON value. `null` yields `None`.
    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Array(items) => Some(FieldValue::List(
                items.into_iter().filter_map(scalar_text).collect(),
            )),
            other => scalar_text(other).map(FieldValue::Text),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        // Nested structures are flattened to their JSON text
        other => Some(other.to_string()),
    }
}

/// A generic searchable entity with named text or list fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    /// Opaque unique identifier
    pub id: String,

    /// Named fields
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<FieldText<'_>> {
        self.fields.get(name).map(FieldValue::as_field_text)
    }
}

impl Searchable for Record {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        match self.fields.get("title") {
            Some(FieldValue::Text(s)) => s,
            _ => &self.id,
        }
    }

    fn summary(&self) -> &str {
        ["description", "content", "body"]
            .iter()
            .find_map(|name| match self.fields.get(*name) {
                Some(FieldValue::Text(s)) => Some(s.as_str()),
                _ => None,
            })
            .unwrap_or("")
    }
}

/// Wire shape of a record before coalescing
#[derive(Deserialize)]
struct RawRecord {
    id: Value,
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl TryFrom<RawRecord> for Record {
    type Error = String;

    fn try_from(raw: RawRecord) -> std::result::Result<Self, Self::Error> {
        let id = match raw.id {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => return Err(format!("record id must be a string or number, got {other}")),
        };

        let fields = raw
            .fields
            .into_iter()
            .filter_map(|(name, value)| FieldValue::from_json(value).map(|v| (name, v)))
            .collect();

        Ok(Record { id, fields })
    }
}

/// Per-field importance multipliers for one search configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldWeights {
    entries: Vec<(String, f64)>,
}

impl FieldWeights {
    /// Build from (field, weight) pairs. Weights must be positive and finite.
    ///
    /// A field listed twice keeps its last weight.
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, f64)> = Vec::new();
        for (field, weight) in pairs {
            let field = field.into();
            if !weight.is_finite() || weight <= 0.0 {
                return Err(AgentlandError::InvalidWeight { field, weight });
            }
            match entries.iter_mut().find(|(name, _)| *name == field) {
                Some(existing) => existing.1 = weight,
                None => entries.push((field, weight)),
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(name, w)| (name.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return a copy with `overrides` replacing or adding weights
    pub fn merged(&self, overrides: &BTreeMap<String, f64>) -> Result<Self> {
        FieldWeights::new(
            self.entries
                .iter()
                .map(|(name, w)| (name.clone(), *w))
                .chain(overrides.iter().map(|(name, w)| (name.clone(), *w))),
        )
    }
}

/// A record paired with its relevance score for a query
#[derive(Debug, Clone)]
pub struct ScoredRecord<'r, T> {
    pub record: &'r T,

    /// Sum of matched field weights (always > 0 in ranked output)
    pub score: f64,

    /// The query the score was computed for
    pub query: Arc<str>,
}
