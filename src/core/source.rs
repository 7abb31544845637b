//! Read-only record providers.
//!
//! The ranking core never owns its data. A [`RecordSource`] hands out the
//! (optionally filtered) record set and the schema describing it, so the
//! seed catalogs can later be swapped for a real store without touching
//! the scoring code.

use crate::core::error::{AgentlandError, Result};
use crate::core::search::{Accessor, Schema};
use crate::core::types::{FieldText, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Filter values meaning "no restriction"
const WILDCARDS: [&str; 2] = ["alle", "all"];

/// Equality conditions on record fields, AND-ed together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    conditions: Vec<(String, String)>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `field = value` condition. Empty and wildcard values
    /// (`alle`, `all`) are ignored.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || WILDCARDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w)) {
            return self;
        }
        self.conditions.push((field.into(), trimmed.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[(String, String)] {
        &self.conditions
    }

    /// Resolve every condition's field against `schema`
    pub fn compile<T: 'static>(&self, schema: &Schema<T>) -> Result<CompiledFilter<T>> {
        let conditions = self
            .conditions
            .iter()
            .map(|(field, value)| Ok((schema.resolve(field)?, value.clone())))
            .collect::<Result<Vec<_>>>()?;
        Ok(CompiledFilter { conditions })
    }
}

/// A filter whose fields have been resolved to accessors
pub struct CompiledFilter<T> {
    conditions: Vec<(Accessor<T>, String)>,
}

impl<T> CompiledFilter<T> {
    /// Text fields match on equality; list fields when they contain the value.
    /// Records lacking a filtered field never match.
    pub fn matches(&self, record: &T) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| match field(record) {
                Some(FieldText::Text(value)) => value == expected,
                Some(FieldText::List(values)) => values.iter().any(|v| v == expected),
                None => false,
            })
    }
}

/// Injected read-only record provider
pub trait RecordSource<T>: Send + Sync {
    /// Records matching `filter`, in source order
    fn list_records(&self, filter: &RecordFilter) -> Result<Vec<T>>;

    /// Schema describing the records
    fn schema(&self) -> &Schema<T>;
}

/// In-memory record source
#[derive(Debug)]
pub struct StaticSource<T> {
    records: Vec<T>,
    schema: Schema<T>,
}

impl<T: 'static> StaticSource<T> {
    pub fn new(records: Vec<T>, schema: Schema<T>) -> Self {
        Self { records, schema }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> RecordSource<T> for StaticSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn list_records(&self, filter: &RecordFilter) -> Result<Vec<T>> {
        if filter.is_empty() {
            return Ok(self.records.clone());
        }

        let compiled = filter.compile(&self.schema)?;
        Ok(self
            .records
            .iter()
            .filter(|record| compiled.matches(record))
            .cloned()
            .collect())
    }

    fn schema(&self) -> &Schema<T> {
        &self.schema
    }
}

/// Generic records loaded from a JSON array on disk
#[derive(Debug)]
pub struct JsonFileSource {
    path: PathBuf,
    inner: StaticSource<Record>,
}

impl JsonFileSource {
    /// Load and coalesce every record in the file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path).map_err(|e| {
            AgentlandError::SourceError(format!("Failed to read {}: {e}", path.display()))
        })?;
        let records: Vec<Record> = serde_json::from_str(&contents).map_err(|e| {
            AgentlandError::SourceError(format!("Invalid records in {}: {e}", path.display()))
        })?;

        tracing::info!("Loaded {} record(s) from {}", records.len(), path.display());

        Ok(Self {
            path,
            inner: StaticSource::new(records, Schema::dynamic()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Record] {
        self.inner.records()
    }
}

impl RecordSource<Record> for JsonFileSource {
    fn list_records(&self, filter: &RecordFilter) -> Result<Vec<Record>> {
        self.inner.list_records(filter)
    }

    fn schema(&self) -> &Schema<Record> {
        self.inner.schema()
    }
}
