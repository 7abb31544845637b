//! Explicit field schemas.
//!
//! A [`Schema`] maps field names to accessor functions for one record
//! type. Weights, facets and filters resolve their field names against
//! the schema once, up front, so per-record scoring never looks fields up
//! by name.
//!
//! Typed schemas are closed: naming a field they do not define is a
//! caller error. The schema for generic [`Record`]s is dynamic and
//! resolves any name; records lacking the field simply contribute nothing.

use crate::core::error::{AgentlandError, Result};
use crate::core::search::scorer::Scorer;
use crate::core::types::{FieldText, FieldWeights, Record};
use std::fmt;
use std::sync::Arc;

/// Shared accessor for one field of `T`
pub type Accessor<T> = Arc<dyn for<'a> Fn(&'a T) -> Option<FieldText<'a>> + Send + Sync>;

fn accessor<T, F>(f: F) -> Accessor<T>
where
    F: for<'a> Fn(&'a T) -> Option<FieldText<'a>> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Field-name to accessor mapping for record type `T`
pub struct Schema<T> {
    fields: Vec<(String, Accessor<T>)>,
    dynamic: Option<fn(&str) -> Accessor<T>>,
}

impl<T: 'static> Schema<T> {
    /// Create an empty, closed schema
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            dynamic: None,
        }
    }

    /// Register a field with a raw accessor
    pub fn field<F>(mut self, name: &str, f: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<FieldText<'a>> + Send + Sync + 'static,
    {
        self.fields.retain(|(existing, _)| existing != name);
        self.fields.push((name.to_string(), accessor(f)));
        self
    }

    /// Register a single-valued text field
    pub fn text<F>(self, name: &str, f: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
    {
        self.field(name, move |record: &T| Some(FieldText::Text(f(record))))
    }

    /// Register a text field that may be absent
    pub fn optional_text<F>(self, name: &str, f: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync + 'static,
    {
        self.field(name, move |record: &T| f(record).map(FieldText::Text))
    }

    /// Register a multi-valued field
    pub fn list<F>(self, name: &str, f: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> &'a [String] + Send + Sync + 'static,
    {
        self.field(name, move |record: &T| Some(FieldText::List(f(record))))
    }

    /// Names of the explicitly registered fields, in registration order
    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic.is_some()
    }

    /// Resolve a field name to its accessor
    pub fn resolve(&self, name: &str) -> Result<Accessor<T>> {
        if let Some((_, f)) = self.fields.iter().find(|(field, _)| field == name) {
            return Ok(Arc::clone(f));
        }

        match self.dynamic {
            Some(make) => Ok(make(name)),
            None => Err(AgentlandError::UnknownField {
                field: name.to_string(),
                valid_fields: self.field_names(),
            }),
        }
    }

    /// Resolve every weighted field into a [`Scorer`]
    pub fn scorer(&self, weights: &FieldWeights) -> Result<Scorer<T>> {
        let fields = weights
            .iter()
            .map(|(name, weight)| Ok((name.to_string(), weight, self.resolve(name)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Scorer::new(fields))
    }
}

impl Schema<Record> {
    /// Schema for generic records: every field name resolves
    pub fn dynamic() -> Self {
        Self {
            fields: Vec::new(),
            dynamic: Some(record_accessor),
        }
    }
}

fn record_accessor(name: &str) -> Accessor<Record> {
    let name = name.to_string();
    accessor(move |record: &Record| record.field(&name))
}

impl<T: 'static> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field(
                "fields",
                &self.fields.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .field("dynamic", &self.dynamic.is_some())
            .finish()
    }
}
