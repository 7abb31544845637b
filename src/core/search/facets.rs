//! Facet summaries: group-by counts over a record set.
//!
//! Counts are kept in first-occurrence order so output is deterministic.
//! That order carries no ranking; use [`Facet::top`] for "top N" views.

use crate::core::error::Result;
use crate::core::search::schema::{Accessor, Schema};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{HashMap, HashSet};

/// How a field value becomes a facet key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacetKey {
    /// The value as-is
    #[default]
    Value,
    /// The first whitespace-separated word (e.g. city of a location)
    FirstWord,
}

impl FacetKey {
    /// Blank values map to the empty key and are still counted
    fn apply(self, value: &str) -> &str {
        match self {
            FacetKey::Value => value.trim(),
            FacetKey::FirstWord => value.split_whitespace().next().unwrap_or(""),
        }
    }
}

/// One facet entry
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Value-to-count mapping in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facet {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Facet {
    pub fn new() -> Self {
        Self::default()
    }

    fn increment(&mut self, value: &str) {
        match self.index.get(value) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.counts.len());
                self.counts.push((value.to_string(), 1));
            }
        }
    }

    pub fn get(&self, value: &str) -> Option<usize> {
        self.index.get(value).map(|&i| self.counts[i].1)
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(v, c)| (v.as_str(), *c))
    }

    /// The `n` most frequent values, count descending. Ties keep
    /// first-occurrence order.
    pub fn top(&self, n: usize) -> Vec<FacetCount> {
        let mut sorted: Vec<&(String, usize)> = self.counts.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
            .into_iter()
            .take(n)
            .map(|(value, count)| FacetCount {
                value: value.clone(),
                count: *count,
            })
            .collect()
    }
}

impl Serialize for Facet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (value, count) in &self.counts {
            map.serialize_entry(value, count)?;
        }
        map.end()
    }
}

/// Count records per value of an already-resolved field.
///
/// A record contributes once to every distinct key it carries, so for
/// multi-valued fields the total may exceed the record count.
pub fn summarize<T>(records: &[T], field: &Accessor<T>, key: FacetKey) -> Facet {
    let mut facet = Facet::new();
    for record in records {
        let Some(text) = field(record) else {
            continue;
        };
        let mut seen: HashSet<&str> = HashSet::new();
        for value in text.values() {
            let k = key.apply(value);
            if seen.insert(k) {
                facet.increment(k);
            }
        }
    }
    facet
}

/// Facet `records` by `field` through `schema`
pub fn facets<T: 'static>(records: &[T], schema: &Schema<T>, field: &str) -> Result<Facet> {
    facets_with(records, schema, field, FacetKey::Value)
}

/// Facet `records` by `field`, deriving keys with `key`
pub fn facets_with<T: 'static>(
    records: &[T],
    schema: &Schema<T>,
    field: &str,
    key: FacetKey,
) -> Result<Facet> {
    let accessor = schema.resolve(field)?;
    let facet = summarize(records, &accessor, key);
    tracing::debug!(
        field,
        records = records.len(),
        distinct = facet.len(),
        "computed facet"
    );
    Ok(facet)
}
