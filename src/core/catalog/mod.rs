//! Seed catalogs of the regional portal.
//!
//! Each catalog pairs a typed record with its [`Schema`](crate::core::search::Schema)
//! and a default weight profile:
//!
//! - **saarbrett**: community listings (jobs, housing, events, ...)
//! - **knowledge**: verified regional knowledge-base entries
//! - **records**: generic records loaded from a JSON file

pub mod knowledge;
pub mod saarbrett;

use crate::core::error::{AgentlandError, Result};
use crate::core::types::FieldWeights;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Searchable record collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Catalog {
    Saarbrett,
    Knowledge,
    Records,
}

impl Catalog {
    pub const ALL: [Catalog; 3] = [Catalog::Saarbrett, Catalog::Knowledge, Catalog::Records];

    pub fn as_str(&self) -> &'static str {
        match self {
            Catalog::Saarbrett => "saarbrett",
            Catalog::Knowledge => "knowledge",
            Catalog::Records => "records",
        }
    }

    /// Built-in weight profile
    pub fn default_weights(&self) -> Result<FieldWeights> {
        match self {
            Catalog::Saarbrett => saarbrett::default_weights(),
            Catalog::Knowledge => knowledge::default_weights(),
            Catalog::Records => FieldWeights::new([
                ("title", 3.0),
                ("tags", 2.0),
                ("description", 1.0),
                ("content", 1.0),
            ]),
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Catalog {
    type Err = AgentlandError;

    fn from_str(s: &str) -> Result<Self> {
        Catalog::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AgentlandError::UnknownCatalog(s.to_string()))
    }
}

/// One page of an ordered result set
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}

/// Slice `items` into the page starting at `offset`
pub fn paginate<T: Clone>(items: &[T], offset: usize, limit: usize) -> Page<T> {
    let start = offset.min(items.len());
    let end = start.saturating_add(limit).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        total: items.len(),
        limit,
        offset,
        has_more: offset.saturating_add(limit) < items.len(),
    }
}
