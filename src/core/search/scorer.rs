//! Weighted field scoring.
//!
//! For every weighted field and every query token, a record earns the
//! field's weight when the field text contains the token
//! (case-insensitive substring containment on both sides). Matches accumulate with no
//! cap. A list field matches a token when any of its values contains it
//! and earns the weight once for that token.

use crate::core::search::schema::Accessor;
use std::fmt;
use std::sync::Arc;

/// Weighted fields resolved against a schema
pub struct Scorer<T> {
    fields: Vec<WeightedField<T>>,
}

struct WeightedField<T> {
    name: String,
    weight: f64,
    accessor: Accessor<T>,
}

impl<T> Scorer<T> {
    pub(crate) fn new(fields: Vec<(String, f64, Accessor<T>)>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, weight, accessor)| WeightedField {
                    name,
                    weight,
                    accessor,
                })
                .collect(),
        }
    }

    /// Score one record. Tokens are compared case-insensitively; an empty
    /// token slice scores 0.
    pub fn score(&self, record: &T, tokens: &[String]) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        let mut score = 0.0;
        for field in &self.fields {
            let Some(text) = (field.accessor)(record) else {
                continue;
            };

            let haystack: Vec<String> = text.values().map(str::to_lowercase).collect();
            for token in &tokens {
                if haystack.iter().any(|value| value.contains(token.as_str())) {
                    score += field.weight;
                }
            }
        }
        score
    }

    /// The resolved (field, weight) pairs
    pub fn weights(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.fields.iter().map(|f| (f.name.as_str(), f.weight))
    }
}

impl<T> Clone for Scorer<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .map(|f| WeightedField {
                    name: f.name.clone(),
                    weight: f.weight,
                    accessor: Arc::clone(&f.accessor),
                })
                .collect(),
        }
    }
}

impl<T> fmt::Debug for Scorer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.weights()).finish()
    }
}

/// Score `record` against `tokens` with a resolved scorer
pub fn score_record<T>(record: &T, tokens: &[String], scorer: &Scorer<T>) -> f64 {
    scorer.score(record, tokens)
}
