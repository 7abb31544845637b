//! Aggregation and ranking of scored records.

use crate::core::search::scorer::Scorer;
use crate::core::search::tokenizer::Tokenizer;
use crate::core::types::ScoredRecord;
use std::sync::Arc;

/// Tokenizer and scorer bundled for repeated ranking
#[derive(Debug, Clone)]
pub struct Ranker<T> {
    tokenizer: Tokenizer,
    scorer: Scorer<T>,
}

impl<T> Ranker<T> {
    pub fn new(tokenizer: Tokenizer, scorer: Scorer<T>) -> Self {
        Self { tokenizer, scorer }
    }

    /// Rank `records` for `query`.
    ///
    /// Records scoring 0 are dropped. The rest are sorted by descending
    /// score with a stable sort, so equal scores keep their input order.
    /// At most `limit` records are returned when a limit is given.
    pub fn rank<'r>(
        &self,
        records: &'r [T],
        query: &str,
        limit: Option<usize>,
    ) -> Vec<ScoredRecord<'r, T>> {
        let tokens = self.tokenizer.tokenize(query);
        if tokens.is_empty() || limit == Some(0) {
            tracing::debug!(query, "query has no tokens or zero limit, nothing to rank");
            return Vec::new();
        }

        let shared_query: Arc<str> = Arc::from(query);
        let mut hits: Vec<ScoredRecord<'r, T>> = records
            .iter()
            .filter_map(|record| {
                let score = self.scorer.score(record, &tokens);
                (score > 0.0).then(|| ScoredRecord {
                    record,
                    score,
                    query: Arc::clone(&shared_query),
                })
            })
            .collect();

        // `sort_by` is stable
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));

        let matched = hits.len();
        if let Some(n) = limit {
            hits.truncate(n);
        }

        tracing::debug!(
            query,
            tokens = tokens.len(),
            candidates = records.len(),
            matched,
            returned = hits.len(),
            "ranked records"
        );

        hits
    }
}

/// Rank `records` for `query` with the default tokenizer
pub fn rank<'r, T>(
    records: &'r [T],
    query: &str,
    scorer: &Scorer<T>,
    limit: Option<usize>,
) -> Vec<ScoredRecord<'r, T>> {
    Ranker::new(Tokenizer::default(), scorer.clone()).rank(records, query, limit)
}
