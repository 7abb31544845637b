// Test helper functions

use agentland::core::config::Config;
use agentland::core::services::{SearchResponse, Services};
use agentland::core::types::{FieldWeights, ScoredRecord};
use std::path::Path;

/// Create services over the seed catalogs with default configuration
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services() -> Services {
    Services::new(Config::default()).expect("Failed to create services")
}

/// Create services with a JSON records file as the `records` catalog
#[allow(dead_code)] // Used in integration tests
pub fn create_services_with_records(path: &Path) -> Services {
    let mut config = Config::default();
    config.data.records_file = Some(path.to_path_buf());
    Services::new(config).expect("Failed to create services")
}

/// Build weights, panicking on invalid input
#[allow(dead_code)] // Used in integration tests
pub fn weights(pairs: &[(&str, f64)]) -> FieldWeights {
    FieldWeights::new(pairs.iter().copied()).expect("Invalid test weights")
}

/// Assert scores are non-increasing
#[allow(dead_code)] // Used in integration tests
pub fn assert_ranked_desc<T>(hits: &[ScoredRecord<'_, T>]) {
    for pair in hits.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "Expected non-increasing scores, got {} then {}",
            pair[0].score,
            pair[1].score
        );
    }
}

/// IDs of a search response's hits, in rank order
#[allow(dead_code)] // Used in integration tests
pub fn hit_ids(response: &SearchResponse) -> Vec<&str> {
    response.hits.iter().map(|h| h.id.as_str()).collect()
}
