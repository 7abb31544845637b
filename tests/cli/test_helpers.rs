//! CLI test helpers
//!
//! Provides Arc<Services> wrappers matching CLI execute() signatures.

use agentland::core::config::Config;
use agentland::core::services::Services;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Create test services wrapped in Arc (matching CLI execute() signatures)
///
/// The returned TempDir is a scratch directory for files a test writes.
pub fn create_cli_test_services() -> (Arc<Services>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let services = Arc::new(Services::new(Config::default()).expect("Failed to create services"));
    (services, temp_dir)
}

/// Create test services with a records file configured
pub fn create_cli_services_with_records(path: &Path) -> Arc<Services> {
    let mut config = Config::default();
    config.data.records_file = Some(path.to_path_buf());
    Arc::new(Services::new(config).expect("Failed to create services"))
}

/// Write a file into `dir` and return its path
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write file");
    path
}
