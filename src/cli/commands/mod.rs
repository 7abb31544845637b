//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod analyze;
pub mod browse;
pub mod completions;
pub mod config;
pub mod facets;
pub mod info;
pub mod insights;
pub mod search;
pub mod submit;

// Re-export argument types for use in mod.rs
pub use analyze::AnalyzeArgs;
pub use browse::BrowseArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use facets::FacetsArgs;
pub use info::InfoArgs;
pub use insights::InsightsArgs;
pub use search::SearchArgs;
pub use submit::SubmitArgs;

use crate::core::source::RecordFilter;

/// Parse a `field=value` filter argument
pub fn parse_filter(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid filter '{s}': expected field=value"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("invalid filter '{s}': field name is empty"));
    }
    Ok((field.to_string(), value.trim().to_string()))
}

/// Build a record filter from parsed `field=value` pairs
pub fn build_filter(pairs: &[(String, String)]) -> RecordFilter {
    pairs
        .iter()
        .fold(RecordFilter::new(), |filter, (field, value)| {
            filter.with(field.as_str(), value.as_str())
        })
}
