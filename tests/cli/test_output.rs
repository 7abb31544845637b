//! Tests for CLI output formatting helpers
//!
//! - Character-safe truncation (umlauts, emoji)
//! - Score formatting
//! - Print helpers

use agentland::cli::output::{
    format_score, print_error, print_facet, print_header, print_success, print_warning,
    truncate_chars,
};
use agentland::core::search::{facets, Schema};
use agentland::core::types::Record;

// =============================================================================
// truncate_chars tests
// =============================================================================

#[test]
fn test_truncate_short_text_unchanged() {
    assert_eq!(truncate_chars("", 10), "");
    assert_eq!(truncate_chars("Merzig", 6), "Merzig");
}

#[test]
fn test_truncate_never_splits_characters() {
    let text = "Größter Freizeitsee im Saarland 🌊🌊🌊";
    for max in 0..text.chars().count() + 2 {
        let out = truncate_chars(text, max);
        assert!(out.chars().count() <= max.max(3));
    }
}

#[test]
fn test_truncate_emoji() {
    assert_eq!(truncate_chars("🍰🍰🍰🍰🍰🍰", 5), "🍰🍰...");
}

// =============================================================================
// format_score tests
// =============================================================================

#[test]
fn test_format_score_integers_and_fractions() {
    assert_eq!(format_score(0.0), "0");
    assert_eq!(format_score(10.0), "10");
    assert_eq!(format_score(0.5), "0.5");
    assert_eq!(format_score(7.25), "7.25");
}

// =============================================================================
// print helpers (smoke tests)
// =============================================================================

#[test]
fn test_print_helpers_do_not_panic() {
    print_success("ok");
    print_warning("careful");
    print_error("failed");
    print_header("Header");

    let records = vec![
        Record::new("1").with("category", "natur"),
        Record::new("2").with("category", "völklingen-kultur"),
    ];
    let facet = facets(&records, &Schema::dynamic(), "category").unwrap();
    print_facet(&facet, 2);
}
