// Integration tests for facet summaries

use crate::common::saarland_records;
use agentland::core::search::{facets, facets_with, FacetKey, Schema};
use agentland::core::AgentlandError;

#[test]
fn test_tags_facet_of_first_two_records() {
    let records = saarland_records();
    let facet = facets(&records[..2], &Schema::dynamic(), "tags").unwrap();

    assert_eq!(
        serde_json::to_string(&facet).unwrap(),
        r#"{"natur":1,"outdoor":1,"business":1}"#
    );
}

#[test]
fn test_category_counts_sum_to_record_count() {
    let records = saarland_records();
    let facet = facets(&records, &Schema::dynamic(), "category").unwrap();

    assert_eq!(facet.total(), records.len());
    assert_eq!(facet.get("natur"), Some(2));
    assert_eq!(facet.get("business"), Some(2));
    assert_eq!(facet.get("kultur"), Some(1));
}

#[test]
fn test_top_values() {
    let records = saarland_records();
    let facet = facets(&records, &Schema::dynamic(), "tags").unwrap();
    let top = facet.top(2);

    // outdoor and business both appear twice; outdoor was seen first
    assert_eq!(top.len(), 2);
    assert_eq!((top[0].value.as_str(), top[0].count), ("outdoor", 2));
    assert_eq!((top[1].value.as_str(), top[1].count), ("business", 2));
}

#[test]
fn test_location_prefix_facet() {
    let records = saarland_records();
    let facet =
        facets_with(&records, &Schema::dynamic(), "location", FacetKey::FirstWord).unwrap();

    assert_eq!(facet.get("Saarbrücken"), Some(2));
    assert_eq!(facet.get("Völklingen"), Some(1));
    assert_eq!(facet.len(), 4);
}

#[test]
fn test_empty_record_set_gives_empty_facet() {
    let facet = facets(&[], &Schema::dynamic(), "category").unwrap();
    assert!(facet.is_empty());
    assert_eq!(serde_json::to_string(&facet).unwrap(), "{}");
}

#[test]
fn test_closed_schema_rejects_unknown_facet_field() {
    let listings = agentland::core::catalog::saarbrett::seed_listings();
    let schema = agentland::core::catalog::saarbrett::schema();

    match facets(&listings, &schema, "colour") {
        Err(e @ AgentlandError::UnknownField { .. }) => {
            assert!(e.is_not_found());
            assert!(e.to_string().contains("category"));
        }
        other => panic!("Expected UnknownField, got {other:?}"),
    }
}
