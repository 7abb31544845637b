// SAARBRETT catalog through the service layer

use crate::common::{create_test_services, hit_ids};
use agentland::core::catalog::saarbrett::{self, ListingDraft, ListingStatus};
use agentland::core::catalog::Catalog;
use agentland::core::config::Config;
use agentland::core::services::{SearchRequest, Services};
use agentland::core::source::RecordFilter;
use agentland::core::AgentlandError;
use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;

#[test]
fn test_search_python_listings() {
    let services = create_test_services();
    let response = services
        .search(&SearchRequest::new(Catalog::Saarbrett, "python"))
        .unwrap();

    // Course: title 3 + tags 2 + description 1; startup job: tags 2
    assert_eq!(hit_ids(&response), vec!["saar-post-8", "saar-post-2"]);
    assert_eq!(response.hits[0].score, 6.0);
    assert_eq!(response.hits[1].score, 2.0);
    assert_eq!(response.total, 2);
}

#[test]
fn test_search_with_category_filter() {
    let services = create_test_services();
    let mut request = SearchRequest::new(Catalog::Saarbrett, "saarbrücken");
    request.filter = RecordFilter::new().with("category", "jobs");

    let response = services.search(&request).unwrap();
    assert!(!response.hits.is_empty());
    for hit in &response.hits {
        assert_eq!(hit.record["category"], "jobs");
    }
}

#[test]
fn test_search_wildcard_filter_is_ignored() {
    let services = create_test_services();
    let mut filtered = SearchRequest::new(Catalog::Saarbrett, "saarbrücken");
    filtered.filter = RecordFilter::new().with("category", "alle");
    let unfiltered = SearchRequest::new(Catalog::Saarbrett, "saarbrücken");

    assert_eq!(
        services.search(&filtered).unwrap().total,
        services.search(&unfiltered).unwrap().total
    );
}

#[test]
fn test_search_unknown_filter_field_fails() {
    let services = create_test_services();
    let mut request = SearchRequest::new(Catalog::Saarbrett, "python");
    request.filter = RecordFilter::new().with("farbe", "rot");

    assert!(matches!(
        services.search(&request),
        Err(AgentlandError::UnknownField { .. })
    ));
}

#[test]
fn test_search_facets_over_matches() {
    let services = create_test_services();
    let mut request = SearchRequest::new(Catalog::Saarbrett, "python");
    request.facets = vec!["category".to_string(), "tags".to_string()];

    let response = services.search(&request).unwrap();
    let categories = &response.facets["category"];
    assert_eq!(categories.get("bildung"), Some(1));
    assert_eq!(categories.get("jobs"), Some(1));
    assert_eq!(response.facets["tags"].get("Python"), Some(2));
}

#[test]
fn test_weight_profile_changes_ranking() {
    let mut config = Config::default();
    // Make location dominate: the Saarbrücken-located job outranks the course
    config.profiles.insert(
        "saarbrett".to_string(),
        BTreeMap::from([("location".to_string(), 20.0)]),
    );
    let services = Services::new(config).unwrap();

    let response = services
        .search(&SearchRequest::new(Catalog::Saarbrett, "python innenstadt"))
        .unwrap();
    assert_eq!(response.hits[0].id, "saar-post-2");
}

#[test]
fn test_browse_second_page() {
    let services = create_test_services();
    let page = services.browse(&RecordFilter::new(), None, 5, Some(5)).unwrap();

    assert_eq!(page.items.len(), 5);
    assert!(!page.has_more);
    assert_eq!(page.items[0].id, "saar-post-1");
}

#[test]
fn test_insights_totals() {
    let services = create_test_services();
    let insights = services.insights(&RecordFilter::new(), None).unwrap();

    assert_eq!(insights.total_posts, 10);
    assert_eq!(
        insights.activity_metrics.business_posts + insights.activity_metrics.user_posts,
        10
    );
    assert_eq!(insights.categories_breakdown.total(), 10);

    let json = serde_json::to_value(&insights).unwrap();
    assert_eq!(json["categories_breakdown"]["jobs"], 2);
    assert_eq!(json["activity_metrics"]["featured_count"], 3);
}

#[test]
fn test_submit_round_trip_from_json() {
    let draft: ListingDraft = serde_json::from_str(
        r#"{
            "title": "Fahrrad zu verkaufen",
            "description": "Gut erhaltenes Trekkingrad, 28 Zoll, frisch gewartet, inklusive Schloss.",
            "category": "verkauf",
            "type": "verkauf",
            "author_name": "Jonas",
            "location": "Homburg",
            "tags": ["Fahrrad", "neuwertig"],
            "price": 180
        }"#,
    )
    .unwrap();

    let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    let submission = saarbrett::submit(draft, now).unwrap();

    assert_eq!(submission.listing.status, ListingStatus::PendingReview);
    assert_eq!(submission.listing.expires, "2025-03-31");
    assert_eq!(submission.listing.price, Some(180.0));
    // verkauf 1800 * 1.3 ("neuwertig" contains "neu")
    assert_eq!(submission.estimated_reach, 2340);
    // 25 + 35 + 15
    assert_eq!(submission.quality.score, 75);
}

#[test]
fn test_submit_empty_draft_names_every_field() {
    let err = saarbrett::submit(ListingDraft::default(), Utc::now()).unwrap_err();
    assert!(err.is_bad_request());
    let msg = err.to_string();
    for field in ["title", "description", "category", "type", "author", "location"] {
        assert!(msg.contains(field), "Expected '{field}' in: {msg}");
    }
}
