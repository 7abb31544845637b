//! Tests for the facets, browse, insights and submit CLI commands

use crate::cli::test_helpers::{create_cli_test_services, write_file};
use agentland::cli::commands::browse::{self, BrowseArgs};
use agentland::cli::commands::facets::{self, FacetsArgs};
use agentland::cli::commands::insights::{self, InsightsArgs};
use agentland::cli::commands::submit::{self, SubmitArgs};
use agentland::cli::OutputFormat;
use agentland::core::catalog::Catalog;

// =============================================================================
// facets
// =============================================================================

#[tokio::test]
async fn test_facets_human_and_json() {
    let (services, _temp) = create_cli_test_services();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = FacetsArgs {
            field: "category".to_string(),
            catalog: Catalog::Saarbrett,
            filters: Vec::new(),
            top: None,
        };
        assert!(facets::execute(args, &services, format).await.is_ok());
    }
}

#[tokio::test]
async fn test_facets_top_with_filter() {
    let (services, _temp) = create_cli_test_services();
    let args = FacetsArgs {
        field: "tags".to_string(),
        catalog: Catalog::Saarbrett,
        filters: vec![("category".to_string(), "services".to_string())],
        top: Some(3),
    };
    assert!(facets::execute(args, &services, OutputFormat::Json).await.is_ok());
}

#[tokio::test]
async fn test_facets_unknown_field() {
    let (services, _temp) = create_cli_test_services();
    let args = FacetsArgs {
        field: "colour".to_string(),
        catalog: Catalog::Knowledge,
        filters: Vec::new(),
        top: None,
    };
    assert!(facets::execute(args, &services, OutputFormat::Human).await.is_err());
}

// =============================================================================
// browse
// =============================================================================

#[tokio::test]
async fn test_browse_pages() {
    let (services, _temp) = create_cli_test_services();

    for offset in [0, 5, 50] {
        let args = BrowseArgs {
            query: None,
            filters: Vec::new(),
            offset,
            limit: Some(5),
        };
        let result = browse::execute(args, &services, OutputFormat::Human).await;
        assert!(result.is_ok(), "Browse at offset {offset} should succeed");
    }
}

#[tokio::test]
async fn test_browse_with_query() {
    let (services, _temp) = create_cli_test_services();
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = BrowseArgs {
            query: Some("wohnung".to_string()),
            filters: vec![("category".to_string(), "wohnen".to_string())],
            offset: 0,
            limit: None,
        };
        assert!(browse::execute(args, &services, format).await.is_ok());
    }
}

// =============================================================================
// insights
// =============================================================================

#[tokio::test]
async fn test_insights_with_query() {
    let (services, _temp) = create_cli_test_services();
    let args = InsightsArgs {
        catalog: Catalog::Saarbrett,
        filters: Vec::new(),
        query: Some("python".to_string()),
    };
    assert!(insights::execute(args, &services, OutputFormat::Json)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_insights_saarbrett_and_knowledge() {
    let (services, _temp) = create_cli_test_services();

    for catalog in [Catalog::Saarbrett, Catalog::Knowledge] {
        for format in [OutputFormat::Human, OutputFormat::Json] {
            let args = InsightsArgs {
                catalog,
                filters: Vec::new(),
                query: None,
            };
            assert!(insights::execute(args, &services, format).await.is_ok());
        }
    }
}

#[tokio::test]
async fn test_insights_records_is_rejected() {
    let (services, _temp) = create_cli_test_services();
    let args = InsightsArgs {
        catalog: Catalog::Records,
        filters: Vec::new(),
        query: None,
    };
    assert!(insights::execute(args, &services, OutputFormat::Human)
        .await
        .is_err());
}

// =============================================================================
// submit
// =============================================================================

#[tokio::test]
async fn test_submit_valid_draft() {
    let (services, temp) = create_cli_test_services();
    let draft = write_file(
        &temp,
        "draft.json",
        r#"{
            "title": "Nachhilfe Mathematik",
            "description": "Studentin gibt Nachhilfe in Mathe für die Klassen 5 bis 10, auch online.",
            "category": "bildung",
            "type": "angebot",
            "author_name": "Lea",
            "location": "Saarbrücken Dudweiler"
        }"#,
    );

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = SubmitArgs {
            draft: draft.clone(),
        };
        let result = submit::execute(args, &services, format).await;
        assert!(result.is_ok(), "Submit should succeed: {result:?}");
    }
}

#[tokio::test]
async fn test_submit_incomplete_draft() {
    let (services, temp) = create_cli_test_services();
    let draft = write_file(&temp, "draft.json", r#"{"title": "Nur ein Titel"}"#);

    let err = submit::execute(SubmitArgs { draft }, &services, OutputFormat::Human)
        .await
        .expect_err("Incomplete draft should fail");
    assert!(err.to_string().contains("description"));
}

#[tokio::test]
async fn test_submit_missing_file() {
    let (services, temp) = create_cli_test_services();
    let args = SubmitArgs {
        draft: temp.path().join("missing.json"),
    };
    assert!(submit::execute(args, &services, OutputFormat::Human)
        .await
        .is_err());
}
