//! Tests for argument parsing through clap

use agentland::cli::{Cli, Commands, OutputFormat};
use agentland::core::catalog::Catalog;
use clap::Parser;

#[test]
fn test_parse_search_with_options() {
    let cli = Cli::try_parse_from([
        "agentland",
        "--format",
        "json",
        "search",
        "python kurs",
        "--catalog",
        "knowledge",
        "-k",
        "5",
        "--filter",
        "type=news",
        "-f",
        "source=SR Online",
        "--facet",
        "type",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.query, "python kurs");
            assert_eq!(args.catalog, Catalog::Knowledge);
            assert_eq!(args.limit, Some(5));
            assert_eq!(
                args.filters,
                vec![
                    ("type".to_string(), "news".to_string()),
                    ("source".to_string(), "SR Online".to_string()),
                ]
            );
            assert_eq!(args.facets, vec!["type"]);
        }
        other => panic!("Expected search command, got {other:?}"),
    }
}

#[test]
fn test_parse_defaults() {
    let cli = Cli::try_parse_from(["agentland", "search", "saar"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Human);
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.catalog, Catalog::Saarbrett);
            assert_eq!(args.limit, None);
            assert!(args.filters.is_empty());
        }
        other => panic!("Expected search command, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_bad_filter() {
    assert!(Cli::try_parse_from(["agentland", "search", "saar", "--filter", "category"]).is_err());
}

#[test]
fn test_parse_rejects_unknown_catalog() {
    assert!(
        Cli::try_parse_from(["agentland", "facets", "category", "--catalog", "markt"]).is_err()
    );
}

#[test]
fn test_parse_analyze_tags() {
    let cli = Cli::try_parse_from([
        "agentland",
        "analyze",
        "--title",
        "Wohnung in Saarbrücken",
        "--tags",
        "zentral,Balkon",
        "--type",
        "wohnung",
    ])
    .unwrap();

    match cli.command {
        Commands::Analyze(args) => {
            assert_eq!(args.tags, vec!["zentral", "Balkon"]);
            assert_eq!(args.kind.as_deref(), Some("wohnung"));
            assert_eq!(args.description, "");
        }
        other => panic!("Expected analyze command, got {other:?}"),
    }
}

#[test]
fn test_parse_hyphenated_commands() {
    assert!(Cli::try_parse_from(["agentland", "show-config", "--all"]).is_ok());
    assert!(Cli::try_parse_from(["agentland", "get-info", "-d"]).is_ok());
    assert!(Cli::try_parse_from(["agentland", "completions", "bash"]).is_ok());
}
