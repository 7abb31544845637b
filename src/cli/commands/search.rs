//! Search command - rank a catalog for a free-text query

use crate::cli::commands::{build_filter, parse_filter};
use crate::cli::output::{colors, format_score, print_facet, print_warning, truncate_chars};
use crate::cli::OutputFormat;
use crate::core::catalog::Catalog;
use crate::core::services::{SearchRequest, Services};
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (whitespace-separated terms, case-insensitive)
    pub query: String,

    /// Catalog to search (saarbrett, knowledge, records)
    #[arg(long, short = 'c', default_value = "saarbrett")]
    pub catalog: Catalog,

    /// Maximum number of results (clamped to the configured maximum)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Restrict to records with field=value (repeatable)
    #[arg(long = "filter", short = 'f', value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Facet the matched records by this field (repeatable)
    #[arg(long = "facet")]
    pub facets: Vec<String>,

    /// Only show record IDs and titles
    #[arg(long)]
    pub ids_only: bool,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = SearchRequest {
        catalog: args.catalog,
        query: args.query.clone(),
        filter: build_filter(&args.filters),
        limit: args.limit,
        facets: args.facets.clone(),
    };

    let response = services.search(&request)?;

    match format {
        OutputFormat::Human => {
            if let Some(requested) = args.limit.filter(|&n| n != response.limit) {
                print_warning(&format!(
                    "Limit {requested} adjusted to {}",
                    response.limit
                ));
            }

            if response.hits.is_empty() {
                println!(
                    "No results found for '{}' in '{}'",
                    colors::label(&args.query),
                    colors::catalog(response.catalog.as_str())
                );
                return Ok(());
            }

            println!(
                "Found {} result(s) in '{}', showing {}:\n",
                colors::number(&response.total.to_string()),
                colors::catalog(response.catalog.as_str()),
                colors::number(&response.hits.len().to_string())
            );

            for hit in &response.hits {
                if args.ids_only {
                    println!("{}  {}", colors::record_id(&hit.id), hit.title);
                    continue;
                }
                println!(
                    "[{}] {} {} {}",
                    colors::rank(&hit.rank.to_string()),
                    hit.title,
                    colors::record_id(&format!("({})", hit.id)),
                    colors::score(&format!("score: {}", format_score(hit.score)))
                );
                if !hit.summary.is_empty() {
                    println!("    {}", colors::dim(&truncate_chars(&hit.summary, 100)));
                }
                println!();
            }

            for (field, facet) in &response.facets {
                println!("{}", colors::label(&format!("By {field}:")));
                print_facet(facet, 2);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
