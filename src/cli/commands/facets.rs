//! Facets command - group-by counts over a catalog

use crate::cli::commands::{build_filter, parse_filter};
use crate::cli::output::{colors, print_facet};
use crate::cli::OutputFormat;
use crate::core::catalog::Catalog;
use crate::core::search::{Facet, FacetCount};
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the facets command
#[derive(Args, Debug)]
pub struct FacetsArgs {
    /// Field to count values of (e.g. category, tags, type)
    pub field: String,

    /// Catalog to summarize
    #[arg(long, short = 'c', default_value = "saarbrett")]
    pub catalog: Catalog,

    /// Restrict to records with field=value (repeatable)
    #[arg(long = "filter", short = 'f', value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Only the N most frequent values, count descending
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum FacetsOutput {
    Counts(Facet),
    Top(Vec<FacetCount>),
}

/// Execute the facets command
pub async fn execute(
    args: FacetsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let facet = services.facets(args.catalog, &args.field, &build_filter(&args.filters))?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} in '{}' ({} distinct):",
                colors::label(&args.field),
                colors::catalog(args.catalog.as_str()),
                colors::number(&facet.len().to_string())
            );
            match args.top {
                Some(n) => {
                    for entry in facet.top(n) {
                        println!(
                            "  {}  {}",
                            entry.value,
                            colors::number(&entry.count.to_string())
                        );
                    }
                }
                None => print_facet(&facet, 2),
            }
        }
        OutputFormat::Json => {
            let output = match args.top {
                Some(n) => FacetsOutput::Top(facet.top(n)),
                None => FacetsOutput::Counts(facet),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
