//! Browse command - page through SAARBRETT listings in board order

use crate::cli::commands::{build_filter, parse_filter};
use crate::cli::output::{colors, truncate_chars};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the browse command
#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Only listings matching these search terms
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Restrict to listings with field=value (repeatable)
    #[arg(long = "filter", short = 'f', value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Number of listings to skip
    #[arg(long, default_value = "0")]
    pub offset: usize,

    /// Page size (clamped to the configured maximum)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// Execute the browse command
pub async fn execute(
    args: BrowseArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let page = services.browse(
        &build_filter(&args.filters),
        args.query.as_deref(),
        args.offset,
        args.limit,
    )?;

    match format {
        OutputFormat::Human => {
            if page.items.is_empty() {
                println!("No listings on this page");
                return Ok(());
            }

            for listing in &page.items {
                let mut badges = Vec::new();
                if listing.featured {
                    badges.push("featured");
                }
                if listing.urgent {
                    badges.push("urgent");
                }
                println!(
                    "{} {} {}",
                    colors::record_id(&listing.id),
                    colors::label(&truncate_chars(&listing.title, 70)),
                    colors::warning(&badges.join(", "))
                );
                println!(
                    "    {} | {} | {}",
                    colors::catalog(&listing.category),
                    listing.location,
                    colors::dim(&listing.created)
                );
            }

            println!(
                "\n{}-{} of {}{}",
                page.offset + 1,
                page.offset + page.items.len(),
                colors::number(&page.total.to_string()),
                if page.has_more {
                    format!(" (next: --offset {})", page.offset + page.limit)
                } else {
                    String::new()
                }
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
    }

    Ok(())
}
