//! Insights command - board insights and knowledge-base statistics

use crate::cli::commands::{build_filter, parse_filter};
use crate::cli::output::{colors, print_facet, print_header};
use crate::cli::OutputFormat;
use crate::core::catalog::Catalog;
use crate::core::error::AgentlandError;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the insights command
#[derive(Args, Debug)]
pub struct InsightsArgs {
    /// Catalog to summarize (saarbrett or knowledge)
    #[arg(long, short = 'c', default_value = "saarbrett")]
    pub catalog: Catalog,

    /// Restrict SAARBRETT insights to listings with field=value (repeatable)
    #[arg(long = "filter", short = 'f', value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Restrict SAARBRETT insights to listings matching these search terms
    #[arg(long, short = 'q')]
    pub query: Option<String>,
}

/// Execute the insights command
pub async fn execute(
    args: InsightsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.catalog {
        Catalog::Saarbrett => {
            let insights = services.insights(&build_filter(&args.filters), args.query.as_deref())?;
            match format {
                OutputFormat::Human => {
                    print_header(&format!("SAARBRETT: {} post(s)", insights.total_posts));

                    let metrics = &insights.activity_metrics;
                    println!(
                        "  new today: {}  featured: {}  urgent: {}  business: {}  user: {}",
                        colors::number(&metrics.new_today.to_string()),
                        colors::number(&metrics.featured_count.to_string()),
                        colors::number(&metrics.urgent_count.to_string()),
                        colors::number(&metrics.business_posts.to_string()),
                        colors::number(&metrics.user_posts.to_string()),
                    );

                    println!("\n{}", colors::label("Categories:"));
                    print_facet(&insights.categories_breakdown, 2);

                    println!("\n{}", colors::label("Locations:"));
                    print_facet(&insights.location_distribution, 2);

                    println!("\n{}", colors::label("Trending keywords:"));
                    for keyword in &insights.trending_keywords {
                        println!(
                            "  {}  {}",
                            keyword.value,
                            colors::number(&keyword.count.to_string())
                        );
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&insights)?);
                }
            }
        }
        Catalog::Knowledge => {
            let stats = services.knowledge_stats()?;
            match format {
                OutputFormat::Human => {
                    print_header(&format!("Knowledge base: {} entries", stats.total));
                    for (kind, count) in &stats.by_kind {
                        println!("  {kind}: {}", colors::number(&count.to_string()));
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                }
            }
        }
        Catalog::Records => {
            return Err(AgentlandError::InvalidInput(
                "Insights are available for the saarbrett and knowledge catalogs; use 'facets' for records"
                    .to_string(),
            )
            .into());
        }
    }

    Ok(())
}
