//! Analyze command - rule-based content scoring for a draft listing

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::content::{
    analyze_content_quality, default_expiry, estimated_reach, regional_relevance, QualityReport,
};
use crate::core::services::Services;
use chrono::Utc;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Listing title
    #[arg(long, short = 't')]
    pub title: String,

    /// Listing description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,

    /// Category, for the reach estimate (jobs, wohnen, verkauf, ...)
    #[arg(long)]
    pub category: Option<String>,

    /// Location, for the reach estimate
    #[arg(long, default_value = "")]
    pub location: String,

    /// Comma-separated tags, for the reach estimate
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Listing type, for the default expiry (angebot, suche, event, ...)
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Source URL; scores regional relevance of title and description
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    pub quality: QualityReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_reach: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional_relevance: Option<f64>,
}

/// Run every applicable rule for the arguments given
pub fn analyze(args: &AnalyzeArgs) -> AnalyzeOutput {
    let tags: Vec<String> = args
        .tags
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    AnalyzeOutput {
        quality: analyze_content_quality(&args.title, &args.description),
        estimated_reach: args
            .category
            .as_deref()
            .map(|category| estimated_reach(category, &args.location, &tags)),
        default_expiry: args.kind.as_deref().map(|kind| {
            default_expiry(kind, Utc::now().date_naive())
                .format("%Y-%m-%d")
                .to_string()
        }),
        regional_relevance: args
            .url
            .as_deref()
            .map(|url| regional_relevance(url, &args.title, &args.description)),
    }
}

/// Execute the analyze command
pub async fn execute(
    args: AnalyzeArgs,
    _services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = analyze(&args);

    match format {
        OutputFormat::Human => {
            println!(
                "Quality: {} ({}/100)",
                colors::label(output.quality.quality.label()),
                colors::number(&output.quality.score.to_string())
            );
            for suggestion in &output.quality.suggestions {
                println!("  - {}", colors::dim(suggestion));
            }
            if let Some(reach) = output.estimated_reach {
                println!("Estimated reach: {}", colors::number(&reach.to_string()));
            }
            if let Some(expiry) = &output.default_expiry {
                println!("Expires: {expiry}");
            }
            if let Some(relevance) = output.regional_relevance {
                println!(
                    "Regional relevance: {}",
                    colors::score(&format!("{relevance:.1}"))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
