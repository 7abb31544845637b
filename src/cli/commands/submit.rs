//! Submit command - validate a new SAARBRETT listing

use crate::cli::output::{colors, print_success};
use crate::cli::OutputFormat;
use crate::core::catalog::saarbrett::{self, ListingDraft};
use crate::core::error::AgentlandError;
use crate::core::services::Services;
use chrono::Utc;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the submit command
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// JSON file holding the draft listing
    pub draft: PathBuf,
}

/// Execute the submit command
///
/// The board is read-only, so the accepted listing is printed, not stored.
pub async fn execute(
    args: SubmitArgs,
    _services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(&args.draft).map_err(|e| {
        AgentlandError::InvalidInput(format!("Failed to read {}: {e}", args.draft.display()))
    })?;
    let draft: ListingDraft = serde_json::from_str(&contents)?;

    let submission = saarbrett::submit(draft, Utc::now())?;

    match format {
        OutputFormat::Human => {
            print_success(&format!(
                "Listing {} accepted for review",
                submission.listing.id
            ));
            println!(
                "  {} ({}, {})",
                colors::label(&submission.listing.title),
                colors::catalog(&submission.listing.category),
                submission.listing.location
            );
            println!("  expires: {}", submission.listing.expires);
            println!(
                "  quality: {} ({}/100)",
                submission.quality.quality.label(),
                colors::number(&submission.quality.score.to_string())
            );
            for suggestion in &submission.quality.suggestions {
                println!("    - {}", colors::dim(suggestion));
            }
            println!(
                "  estimated reach: {}",
                colors::number(&submission.estimated_reach.to_string())
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&submission)?);
        }
    }

    Ok(())
}
