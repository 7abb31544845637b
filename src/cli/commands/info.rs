//! Info command - show version and catalog information

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::source::RecordFilter;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show record counts per catalog
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub catalogs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<BTreeMap<String, usize>>,
}

/// Execute the info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut catalogs = vec!["saarbrett".to_string(), "knowledge".to_string()];
    if services.records.is_some() {
        catalogs.push("records".to_string());
    }

    let records = if args.detailed {
        let all = RecordFilter::new();
        let mut counts = BTreeMap::new();
        counts.insert(
            "saarbrett".to_string(),
            services.saarbrett.list_records(&all)?.len(),
        );
        counts.insert(
            "knowledge".to_string(),
            services.knowledge.list_records(&all)?.len(),
        );
        if let Some(source) = &services.records {
            counts.insert("records".to_string(), source.list_records(&all)?.len());
        }
        Some(counts)
    } else {
        None
    };

    let info = InfoResponse {
        name: "agentland".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalogs,
        records,
    };

    match format {
        OutputFormat::Human => {
            println!("agentland {}", info.version);
            println!("Catalogs: {}", info.catalogs.join(", "));
            if let Some(counts) = &info.records {
                for (catalog, count) in counts {
                    println!(
                        "  {}: {}",
                        colors::catalog(catalog),
                        colors::number(&count.to_string())
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
