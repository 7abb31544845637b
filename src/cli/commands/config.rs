//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::catalog::Catalog;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show the effective weight profile of every catalog
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub search: SearchConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_file: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub weights: BTreeMap<String, Vec<(String, f64)>>,
}

#[derive(Debug, Serialize)]
pub struct SearchConfig {
    pub default_limit: usize,
    pub max_limit: usize,
    pub max_query_length: usize,
    pub min_token_chars: usize,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let mut weights = BTreeMap::new();
    if args.all {
        for catalog in Catalog::ALL {
            let profile = services.weights(catalog)?;
            weights.insert(
                catalog.to_string(),
                profile
                    .iter()
                    .map(|(field, w)| (field.to_string(), w))
                    .collect(),
            );
        }
    }

    let response = ConfigResponse {
        config_file: XdgDirs::new().config_file().to_string_lossy().into_owned(),
        search: SearchConfig {
            default_limit: config.search.default_limit,
            max_limit: config.search.max_limit,
            max_query_length: config.search.max_query_length,
            min_token_chars: config.search.min_token_chars,
        },
        records_file: config
            .data
            .records_file
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        weights,
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  search:");
            println!("    default_limit: {}", response.search.default_limit);
            println!("    max_limit: {}", response.search.max_limit);
            println!("    max_query_length: {}", response.search.max_query_length);
            println!("    min_token_chars: {}", response.search.min_token_chars);
            if let Some(records_file) = &response.records_file {
                println!("  records_file: {records_file}");
            }
            if !response.weights.is_empty() {
                println!("  weights:");
                for (catalog, profile) in &response.weights {
                    let fields: Vec<String> = profile
                        .iter()
                        .map(|(field, w)| format!("{field}={w}"))
                        .collect();
                    println!("    {}: {}", colors::catalog(catalog), fields.join(" "));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
