//! CLI adapter for agentland
//!
//! Provides the command-line interface to the search core. The adapter
//! depends on `core/`; `core/` never depends on it.
//!
//! ```text
//! +------------------+      +------------------+
//! |      cli/        | ---> |     core/        |
//! | (clap adapter)   |      |  (domain logic)  |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use crate::core::error::AgentlandError;
use clap::{Parser, Subcommand};

/// agentland - weighted search over the AGENTLAND.SAARLAND catalogs
///
/// Rank SAARBRETT listings, the regional knowledge base or your own JSON
/// records with per-field weights, and summarize them with facets.
#[derive(Parser, Debug)]
#[command(name = "agentland")]
#[command(version)]
#[command(about = "Weighted multi-field search for AGENTLAND.SAARLAND", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Log line format on stderr, chosen by `AGENTLAND_LOG_FORMAT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One compact line per event (default)
    #[default]
    Compact,
    /// Newline-delimited JSON events
    Json,
}

impl LogFormat {
    /// Parse the variable's value; anything but `json` is compact
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank a catalog for a free-text query
    Search(commands::SearchArgs),

    /// Count records per value of a field
    Facets(commands::FacetsArgs),

    /// Page through SAARBRETT listings, featured and urgent first
    Browse(commands::BrowseArgs),

    /// Show SAARBRETT board insights or knowledge-base statistics
    Insights(commands::InsightsArgs),

    /// Score a draft listing: quality, reach, expiry, regional relevance
    Analyze(commands::AnalyzeArgs),

    /// Validate a draft SAARBRETT listing from a JSON file
    Submit(commands::SubmitArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and catalog information
    #[command(name = "get-info")]
    GetInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  agentland completions bash > ~/.local/share/bash-completion/completions/agentland
    ///   zsh:   agentland completions zsh > ~/.zfunc/_agentland
    ///   fish:  agentland completions fish > ~/.config/fish/completions/agentland.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Completions need no configuration
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Facets(args) => commands::facets::execute(args, &services, cli.format).await,
        Commands::Browse(args) => commands::browse::execute(args, &services, cli.format).await,
        Commands::Insights(args) => {
            commands::insights::execute(args, &services, cli.format).await
        }
        Commands::Analyze(args) => commands::analyze::execute(args, &services, cli.format).await,
        Commands::Submit(args) => commands::submit::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::GetInfo(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}

/// Process exit code for a failed command
///
/// 2 for caller errors (bad input, unknown field, invalid config),
/// 3 for unknown catalogs, 1 for everything else.
pub fn exit_code(err: &(dyn std::error::Error + 'static)) -> i32 {
    match err.downcast_ref::<AgentlandError>() {
        Some(e) if e.is_bad_request() => 2,
        Some(e) if e.is_not_found() => 3,
        _ => 1,
    }
}
