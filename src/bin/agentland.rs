//! agentland CLI - weighted search over the AGENTLAND.SAARLAND catalogs
//!
//! # Examples
//!
//! ```bash
//! # Search SAARBRETT listings
//! agentland search "python kurs"
//!
//! # Search the knowledge base, JSON output
//! agentland --format json search "ihk" --catalog knowledge
//!
//! # Category counts of job listings
//! agentland facets type --filter category=jobs
//!
//! # Board insights
//! agentland insights
//! ```

use agentland::cli::output::print_error;
use agentland::cli::{exit_code, run, Cli, LogFormat};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Logs go to stderr so JSON output on stdout stays clean
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_env("AGENTLAND_LOG")
            .unwrap_or_else(|_| "agentland=warn".into()),
    );
    match LogFormat::from_env_value(std::env::var("AGENTLAND_LOG_FORMAT").ok().as_deref()) {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(exit_code(e.as_ref()));
    }
}
