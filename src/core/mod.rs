//! Core domain logic (front-end agnostic)
//!
//! This module contains all business logic that is independent
//! of the CLI.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Records, field weights, scored results
//! - **xdg**: XDG directory handling
//! - **search**: Tokenizer, scorer, ranker and facets
//! - **source**: Record filters and read-only record sources
//! - **catalog**: SAARBRETT listings and the knowledge base
//! - **content**: Rule-based content scoring
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod search;
pub mod services;
pub mod source;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{AgentlandError, Result};
pub use services::Services;
