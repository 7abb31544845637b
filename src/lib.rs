//! agentland - Scored retrieval and ranking for the AGENTLAND.SAARLAND portal
//!
//! One reusable search core replacing the per-endpoint ranking loops of
//! the portal: knowledge-base search, marketplace filtering, SAARBRETT
//! listing search and content scoring.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - search (tokenize, score, rank, facet)
//!   - source (record filters and providers)
//!   - catalog (seed listings and knowledge entries)
//!   - content (quality, reach, expiry, regional relevance)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use agentland::core::search::{rank, Schema};
//! use agentland::core::types::{FieldWeights, Record};
//!
//! let records = vec![
//!     Record::new("1")
//!         .with("title", "Saarschleife Wandern")
//!         .with("tags", vec!["natur", "outdoor"]),
//!     Record::new("2")
//!         .with("title", "KI Förderung Business")
//!         .with("tags", vec!["business"]),
//! ];
//! let weights = FieldWeights::new([("title", 3.0), ("tags", 1.0)]).unwrap();
//! let scorer = Schema::dynamic().scorer(&weights).unwrap();
//!
//! let hits = rank(&records, "wandern", &scorer, None);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].record.id, "1");
//! assert_eq!(hits[0].score, 3.0);
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{AgentlandError, Result};
pub use core::services::Services;
pub use core::types::*;
