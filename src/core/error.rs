//! Error types and error handling for the AGENTLAND search core.
//!
//! Scoring, ranking and facet computation never fail for well-typed
//! input. The variants here cover caller contract violations (unknown
//! fields, bad weights), configuration problems and record-source I/O.

use thiserror::Error;

/// Result type alias for AGENTLAND operations
pub type Result<T> = std::result::Result<T, AgentlandError>;

/// Main error type for the AGENTLAND search core
#[derive(Error, Debug)]
pub enum AgentlandError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown field '{field}' (valid fields: {})", .valid_fields.join(", "))]
    UnknownField {
        field: String,
        valid_fields: Vec<String>,
    },

    #[error("Invalid weight for field '{field}': {weight}")]
    InvalidWeight { field: String, weight: f64 },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Unknown catalog: {0}")]
    UnknownCatalog(String),

    #[error("Record source error: {0}")]
    SourceError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl AgentlandError {
    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AgentlandError::UnknownCatalog(_) | AgentlandError::UnknownField { .. }
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            AgentlandError::InvalidInput(_)
                | AgentlandError::InvalidWeight { .. }
                | AgentlandError::InvalidQuery(_)
                | AgentlandError::UnknownField { .. }
                | AgentlandError::ConfigError(_)
        )
    }
}
