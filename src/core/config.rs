//! Configuration management for agentland.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::catalog::Catalog;
use crate::core::error::{AgentlandError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub data: DataConfig,
    /// Per-catalog weight overrides, e.g. `[profiles.saarbrett]`
    #[serde(default)]
    pub profiles: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Number of results when the caller gives no limit
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum results per query
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Maximum query length in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// Shorter query tokens are dropped
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,
}

/// External record data
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataConfig {
    /// JSON array of generic records, searchable as the `records` catalog
    #[serde(default)]
    pub records_file: Option<PathBuf>,
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    100
}

fn default_max_query_length() -> usize {
    500
}

fn default_min_token_chars() -> usize {
    1
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_query_length: default_max_query_length(),
            min_token_chars: default_min_token_chars(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AgentlandError::ConfigError(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. AGENTLAND_CONFIG env var
    /// 2. XDG config file (~/.config/agentland/config.toml)
    /// 3. ./agentland.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("AGENTLAND_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("agentland.toml").exists() {
                Self::from_file("agentland.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(limit) = env::var("AGENTLAND_DEFAULT_LIMIT") {
            if let Ok(n) = limit.parse() {
                self.search.default_limit = n;
            }
        }
        if let Ok(max_limit) = env::var("AGENTLAND_MAX_LIMIT") {
            if let Ok(n) = max_limit.parse() {
                self.search.max_limit = n;
            }
        }
        if let Ok(max_query_len) = env::var("AGENTLAND_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
        if let Ok(min_chars) = env::var("AGENTLAND_MIN_TOKEN_CHARS") {
            if let Ok(n) = min_chars.parse() {
                self.search.min_token_chars = n;
            }
        }

        if let Ok(records_file) = env::var("AGENTLAND_RECORDS_FILE") {
            self.data.records_file = Some(PathBuf::from(records_file));
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.default_limit == 0 {
            return Err(AgentlandError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.max_limit == 0 {
            return Err(AgentlandError::ConfigError(
                "Max limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(AgentlandError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(AgentlandError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.search.min_token_chars == 0 {
            return Err(AgentlandError::ConfigError(
                "Min token chars must be non-zero".to_string(),
            ));
        }

        for (name, weights) in &self.profiles {
            name.parse::<Catalog>().map_err(|_| {
                AgentlandError::ConfigError(format!("Profile for unknown catalog '{name}'"))
            })?;

            if let Some((field, weight)) = weights
                .iter()
                .find(|(_, w)| !(w.is_finite() && **w > 0.0))
            {
                return Err(AgentlandError::ConfigError(format!(
                    "Weight for '{field}' in profile '{name}' must be positive, got {weight}"
                )));
            }
        }

        Ok(())
    }

    /// Weight overrides configured for `catalog`
    pub fn profile(&self, catalog: Catalog) -> Option<&BTreeMap<String, f64>> {
        self.profiles.get(catalog.as_str())
    }

    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!("  Max limit: {}", self.search.max_limit);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Min token chars: {}", self.search.min_token_chars);
        tracing::info!("  Records file: {:?}", self.data.records_file);
        for (name, weights) in &self.profiles {
            tracing::info!("  Profile {name}: {} weight(s)", weights.len());
        }
    }
}
