//! Ingestion configuration loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult, DEFAULT_FRIENDSHIPS_PER_USER};

/// How lines of an input source are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestMode {
    /// One user per line; each gets random friendships as it is added.
    #[default]
    Users,
    /// One user, or two whitespace-separated friends, per line.
    Pairs,
}

impl IngestMode {
    /// Parse a mode from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "users" => Some(Self::Users),
            "pairs" => Some(Self::Pairs),
            _ => None,
        }
    }
}

/// Settings for building a network from a text source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Random friendships attempted per user in [`IngestMode::Users`].
    #[serde(default = "default_friendships_per_user")]
    pub friendships_per_user: usize,
    /// Seed for the random source. Unset means entropy-seeded.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub mode: IngestMode,
    /// Log level used by the `socnet` binary.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_friendships_per_user() -> usize {
    DEFAULT_FRIENDSHIPS_PER_USER
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            friendships_per_user: default_friendships_per_user(),
            seed: None,
            mode: IngestMode::default(),
            log_level: default_log_level(),
        }
    }
}

impl IngestConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(content: &str) -> GraphResult<Self> {
        toml::from_str(content).map_err(|e| GraphError::Config(format!("invalid config: {e}")))
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<IngestConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GraphError::Config(format!("failed to read {}: {e}", path.display()))
    })?;
    IngestConfig::from_toml(&content)
}
