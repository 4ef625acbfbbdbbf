//! Configuration management for remote module loading
//!
//! Handles configuration loading, environment overrides and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::remote::events::DEFAULT_EVENT_CAPACITY;
use crate::utils::{env_bool, env_opt, result_to_option};

/// Environment variable overriding [`LoadOptions::verbose`]
pub const ENV_VERBOSE: &str = "REMOTE_MODULES_VERBOSE";
/// Environment variable overriding [`LoadOptions::use_events`]
pub const ENV_USE_EVENTS: &str = "REMOTE_MODULES_USE_EVENTS";
/// Environment variable overriding [`LoadOptions::remote_entry_file_name`]
pub const ENV_ENTRY_FILE: &str = "REMOTE_MODULES_ENTRY_FILE";

/// Fallback load options, used for whatever a call leaves unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Emit human-readable log lines
    pub verbose: bool,

    /// Emit structured lifecycle events
    pub use_events: bool,

    /// Entry-file name used when a call gives none
    pub remote_entry_file_name: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log filter (e.g. "info", "remote_modules=debug"); RUST_LOG wins if set
    pub filter: Option<String>,

    /// Emit JSON log lines (requires the `json-logging` feature)
    pub json_format: bool,
}

/// Event bus configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBusConfig {
    /// Events buffered per subscriber before the oldest are dropped
    pub capacity: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

/// Loader configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Load option fallbacks
    pub loading: LoadOptions,

    /// Logging configuration
    pub logging: Option<LoggingConfig>,

    /// Event bus configuration
    pub events: EventBusConfig,
}

impl LoaderConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LoaderConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LoaderConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, picking the format from the file extension
    ///
    /// `.toml` files are parsed as TOML, anything else as JSON.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path)?,
            _ => Self::from_json_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is missing or
    /// invalid
    pub fn load_or_default(path: &Path) -> Self {
        result_to_option(Self::from_file(path), "Failed to load loader config")
            .unwrap_or_default()
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `REMOTE_MODULES_*` environment overrides
    ///
    /// Only variables that are set take effect.
    pub fn apply_env_overrides(&mut self) {
        if env_opt(ENV_VERBOSE).is_some() {
            self.loading.verbose = env_bool(ENV_VERBOSE);
        }
        if env_opt(ENV_USE_EVENTS).is_some() {
            self.loading.use_events = env_bool(ENV_USE_EVENTS);
        }
        if let Some(entry) = env_opt(ENV_ENTRY_FILE) {
            self.loading.remote_entry_file_name = Some(entry);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.events.capacity == 0 {
            anyhow::bail!("Event bus capacity must be greater than zero");
        }

        if let Some(ref entry) = self.loading.remote_entry_file_name {
            if entry.trim().trim_matches('/').is_empty() {
                anyhow::bail!("Invalid remote entry file name: {:?}", entry);
            }
        }

        Ok(())
    }
}
