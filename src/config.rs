//! Configuration module - file-backed settings merged over built-in defaults

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default configuration file name, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "prompt-boost-config.json";

/// Log verbosity configured in the file; `RUST_LOG` takes precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Process-wide configuration, loaded once at startup and immutable after.
///
/// Unknown fields in the file are ignored; missing fields take the built-in
/// defaults, so a partial file acts as an override layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Enhancer names to expose; empty means all enhancers are enabled
    pub enabled_enhancers: Vec<String>,

    /// Default depth for the legacy context path (1-5)
    pub default_context_depth: u8,
    /// Default count for the legacy example path (1-5)
    pub default_example_count: u8,

    /// Legacy templates with {{CONTEXT}}/{{EXAMPLES}}/{{INSTRUCTIONS}} and
    /// {{PROMPT}} placeholders
    pub context_template: String,
    pub example_template: String,
    pub instruction_template: String,

    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled_enhancers: Vec::new(),
            default_context_depth: 3,
            default_example_count: 2,
            context_template: "Here is some relevant context that might help with your response:\n\n{{CONTEXT}}\n\nNow, please respond to the following:\n{{PROMPT}}".to_string(),
            example_template: "Here are some examples that might help with your response:\n\n{{EXAMPLES}}\n\nNow, please respond to the following:\n{{PROMPT}}".to_string(),
            instruction_template: "{{INSTRUCTIONS}}\n\nPlease respond to the following:\n{{PROMPT}}".to_string(),
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Load configuration from `path` (or the default file in the working
    /// directory), merged over built-in defaults.
    ///
    /// A missing file is normal and yields the defaults silently. A malformed
    /// or unreadable file also yields the defaults but returns a warning
    /// message for the caller to log - startup must not fail on bad config.
    pub fn load(path: Option<&Path>) -> (Arc<Self>, Option<String>) {
        let path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            return (Arc::new(Self::default()), None);
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Self>(&content) {
                Ok(config) => (Arc::new(config), None),
                Err(e) => (
                    Arc::new(Self::default()),
                    Some(format!(
                        "Error parsing config file {}, using default configuration: {}",
                        path.display(),
                        e
                    )),
                ),
            },
            Err(e) => (
                Arc::new(Self::default()),
                Some(format!(
                    "Error reading config file {}, using default configuration: {}",
                    path.display(),
                    e
                )),
            ),
        }
    }

    /// Persist this configuration as pretty-printed JSON.
    ///
    /// Legacy counterpart to the file-load path; not used on the hot path and
    /// carries no concurrent-write guarantee.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}
