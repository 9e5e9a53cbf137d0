//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use quotebook_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use quotebook_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("repl.prompt cannot be empty")]
    EmptyPrompt,

    #[error("repl.history_file cannot be empty")]
    EmptyHistoryFile,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Format for `quote list` (uses domain type)
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Prompt shown before each command
    pub prompt: String,
    /// Path to history file
    pub history_file: Option<String>,
    /// Print partial-transformation warnings
    pub show_warnings: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            prompt: "quote> ".to_string(),
            history_file: None,
            show_warnings: true,
        }
    }
}

impl FileReplConfig {
    /// Resolve the history file path, expanding a leading `~/`
    pub fn history_path(&self) -> Option<PathBuf> {
        let raw = self.history_file.as_deref()?;
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}

/// Complete configuration file structure
///
/// ```toml
/// [output]
/// format = "markdown"
/// color = true
///
/// [repl]
/// prompt = "quote> "
/// show_warnings = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Check values that deserialize fine but are unusable
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.repl.prompt.is_empty() {
            return Err(ConfigValidationError::EmptyPrompt);
        }
        if matches!(self.repl.history_file.as_deref(), Some(path) if path.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyHistoryFile);
        }
        Ok(())
    }
}
