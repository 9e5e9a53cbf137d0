//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave.

use quotebook_domain::OutputFormat;

/// Dispatcher behavior configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchConfig {
    /// Format used when rendering `quote list`.
    pub list_format: OutputFormat,
}

impl DispatchConfig {
    /// Creates a DispatchConfig rendering lists in the given format.
    pub fn with_list_format(format: OutputFormat) -> Self {
        Self {
            list_format: format,
        }
    }
}
