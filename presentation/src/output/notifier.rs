//! Console notifier for command events

use crate::output::console::ConsoleFormatter;
use quotebook_application::CommandNotifier;
use quotebook_domain::{Quote, TransformWarning};

/// Prints transformation warnings to stderr
pub struct ConsoleNotifier {
    show_warnings: bool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            show_warnings: true,
        }
    }

    /// Set whether warnings are printed
    pub fn with_warnings(mut self, show: bool) -> Self {
        self.show_warnings = show;
        self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandNotifier for ConsoleNotifier {
    fn on_warning(&self, warning: &TransformWarning, _quote: &Quote) {
        if self.show_warnings {
            eprintln!("{}", ConsoleFormatter::format_warning(warning));
        }
    }
}
