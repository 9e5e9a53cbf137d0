//! Command notification port
//!
//! Defines the side channel through which the dispatcher reports
//! non-fatal events while running a command.

use quotebook_domain::{Quote, TransformWarning};

/// Callbacks for events raised while a command runs
///
/// Implementations live in the presentation layer and can display
/// events in various ways (console, REPL, etc.)
pub trait CommandNotifier {
    /// Called when a transformation succeeded with a warning
    fn on_warning(&self, warning: &TransformWarning, quote: &Quote);

    /// Called when a quote was accepted by the store
    fn on_quote_added(&self, _quote: &Quote) {}

    /// Called when the store already held the quote's text
    fn on_duplicate(&self, _text: &str) {}
}

/// No-op notifier for when events are not needed
pub struct NoNotifier;

impl CommandNotifier for NoNotifier {
    fn on_warning(&self, _warning: &TransformWarning, _quote: &Quote) {}
}
