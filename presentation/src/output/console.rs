//! Console output formatter for command outcomes

use colored::Colorize;
use quotebook_application::{CommandKind, CommandOutcome, RunCommandError};
use quotebook_domain::{MAX_QUOTE_LENGTH, TransformWarning};

/// Formats command outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a successful outcome
    ///
    /// Listings are returned verbatim so they can be pasted as markdown.
    pub fn format_outcome(outcome: &CommandOutcome) -> String {
        match outcome {
            CommandOutcome::Added(quote) => format!(
                "{} {}",
                format!("Added {} quote:", quote.mode()).green().bold(),
                quote.text()
            ),
            CommandOutcome::Duplicate(_) => outcome
                .message()
                .unwrap_or_default()
                .yellow()
                .to_string(),
            CommandOutcome::Listed(rendered) => rendered.clone(),
        }
    }

    /// Format a command error
    pub fn format_error(error: &RunCommandError) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    /// Format a transformation warning
    pub fn format_warning(warning: &TransformWarning) -> String {
        format!("{} {}", "Warning:".yellow().bold(), warning)
    }

    /// Command reference shown by the REPL
    pub fn help() -> String {
        let mut output = format!("{}\n", "Commands:".cyan().bold());
        for kind in CommandKind::all() {
            let usage = match kind {
                CommandKind::List => kind.phrase().to_string(),
                CommandKind::Add(_) => format!("{} \"text\"", kind.phrase()),
            };
            let description = match kind {
                CommandKind::Add(mode) => mode.description(),
                CommandKind::List => "List stored quotes",
            };
            output.push_str(&format!("  {:<24} - {}\n", usage, description));
        }
        output.push_str(&format!("\nQuotes are limited to {} characters.\n", MAX_QUOTE_LENGTH));
        output.push_str(&format!("\n{}\n", "REPL commands:".cyan().bold()));
        output.push_str("  help, /help, /h, /?      - Show this help\n");
        output.push_str("  exit, quit, /q           - Exit (also Ctrl-D)");
        output
    }
}
