//! Console command runner
//!
//! Runs one command line through the dispatcher and prints the outcome.
//! Shared by one-shot mode and the interactive REPL.

use crate::output::console::ConsoleFormatter;
use crate::output::notifier::ConsoleNotifier;
use quotebook_application::{CommandOutcome, QuoteStore, RunCommandError, RunCommandUseCase};

/// Runs commands against a store and prints their outcome to the console
pub struct CommandRunner<S: QuoteStore> {
    use_case: RunCommandUseCase<S>,
    quiet: bool,
    show_warnings: bool,
}

impl<S: QuoteStore> CommandRunner<S> {
    pub fn new(use_case: RunCommandUseCase<S>) -> Self {
        Self {
            use_case,
            quiet: false,
            show_warnings: true,
        }
    }

    /// Suppress confirmations and warnings
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Set whether warnings are printed (ignored in quiet mode)
    pub fn with_warnings(mut self, show: bool) -> Self {
        self.show_warnings = show;
        self
    }

    /// Whether transform warnings reach the console
    pub fn prints_warnings(&self) -> bool {
        self.show_warnings && !self.quiet
    }

    fn notifier(&self) -> ConsoleNotifier {
        ConsoleNotifier::new().with_warnings(self.prints_warnings())
    }

    /// Get the underlying use case
    pub fn use_case(&self) -> &RunCommandUseCase<S> {
        &self.use_case
    }

    /// Run a single command line and print its outcome.
    ///
    /// Errors are returned unprinted so the caller decides whether they
    /// are fatal.
    pub fn run_line(&mut self, line: &str) -> Result<CommandOutcome, RunCommandError> {
        let notifier = self.notifier();
        let outcome = self.use_case.execute_with_notifier(line, &notifier)?;

        let printable = match &outcome {
            CommandOutcome::Added(_) => !self.quiet,
            CommandOutcome::Duplicate(_) | CommandOutcome::Listed(_) => true,
        };
        if printable {
            println!("{}", ConsoleFormatter::format_outcome(&outcome));
        }

        Ok(outcome)
    }
}
