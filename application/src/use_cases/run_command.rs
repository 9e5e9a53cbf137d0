//! Run Command use case
//!
//! Dispatches a parsed command to the variant transformer and the quote store.

use super::command::{CommandKind, parse_command};
use crate::config::DispatchConfig;
use crate::ports::notifier::{CommandNotifier, NoNotifier};
use crate::ports::quote_store::QuoteStore;
use quotebook_domain::{Quote, QuoteError, VariantMode, render_list};
use thiserror::Error;
use tracing::{debug, info};

/// Message shown when a quote is already stored
pub const DUPLICATE_MESSAGE: &str = "Quote has already been added previously";

/// Errors that can occur while running a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunCommandError {
    #[error("Invalid command: {0:?}")]
    InvalidCommand(String),

    #[error(transparent)]
    Quote(#[from] QuoteError),
}

impl RunCommandError {
    /// Check if the command phrase was not recognized
    pub fn is_invalid_command(&self) -> bool {
        matches!(self, RunCommandError::InvalidCommand(_))
    }
}

/// Result of a successfully handled command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The quote was transformed and stored
    Added(Quote),
    /// The store already held this text; nothing was added
    Duplicate(String),
    /// Rendered list of stored quotes
    Listed(String),
}

impl CommandOutcome {
    /// Informational message for outcomes that carry one
    pub fn message(&self) -> Option<&'static str> {
        match self {
            CommandOutcome::Duplicate(_) => Some(DUPLICATE_MESSAGE),
            _ => None,
        }
    }
}

/// Use case for handling quote commands
///
/// Owns the injected store; use [`store`](Self::store) or
/// [`into_store`](Self::into_store) to inspect it afterwards.
pub struct RunCommandUseCase<S: QuoteStore> {
    store: S,
    config: DispatchConfig,
}

impl<S: QuoteStore> RunCommandUseCase<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: DispatchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the use case and return the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Execute a command with the default (no-op) notifier
    pub fn execute(&mut self, command: &str) -> Result<CommandOutcome, RunCommandError> {
        self.execute_with_notifier(command, &NoNotifier)
    }

    /// Execute a command, reporting events to `notifier`
    pub fn execute_with_notifier(
        &mut self,
        command: &str,
        notifier: &dyn CommandNotifier,
    ) -> Result<CommandOutcome, RunCommandError> {
        let parsed = parse_command(command)?;

        match parsed.kind {
            CommandKind::List => Ok(CommandOutcome::Listed(self.list())),
            CommandKind::Add(mode) => self.add(&parsed.argument, mode, notifier),
        }
    }

    /// Render the stored quotes in the configured format
    pub fn list(&self) -> String {
        let quotes = self.store.quotes();
        debug!("Listing {} quotes", quotes.len());
        render_list(quotes.as_slice(), self.config.list_format)
    }

    fn add(
        &mut self,
        text: &str,
        mode: VariantMode,
        notifier: &dyn CommandNotifier,
    ) -> Result<CommandOutcome, RunCommandError> {
        let quote = Quote::new(text, mode)?;

        if let Some(warning) = quote.warning() {
            notifier.on_warning(&warning, &quote);
        }

        match self.store.add(quote.clone()) {
            Ok(()) => {
                info!("Added {} quote: {}", mode, quote.text());
                notifier.on_quote_added(&quote);
                Ok(CommandOutcome::Added(quote))
            }
            Err(e) => {
                info!("{}", e);
                notifier.on_duplicate(&e.text);
                Ok(CommandOutcome::Duplicate(e.text))
            }
        }
    }
}
