//! Application layer for quotebook
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DispatchConfig;
pub use ports::{
    notifier::{CommandNotifier, NoNotifier},
    quote_store::{DuplicateError, QuoteStore},
};
pub use use_cases::command::{CommandKind, ParsedCommand, parse_command};
pub use use_cases::run_command::{
    CommandOutcome, DUPLICATE_MESSAGE, RunCommandError, RunCommandUseCase,
};
