//! Presentation layer for quotebook
//!
//! This crate contains CLI definitions, output formatters,
//! the console command runner, and the interactive REPL.

pub mod cli;
pub mod output;
pub mod repl;
pub mod runner;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::{console::ConsoleFormatter, notifier::ConsoleNotifier};
pub use repl::{LineAction, QuoteRepl};
pub use runner::CommandRunner;
