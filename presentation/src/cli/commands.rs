//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for `quote list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown bullet list
    Markdown,
    /// JSON array
    Json,
}

impl From<OutputFormat> for quotebook_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => quotebook_domain::OutputFormat::Markdown,
            OutputFormat::Json => quotebook_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for quotebook
#[derive(Parser, Debug)]
#[command(name = "quotebook")]
#[command(author, version, about = "Collect quotes in plain, uwu and pig latin variants")]
#[command(long_about = r#"
Quotebook keeps a list of short quotes, optionally restyled on the way in.

Commands:
  quote "text"            Add the quote as written
  quote uwu "text"        Add the quote in uwu style
  quote piglatin "text"   Add the quote in pig latin
  quote list              Show all quotes as a markdown list

Quotes are limited to 50 characters. Each quote is stored once.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./quotebook.toml       Project-level config
3. ~/.config/quotebook/config.toml   Global config

Example:
  quotebook 'quote uwu "hello there"' 'quote list'
  quotebook --interactive
"#)]
pub struct Cli {
    /// Commands to run in order (starts the interactive prompt when omitted)
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Start the interactive prompt after running any commands
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format for `quote list` (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress confirmations and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether the interactive prompt should run
    pub fn wants_repl(&self) -> bool {
        self.interactive || self.commands.is_empty()
    }
}
