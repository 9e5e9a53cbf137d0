//! CLI entrypoint for quotebook
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quotebook_application::{DispatchConfig, RunCommandUseCase};
use quotebook_infrastructure::{ConfigLoader, FileConfig, InMemoryQuoteStore};
use quotebook_presentation::{Cli, CommandRunner, ConsoleFormatter, QuoteRepl};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        println!("{}", ConfigLoader::describe_config_sources());
        return Ok(());
    }

    let config = load_config(&cli)?;
    debug!("Using config: {:?}", config);

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting quotebook");

    // === Dependency Injection ===
    let list_format = cli.output.map(Into::into).unwrap_or(config.output.format);
    let use_case = RunCommandUseCase::new(InMemoryQuoteStore::new())
        .with_config(DispatchConfig::with_list_format(list_format));

    let mut runner = CommandRunner::new(use_case)
        .with_quiet(cli.quiet)
        .with_warnings(config.repl.show_warnings);

    // One-shot commands share the store with the REPL, if it follows
    for command in &cli.commands {
        if let Err(e) = runner.run_line(command) {
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            bail!("command failed: {}", command);
        }
    }

    if cli.wants_repl() {
        let history_path = config
            .repl
            .history_path()
            .or_else(QuoteRepl::<InMemoryQuoteStore>::default_history_path);

        let mut repl = QuoteRepl::new(runner)
            .with_prompt(config.repl.prompt.clone())
            .with_history_path(history_path);

        repl.run().context("interactive session failed")?;
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?
    };

    config.validate()?;
    Ok(config)
}
