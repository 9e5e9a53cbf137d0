//! REPL (Read-Eval-Print Loop) for interactive quote entry

use crate::output::console::ConsoleFormatter;
use crate::runner::CommandRunner;
use quotebook_application::QuoteStore;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// What the REPL does with one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction<'a> {
    /// Blank line; prompt again
    Skip,
    /// Leave the REPL
    Exit,
    /// Print the command table
    Help,
    /// Slash command the REPL does not know
    Unknown(&'a str),
    /// Hand the line to the command dispatcher
    Dispatch(&'a str),
}

impl<'a> LineAction<'a> {
    /// Decide how to handle a raw input line
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line {
            "" => LineAction::Skip,
            "exit" | "quit" | "/quit" | "/exit" | "/q" => LineAction::Exit,
            "help" | "/help" | "/h" | "/?" => LineAction::Help,
            _ if line.starts_with('/') => LineAction::Unknown(line),
            _ => LineAction::Dispatch(line),
        }
    }
}

/// Interactive quote REPL
pub struct QuoteRepl<S: QuoteStore> {
    runner: CommandRunner<S>,
    prompt: String,
    history_path: Option<PathBuf>,
}

impl<S: QuoteStore> QuoteRepl<S> {
    /// Create a new QuoteRepl
    pub fn new(runner: CommandRunner<S>) -> Self {
        Self {
            runner,
            prompt: "quote> ".to_string(),
            history_path: None,
        }
    }

    /// Set the prompt text
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Persist line history to this file
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Default history location under the platform data directory
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("quotebook").join("history.txt"))
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(self.prompt.clone()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if self.handle_line(&line) {
                        break;
                    }
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => {
                    println!("^C");
                }
            }
        }

        Ok(())
    }

    /// Handle one input line. Returns true if should exit.
    fn handle_line(&mut self, line: &str) -> bool {
        match LineAction::parse(line) {
            LineAction::Skip => false,
            LineAction::Exit => {
                println!("Bye!");
                true
            }
            LineAction::Help => {
                println!();
                println!("{}", ConsoleFormatter::help());
                println!();
                false
            }
            LineAction::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type help for available commands");
                false
            }
            LineAction::Dispatch(command) => {
                if let Err(e) = self.runner.run_line(command) {
                    eprintln!("{}", ConsoleFormatter::format_error(&e));
                }
                false
            }
        }
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();

        let Some(path) = &self.history_path else {
            return editor;
        };

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create history directory {}: {}", parent.display(), e);
        }

        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                  Quotebook                  │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", ConsoleFormatter::help());
        println!();
    }
}
