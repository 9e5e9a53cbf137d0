//! Command parsing
//!
//! Splits a free-form instruction such as `quote uwu "hello"` into the
//! command phrase and its quoted argument.
//!
//! | Phrase | Kind |
//! |--------|------|
//! | `quote` | [`CommandKind::Add`] with [`VariantMode::Normal`] |
//! | `quote uwu` | [`CommandKind::Add`] with [`VariantMode::Uwu`] |
//! | `quote piglatin` | [`CommandKind::Add`] with [`VariantMode::PigLatin`] |
//! | `quote list` | [`CommandKind::List`] |

use super::run_command::RunCommandError;
use once_cell::sync::Lazy;
use quotebook_domain::VariantMode;
use regex::Regex;
use std::fmt;
use tracing::debug;

/// First quote-delimited span. Any opening mark may pair with any closing
/// mark, and the span extends to the last closing mark on the line.
static QUOTED_ARGUMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["“‘'](.*)["”’']"#).expect("Valid regex pattern"));

pub const ADD_PHRASE: &str = "quote";
pub const UWU_PHRASE: &str = "quote uwu";
pub const PIG_LATIN_PHRASE: &str = "quote piglatin";
pub const LIST_PHRASE: &str = "quote list";

/// What a recognized command asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Transform the argument and add it to the store
    Add(VariantMode),
    /// Render the stored quotes
    List,
}

impl CommandKind {
    /// The literal phrase that selects this kind
    pub fn phrase(&self) -> &'static str {
        match self {
            CommandKind::Add(VariantMode::Normal) => ADD_PHRASE,
            CommandKind::Add(VariantMode::Uwu) => UWU_PHRASE,
            CommandKind::Add(VariantMode::PigLatin) => PIG_LATIN_PHRASE,
            CommandKind::List => LIST_PHRASE,
        }
    }

    /// All recognized command kinds
    pub fn all() -> [CommandKind; 4] {
        [
            CommandKind::Add(VariantMode::Normal),
            CommandKind::Add(VariantMode::Uwu),
            CommandKind::Add(VariantMode::PigLatin),
            CommandKind::List,
        ]
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phrase())
    }
}

impl std::str::FromStr for CommandKind {
    type Err = RunCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ADD_PHRASE => Ok(CommandKind::Add(VariantMode::Normal)),
            UWU_PHRASE => Ok(CommandKind::Add(VariantMode::Uwu)),
            PIG_LATIN_PHRASE => Ok(CommandKind::Add(VariantMode::PigLatin)),
            LIST_PHRASE => Ok(CommandKind::List),
            _ => Err(RunCommandError::InvalidCommand(s.to_string())),
        }
    }
}

/// A recognized command and its quoted argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub kind: CommandKind,
    /// Text between the quote marks, or empty when there were none
    pub argument: String,
}

/// Parse a command line.
///
/// Text before the quoted span (trimmed) selects the command; anything
/// after the closing mark is ignored.
pub fn parse_command(input: &str) -> Result<ParsedCommand, RunCommandError> {
    let (phrase, argument) = match QUOTED_ARGUMENT.captures(input) {
        Some(caps) => {
            let start = caps.get(0).map_or(0, |m| m.start());
            let argument = caps.get(1).map_or("", |m| m.as_str());
            (input[..start].trim(), argument)
        }
        None => (input.trim(), ""),
    };

    let kind: CommandKind = phrase.parse()?;
    debug!("Parsed command '{}' with argument '{}'", kind, argument);

    Ok(ParsedCommand {
        kind,
        argument: argument.to_string(),
    })
}
