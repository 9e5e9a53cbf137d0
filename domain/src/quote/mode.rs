//! Variant mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stylistic variant applied to a quote's text.
///
/// A pure tag: the behavior for each mode lives in
/// [`apply_variant`](super::variant::apply_variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantMode {
    /// Text is kept as written
    #[default]
    Normal,
    /// Phonetic substitution (`l`/`r` become `w`, word-initial `u` stutters)
    Uwu,
    /// Word reordering: leading consonants move to the end followed by `ay`
    PigLatin,
}

impl VariantMode {
    /// All modes, in declaration order
    pub const ALL: [VariantMode; 3] = [VariantMode::Normal, VariantMode::Uwu, VariantMode::PigLatin];

    /// Check if this mode is expected to alter the text
    pub fn is_transforming(&self) -> bool {
        !matches!(self, VariantMode::Normal)
    }

    /// Get a short description for display
    pub fn description(&self) -> &'static str {
        match self {
            VariantMode::Normal => "Quote as written",
            VariantMode::Uwu => "Phonetic uwu style",
            VariantMode::PigLatin => "Pig latin word reordering",
        }
    }
}

impl fmt::Display for VariantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantMode::Normal => write!(f, "normal"),
            VariantMode::Uwu => write!(f, "uwu"),
            VariantMode::PigLatin => write!(f, "piglatin"),
        }
    }
}

impl std::str::FromStr for VariantMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(VariantMode::Normal),
            "uwu" => Ok(VariantMode::Uwu),
            "piglatin" | "pig_latin" | "pig-latin" => Ok(VariantMode::PigLatin),
            _ => Err(format!("Invalid VariantMode: {}", s)),
        }
    }
}
