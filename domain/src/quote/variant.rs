//! Variant transformer.
//!
//! Turns raw quote text into its requested [`VariantMode`] and enforces
//! the rules every accepted quote must satisfy:
//!
//! | Rule | Error |
//! |------|-------|
//! | Original text longer than [`MAX_QUOTE_LENGTH`] characters | [`QuoteError::TooLong`] |
//! | Non-normal mode produced identical text | [`QuoteError::Unchanged`] |
//!
//! The transformation itself ([`apply_variant`]) never fails. When the uwu
//! stutter pushes the text over the limit it is retracted and a
//! [`TransformWarning`] is returned alongside the text.

use crate::core::error::QuoteError;
use crate::core::string::{capitalize, char_len};
use crate::quote::mode::VariantMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Maximum quote length, in characters
pub const MAX_QUOTE_LENGTH: usize = 50;

/// Uwu substitutions, applied in order. Each rule rewrites the whole
/// string before the next one runs.
const UWU_RULES: [(&str, &str); 6] = [
    ("l", "w"),
    ("L", "W"),
    ("r", "w"),
    ("R", "W"),
    (" u", " u-u"),
    (" U", " U-U"),
];

/// Undoes the stutter rules when the uwu text is over the limit.
const UWU_RETRACTIONS: [(&str, &str); 2] = [("u-u", "u"), ("U-U", "U")];

const VOWELS: &str = "aeiouAEIOU";

/// Non-fatal diagnostic produced while transforming a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformWarning {
    /// The uwu stutter was dropped to respect the length limit
    PartiallyTransformed,
}

impl fmt::Display for TransformWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformWarning::PartiallyTransformed => {
                write!(f, "Quote too long, only partially transformed")
            }
        }
    }
}

/// Output of [`apply_variant`]: the transformed text plus an optional warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,
    pub warning: Option<TransformWarning>,
}

impl Transformed {
    fn clean(text: String) -> Self {
        Self {
            text,
            warning: None,
        }
    }
}

/// Transform `text` into `mode` and validate the result.
///
/// Returns the final text together with any warning raised on the way.
pub fn transform(text: &str, mode: VariantMode) -> Result<Transformed, QuoteError> {
    let transformed = apply_variant(text, mode);
    validate_variant(text, &transformed.text, mode)?;
    Ok(transformed)
}

/// Apply the mode-specific transformation without validating it
pub fn apply_variant(text: &str, mode: VariantMode) -> Transformed {
    match mode {
        VariantMode::Normal => Transformed::clean(text.to_string()),
        VariantMode::Uwu => uwuify(text),
        VariantMode::PigLatin => Transformed::clean(pig_latinize(text)),
    }
}

/// Check the shared rules against the original text and the transformed text.
///
/// The length limit is checked on the original text, before the no-op rule.
pub fn validate_variant(
    original: &str,
    transformed: &str,
    mode: VariantMode,
) -> Result<(), QuoteError> {
    let length = char_len(original);
    if length > MAX_QUOTE_LENGTH {
        return Err(QuoteError::TooLong {
            length,
            max: MAX_QUOTE_LENGTH,
        });
    }

    if mode.is_transforming() && original == transformed {
        return Err(QuoteError::Unchanged { mode });
    }

    Ok(())
}

fn uwuify(text: &str) -> Transformed {
    let mut result = UWU_RULES
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to));

    if char_len(&result) <= MAX_QUOTE_LENGTH {
        return Transformed::clean(result);
    }

    for (from, to) in UWU_RETRACTIONS {
        result = result.replace(from, to);
    }

    let warning = TransformWarning::PartiallyTransformed;
    debug!("Retracted uwu stutter: {}", warning);
    Transformed {
        text: result,
        warning: Some(warning),
    }
}

fn pig_latinize(text: &str) -> String {
    let words: Vec<String> = text.split(' ').map(pig_latin_word).collect();
    let result = capitalize(&words.join(" "));

    if char_len(&result) > MAX_QUOTE_LENGTH {
        text.to_string()
    } else {
        result
    }
}

/// Move the leading consonant cluster to the end of the word.
///
/// Anything that is not an ASCII vowel counts as a consonant, so an empty
/// word yields `way`.
fn pig_latin_word(word: &str) -> String {
    let split = word
        .char_indices()
        .find(|(_, c)| VOWELS.contains(*c))
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    let (cluster, rest) = word.split_at(split);

    if cluster.is_empty() {
        format!("{}way", word)
    } else {
        format!("{}{}ay", rest, cluster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIDICULOUS: &str =
        "ridiculously long quote that is specifically crafted to exceed the max quote length";

    // ==================== Normal ====================

    #[test]
    fn test_normal_is_identity() {
        for text in ["hello", "", "  spaced  out  ", "Already Capitalised"] {
            let result = transform(text, VariantMode::Normal).unwrap();
            assert_eq!(result.text, text);
            assert!(result.warning.is_none());
        }
    }

    #[test]
    fn test_normal_at_limit() {
        let text = "a".repeat(MAX_QUOTE_LENGTH);
        assert_eq!(transform(&text, VariantMode::Normal).unwrap().text, text);
    }

    #[test]
    fn test_normal_over_limit() {
        let text = "a".repeat(MAX_QUOTE_LENGTH + 1);
        let err = transform(&text, VariantMode::Normal).unwrap_err();
        assert_eq!(
            err,
            QuoteError::TooLong {
                length: 51,
                max: MAX_QUOTE_LENGTH
            }
        );
    }

    #[test]
    fn test_limit_counts_characters() {
        // 50 characters, 100 bytes
        let text = "é".repeat(MAX_QUOTE_LENGTH);
        assert!(transform(&text, VariantMode::Normal).is_ok());
    }

    // ==================== Uwu ====================

    #[test]
    fn test_uwu_hello() {
        assert_eq!(transform("hello", VariantMode::Uwu).unwrap().text, "hewwo");
    }

    #[test]
    fn test_uwu_letter_substitutions() {
        let result = transform("Really Large Rolls", VariantMode::Uwu).unwrap();
        assert_eq!(result.text, "Weawwy Wawge Wowws");
    }

    #[test]
    fn test_uwu_stutters_word_initial_u() {
        let result = transform("no Umbrella for us", VariantMode::Uwu).unwrap();
        assert_eq!(result.text, "no U-Umbwewwa fow u-us");
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_uwu_does_not_stutter_leading_u() {
        // The stutter rule needs a preceding space
        let result = transform("up and under", VariantMode::Uwu).unwrap();
        assert_eq!(result.text, "up and u-undew");
    }

    #[test]
    fn test_uwu_letter_rules_run_before_stutter() {
        assert_eq!(apply_variant("lu ru", VariantMode::Uwu).text, "wu wu");
        assert_eq!(apply_variant("l ul", VariantMode::Uwu).text, "w u-uw");
    }

    #[test]
    fn test_uwu_no_op_is_rejected() {
        let err = transform("same", VariantMode::Uwu).unwrap_err();
        assert_eq!(
            err,
            QuoteError::Unchanged {
                mode: VariantMode::Uwu
            }
        );
    }

    #[test]
    fn test_uwu_overflow_retracts_stutter_with_warning() {
        // 49 characters; the stutter would add 30 more
        let text = format!("rule{}", " us".repeat(15));
        assert_eq!(char_len(&text), 49);

        let result = transform(&text, VariantMode::Uwu).unwrap();
        assert_eq!(result.text, format!("wuwe{}", " us".repeat(15)));
        assert_eq!(result.warning, Some(TransformWarning::PartiallyTransformed));
    }

    #[test]
    fn test_uwu_overflow_retracts_uppercase_stutter() {
        let text = format!("Rule{}", " Us".repeat(15));
        let result = transform(&text, VariantMode::Uwu).unwrap();
        assert_eq!(result.text, format!("Wuwe{}", " Us".repeat(15)));
        assert!(result.warning.is_some());
    }

    #[test]
    fn test_uwu_overflow_retraction_only_touches_stutter() {
        // Letter substitutions survive the retraction even though the
        // result is still over the limit
        let text = format!("l{}", " u".repeat(25));
        let result = apply_variant(&text, VariantMode::Uwu);
        assert_eq!(result.text, format!("w{}", " u".repeat(25)));
        assert!(char_len(&result.text) > MAX_QUOTE_LENGTH);
        assert!(result.warning.is_some());
    }

    #[test]
    fn test_uwu_ridiculous_quote_warns_then_fails_on_length() {
        let applied = apply_variant(RIDICULOUS, VariantMode::Uwu);
        assert!(!applied.text.contains("u-u"));
        assert_eq!(applied.warning, Some(TransformWarning::PartiallyTransformed));

        let err = transform(RIDICULOUS, VariantMode::Uwu).unwrap_err();
        assert!(err.is_too_long());
    }

    #[test]
    fn test_warning_display() {
        assert_eq!(
            TransformWarning::PartiallyTransformed.to_string(),
            "Quote too long, only partially transformed"
        );
    }

    // ==================== Pig latin ====================

    #[test]
    fn test_pig_latin_sentence() {
        let result = transform("the quick brown fox", VariantMode::PigLatin).unwrap();
        // "qu" splits at the u: only "q" is moved
        assert_eq!(result.text, "Ethay uickqay ownbray oxfay");
    }

    #[test]
    fn test_pig_latin_vowel_start() {
        assert_eq!(transform("apple", VariantMode::PigLatin).unwrap().text, "Appleway");
    }

    #[test]
    fn test_pig_latin_lowercases_after_first_char() {
        let result = transform("Hello World", VariantMode::PigLatin).unwrap();
        assert_eq!(result.text, "Ellohay orldway");
    }

    #[test]
    fn test_pig_latin_word_without_vowels() {
        assert_eq!(pig_latin_word("rhythm"), "rhythmay");
        assert_eq!(pig_latin_word(""), "way");
        assert_eq!(pig_latin_word("Egg"), "Eggway");
    }

    #[test]
    fn test_pig_latin_preserves_empty_tokens() {
        let result = transform("a  b", VariantMode::PigLatin).unwrap();
        assert_eq!(result.text, "Away way bay");
    }

    #[test]
    fn test_pig_latin_empty_input() {
        assert_eq!(transform("", VariantMode::PigLatin).unwrap().text, "Way");
    }

    #[test]
    fn test_pig_latin_overflow_falls_back_to_original() {
        let text = "the quick brown fox jumps over the lazy dog";
        assert!(char_len(text) <= MAX_QUOTE_LENGTH);

        let applied = apply_variant(text, VariantMode::PigLatin);
        assert_eq!(applied.text, text);
        assert!(applied.warning.is_none());

        // The fallback is identical to the input, so the no-op rule applies
        let err = transform(text, VariantMode::PigLatin).unwrap_err();
        assert!(err.is_unchanged());
    }

    #[test]
    fn test_pig_latin_overlong_input_reports_length() {
        let err = transform(RIDICULOUS, VariantMode::PigLatin).unwrap_err();
        assert!(err.is_too_long());
    }
}
