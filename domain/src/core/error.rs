//! Domain error types

use crate::quote::mode::VariantMode;
use thiserror::Error;

/// Reasons a [`Quote`](crate::Quote) cannot be created
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// The original text is longer than the quote limit.
    #[error("Quote is too long ({length} > {max} characters)")]
    TooLong { length: usize, max: usize },

    /// A non-normal variant left the text untouched.
    #[error("Quote was not modified by the {mode} variant")]
    Unchanged { mode: VariantMode },
}

impl QuoteError {
    /// Check if this error was caused by the length limit
    pub fn is_too_long(&self) -> bool {
        matches!(self, QuoteError::TooLong { .. })
    }

    /// Check if this error was caused by a variant with no visible effect
    pub fn is_unchanged(&self) -> bool {
        matches!(self, QuoteError::Unchanged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_long_display() {
        let error = QuoteError::TooLong {
            length: 51,
            max: 50,
        };
        assert_eq!(error.to_string(), "Quote is too long (51 > 50 characters)");
    }

    #[test]
    fn test_unchanged_display() {
        let error = QuoteError::Unchanged {
            mode: VariantMode::Uwu,
        };
        assert_eq!(error.to_string(), "Quote was not modified by the uwu variant");
    }

    #[test]
    fn test_kind_checks() {
        let too_long = QuoteError::TooLong { length: 60, max: 50 };
        let unchanged = QuoteError::Unchanged {
            mode: VariantMode::PigLatin,
        };
        assert!(too_long.is_too_long());
        assert!(!too_long.is_unchanged());
        assert!(unchanged.is_unchanged());
        assert!(!unchanged.is_too_long());
    }
}
