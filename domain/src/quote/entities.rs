//! Quote entity

use crate::core::error::QuoteError;
use crate::quote::mode::VariantMode;
use crate::quote::variant::{TransformWarning, transform};
use serde::Serialize;
use std::fmt;

/// An accepted quote (Entity)
///
/// Holds the final, already transformed text and the mode that produced it.
/// The only way to obtain a `Quote` is through [`Quote::new`], so every
/// instance has passed the length and no-op rules.
///
/// Two quotes are equal when their final text is equal, whatever mode
/// produced them.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    text: String,
    mode: VariantMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<TransformWarning>,
}

impl Quote {
    /// Transform `text` into `mode` and build the quote
    pub fn new(text: impl AsRef<str>, mode: VariantMode) -> Result<Self, QuoteError> {
        let transformed = transform(text.as_ref(), mode)?;
        Ok(Self {
            text: transformed.text,
            mode,
            warning: transformed.warning,
        })
    }

    /// Get the final text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the mode that produced this quote
    pub fn mode(&self) -> VariantMode {
        self.mode
    }

    /// Warning raised while transforming, if any
    pub fn warning(&self) -> Option<TransformWarning> {
        self.warning
    }

    /// Check if the transformation had to be partially retracted
    pub fn is_partial(&self) -> bool {
        self.warning.is_some()
    }

    /// Consume and return the final text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl PartialEq for Quote {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Quote {}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
