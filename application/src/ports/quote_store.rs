//! Quote store port
//!
//! Defines the interface for the collection that keeps accepted quotes.

use quotebook_domain::Quote;
use thiserror::Error;

/// Raised when a quote with the same final text is already stored
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Duplicate quote: {text}")]
pub struct DuplicateError {
    pub text: String,
}

impl DuplicateError {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Ordered, append-only collection of accepted quotes.
///
/// Uniqueness is by exact final text. Implementations are used from a
/// single thread of control; callers that share a store must wrap it in
/// their own synchronization.
pub trait QuoteStore {
    /// Final texts of all stored quotes, in insertion order
    fn quotes(&self) -> Vec<String>;

    /// Append a quote, failing if its text is already present
    fn add(&mut self, quote: Quote) -> Result<(), DuplicateError>;

    /// Check if a quote with this exact text is stored
    fn contains(&self, text: &str) -> bool {
        self.quotes().iter().any(|q| q == text)
    }

    /// Number of stored quotes
    fn len(&self) -> usize {
        self.quotes().len()
    }

    /// Check if the store holds no quotes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
