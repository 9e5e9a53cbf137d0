//! In-memory quote store.
//!
//! Keeps accepted quotes in a `Vec` for the lifetime of the process.

use quotebook_application::{DuplicateError, QuoteStore};
use quotebook_domain::Quote;
use tracing::debug;

/// Append-only, insertion-ordered quote store backed by a `Vec`.
///
/// Not synchronized: it is owned by a single dispatcher.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuoteStore {
    quotes: Vec<Quote>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the stored quotes, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }
}

impl QuoteStore for InMemoryQuoteStore {
    fn quotes(&self) -> Vec<String> {
        self.quotes.iter().map(|q| q.text().to_string()).collect()
    }

    fn add(&mut self, quote: Quote) -> Result<(), DuplicateError> {
        if self.contains(quote.text()) {
            return Err(DuplicateError::new(quote.text()));
        }
        debug!("Storing quote #{}: {}", self.quotes.len() + 1, quote.text());
        self.quotes.push(quote);
        Ok(())
    }

    fn contains(&self, text: &str) -> bool {
        self.quotes.iter().any(|q| q.text() == text)
    }

    fn len(&self) -> usize {
        self.quotes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebook_domain::VariantMode;

    fn quote(text: &str, mode: VariantMode) -> Quote {
        Quote::new(text, mode).unwrap()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryQuoteStore::new();
        assert!(store.is_empty());
        assert!(store.quotes().is_empty());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = InMemoryQuoteStore::new();
        store.add(quote("zebra", VariantMode::Normal)).unwrap();
        store.add(quote("apple", VariantMode::Normal)).unwrap();
        store.add(quote("hello", VariantMode::Uwu)).unwrap();

        assert_eq!(store.quotes(), vec!["zebra", "apple", "hewwo"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_duplicate_add_fails() {
        let mut store = InMemoryQuoteStore::new();
        store.add(quote("hello", VariantMode::Normal)).unwrap();

        let err = store.add(quote("hello", VariantMode::Normal)).unwrap_err();
        assert_eq!(err, DuplicateError::new("hello"));
        assert_eq!(store.quotes(), vec!["hello"]);
    }

    #[test]
    fn test_duplicate_compares_final_text_exactly() {
        let mut store = InMemoryQuoteStore::new();
        store.add(quote("Hello", VariantMode::Normal)).unwrap();
        store.add(quote("hello", VariantMode::Normal)).unwrap();
        store.add(quote("hello ", VariantMode::Normal)).unwrap();

        // "hello" in pig latin is "Ellohay", a new text
        store.add(quote("hello", VariantMode::PigLatin)).unwrap();
        let err = store.add(quote("Ellohay", VariantMode::Normal)).unwrap_err();
        assert_eq!(err.text, "Ellohay");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_iter_exposes_modes() {
        let mut store = InMemoryQuoteStore::new();
        store.add(quote("hello", VariantMode::Uwu)).unwrap();
        let modes: Vec<_> = store.iter().map(Quote::mode).collect();
        assert_eq!(modes, vec![VariantMode::Uwu]);
    }
}
