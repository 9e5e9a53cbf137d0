//! Core domain concepts shared across all subdomains.
//!
//! - [`error::QuoteError`] — reasons a quote cannot be created
//! - [`string`] — character-aware string helpers

pub mod error;
pub mod string;
