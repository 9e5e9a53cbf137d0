//! Quotes and their stylistic variants.
//!
//! - [`mode::VariantMode`] — the requested style (normal, uwu, pig latin)
//! - [`variant`] — the variant transformer and its validation rules
//! - [`entities::Quote`] — an accepted, fully transformed quote
//! - [`listing`] — rendering a collection of quotes for display

pub mod entities;
pub mod listing;
pub mod mode;
pub mod variant;
