//! Domain layer for quotebook
//!
//! This crate contains the core business logic: quotes, their variant
//! modes and the transformer that turns raw text into an accepted quote.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Variants
//!
//! - **Normal**: the text as written
//! - **Uwu**: `l`/`r` become `w` and word-initial `u` stutters (`u-u`)
//! - **PigLatin**: leading consonants move to the end of each word, followed by `ay`
//!
//! Every quote is limited to [`MAX_QUOTE_LENGTH`] characters, and a styled
//! variant that leaves the text unchanged is rejected.

pub mod config;
pub mod core;
pub mod quote;

// Re-export commonly used types
pub use config::OutputFormat;
pub use crate::core::error::QuoteError;
pub use quote::{
    entities::Quote,
    listing::{render_json_list, render_list, render_markdown_list},
    mode::VariantMode,
    variant::{
        MAX_QUOTE_LENGTH, TransformWarning, Transformed, apply_variant, transform,
        validate_variant,
    },
};
