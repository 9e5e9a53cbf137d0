//! String utilities for the domain layer.

/// Number of characters (not bytes) in a string
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Uppercase the first character and lowercase everything after it
///
/// Applies to the string as a whole, so only the very first character
/// keeps (or gains) an uppercase form.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
