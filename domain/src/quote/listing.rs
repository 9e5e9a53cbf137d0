//! Rendering stored quotes for display.

use crate::config::OutputFormat;

/// Render quotes as a markdown bullet list.
///
/// An empty collection still renders the leading bullet.
pub fn render_markdown_list<S: AsRef<str>>(quotes: &[S]) -> String {
    let entries: Vec<&str> = quotes.iter().map(AsRef::as_ref).collect();
    format!("- {}", entries.join("\n- "))
}

/// Render quotes as a pretty-printed JSON array
pub fn render_json_list<S: AsRef<str>>(quotes: &[S]) -> String {
    let entries: Vec<&str> = quotes.iter().map(AsRef::as_ref).collect();
    serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
}

/// Render quotes in the requested format
pub fn render_list<S: AsRef<str>>(quotes: &[S], format: OutputFormat) -> String {
    match format {
        OutputFormat::Markdown => render_markdown_list(quotes),
        OutputFormat::Json => render_json_list(quotes),
    }
}
