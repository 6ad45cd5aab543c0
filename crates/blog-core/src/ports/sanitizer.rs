//! Sanitizer port - cleans user-generated markup before it is stored.

/// Removes markup that could execute in a reader's browser.
pub trait Sanitizer: Send + Sync {
    /// Strip script-capable tags and attributes, keeping text and a small
    /// set of harmless inline tags.
    fn sanitize_html(&self, input: &str) -> String;

    /// Strip every tag. The result is HTML-escaped text.
    fn plain_text(&self, input: &str) -> String;
}
