//! HTML sanitizer built on `ammonia`.

use std::collections::HashSet;

use blog_core::ports::Sanitizer;

/// Tags that survive in a post body. None of them can run script, and
/// ammonia drops every attribute that could.
const ALLOWED_TAGS: &[&str] = &[
    "a",
    "b",
    "blockquote",
    "br",
    "code",
    "em",
    "i",
    "li",
    "ol",
    "p",
    "strong",
    "u",
    "ul",
];

/// Sanitizer for user-supplied post bodies.
///
/// `<script>` and `<style>` are removed along with their content; every
/// other disallowed tag is removed but its text is kept.
#[derive(Debug)]
pub struct HtmlSanitizer {
    markup: ammonia::Builder<'static>,
    text: ammonia::Builder<'static>,
}

impl HtmlSanitizer {
    pub fn new() -> Self {
        let mut markup = ammonia::Builder::default();
        markup.tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>());

        Self {
            markup,
            text: ammonia::Builder::empty(),
        }
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer for HtmlSanitizer {
    fn sanitize_html(&self, input: &str) -> String {
        self.markup.clean(input).to_string()
    }

    fn plain_text(&self, input: &str) -> String {
        self.text.clean(input).to_string()
    }
}
