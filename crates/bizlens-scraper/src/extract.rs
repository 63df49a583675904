//! Markup-to-text extraction.

use scraper::{Html, Node};

/// Upper bound on extracted text, in characters, to cap model payload size.
pub const MAX_TEXT_CHARS: usize = 4000;

/// Elements whose text content is never visible.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extracts visible text from `html`, truncated to [`MAX_TEXT_CHARS`].
#[must_use]
pub fn extract_text(html: &str) -> String {
    extract_text_with_limit(html, MAX_TEXT_CHARS)
}

/// Extracts visible text from `html`, whitespace-joined and truncated to
/// `max_chars` characters.
///
/// Text inside `<script>`, `<style>`, `<noscript>` and `<template>` is
/// dropped. Runs of whitespace collapse to a single space.
#[must_use]
pub fn extract_text_with_limit(html: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);
    let mut words: Vec<&str> = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }
        words.extend(text.split_whitespace());
    }

    truncate_chars(&words.join(" "), max_chars)
}

/// Truncates to at most `max_chars` characters without splitting a code point.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_joins_with_spaces() {
        let html = "<html><head><title>Acme</title></head>\
                    <body><h1>Industrial   tools</h1><p>Built for\n\n factories.</p></body></html>";
        assert_eq!(extract_text(html), "Acme Industrial tools Built for factories.");
    }

    #[test]
    fn drops_script_and_style_content() {
        let html = "<body><script>var x = 1;</script><style>.a{color:red}</style>\
                    <noscript>enable js</noscript><p>Visible</p></body>";
        assert_eq!(extract_text(html), "Visible");
    }

    #[test]
    fn drops_comments() {
        let html = "<body><!-- tracking pixel --><p>Hello</p></body>";
        assert_eq!(extract_text(html), "Hello");
    }

    #[test]
    fn decodes_entities() {
        let html = "<p>Fish &amp; Chips</p>";
        assert_eq!(extract_text(html), "Fish & Chips");
    }

    #[test]
    fn truncates_to_limit() {
        let body = "word ".repeat(2000);
        let html = format!("<p>{body}</p>");
        let text = extract_text(&html);
        assert_eq!(text.chars().count(), MAX_TEXT_CHARS);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn plain_text_input_passes_through() {
        assert_eq!(extract_text_with_limit("just text", 100), "just text");
    }

    #[test]
    fn empty_input_yields_empty_text() {
        assert_eq!(extract_text(""), "");
    }
}
