//! Detection of previewable HTML payloads in chat messages.

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

/// Extract the contents of the first fenced `html` code block, if any.
pub fn extract_html_block(markdown: &str) -> Option<String> {
    let mut in_html_fence = false;
    let mut source = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                let lang = info.split_whitespace().next().unwrap_or("");
                if lang.eq_ignore_ascii_case("html") {
                    in_html_fence = true;
                }
            }
            Event::End(TagEnd::CodeBlock) if in_html_fence => {
                return Some(source);
            }
            Event::Text(text) if in_html_fence => {
                source.push_str(&text);
            }
            _ => {}
        }
    }

    None
}

/// Whether a message body is itself a standalone HTML document.
pub fn is_html_document(text: &str) -> bool {
    let head = text.trim_start().to_ascii_lowercase();
    head.starts_with("<!doctype html") || head.starts_with("<html")
}

/// The HTML payload a message offers for preview, if any.
///
/// A fenced `html` code block wins over the whole-message fallback, so a
/// message explaining an HTML snippet previews the snippet, not the prose.
pub fn previewable_html(content: &str) -> Option<String> {
    if let Some(block) = extract_html_block(content) {
        return Some(block);
    }
    if is_html_document(content) {
        return Some(content.trim().to_string());
    }
    None
}
