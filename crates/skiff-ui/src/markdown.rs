//! Markdown rendering for assistant messages.

use pulldown_cmark::{html, Options, Parser};

/// Render markdown to HTML.
pub fn render_markdown_to_html(markdown: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let rendered = render_markdown_to_html("some **bold** text");
        assert!(rendered.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_code_fences_stay_escaped() {
        let rendered = render_markdown_to_html("```html\n<script>alert(1)</script>\n```");
        assert!(rendered.contains("&lt;script&gt;"));
        assert!(!rendered.contains("<script>"));
    }
}
