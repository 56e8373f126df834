//! Render-level tests for the HTML preview overlay.
//!
//! The overlay is a stateless projection, so server-side rendering a small
//! host component is enough to check its output for any `(is_open, content)`
//! pair: structural absence when closed, and the sandboxed iframe with the
//! exact caller-supplied source when open.

use dioxus::prelude::*;
use skiff_ui::HtmlPreviewOverlay;

#[component]
fn Host(open: bool, content: String) -> Element {
    rsx! {
        HtmlPreviewOverlay {
            is_open: open,
            on_close: move |_| {},
            html_content: content,
        }
    }
}

fn render_host(open: bool, content: &str) -> String {
    let mut dom = VirtualDom::new_with_props(
        Host,
        HostProps {
            open,
            content: content.to_string(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn closed_overlay_is_structurally_absent() {
    let rendered = render_host(false, "<h1>never shown</h1>");
    assert!(!rendered.contains("html-preview"));
    assert!(!rendered.contains("<iframe"));
    assert!(!rendered.contains("never shown"));
    assert!(!rendered.contains("<div"));
}

#[test]
fn open_overlay_embeds_content_verbatim() {
    let rendered = render_host(true, "hello preview");
    assert!(rendered.contains(r#"srcdoc="hello preview""#));
}

#[test]
fn iframe_capability_set_is_scripts_only() {
    let rendered = render_host(
        true,
        "<script>window.top.location='http://evil.test'</script>",
    );
    assert!(rendered.contains(r#"sandbox="allow-scripts""#));
    assert!(!rendered.contains("allow-top-navigation"));
    assert!(!rendered.contains("allow-same-origin"));
    assert!(!rendered.contains("allow-popups"));
    assert!(!rendered.contains("allow-forms"));
}

#[test]
fn overlay_structure_has_one_backdrop_one_panel_one_close() {
    let rendered = render_host(true, "x");
    assert_eq!(rendered.matches("html-preview-overlay").count(), 1);
    assert_eq!(rendered.matches("html-preview-panel").count(), 1);
    assert_eq!(rendered.matches("html-preview-close").count(), 1);
    assert_eq!(rendered.matches("<iframe").count(), 1);
}

#[test]
fn reopening_shows_only_latest_content() {
    let first = render_host(true, "first document");
    assert!(first.contains("first document"));

    let closed = render_host(false, "first document");
    assert!(!closed.contains("first document"));
    assert!(!closed.contains("html-preview"));

    let second = render_host(true, "second document");
    assert!(second.contains("second document"));
    assert!(!second.contains("first document"));
}
