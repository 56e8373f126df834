//! HTML preview overlay component.

use dioxus::prelude::*;

/// Modal overlay that renders untrusted HTML inside a sandboxed iframe.
///
/// The overlay is a stateless projection of its caller's state: `is_open`
/// and `html_content` are re-supplied on every render and never retained.
/// When `is_open` is false nothing is rendered at all. Dismissal gestures
/// (backdrop click, close button) only signal intent through `on_close`;
/// the caller owns the actual open/closed transition.
#[component]
pub fn HtmlPreviewOverlay(
    is_open: bool,
    on_close: EventHandler<()>,
    html_content: String,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "html-preview-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "html-preview-panel",
                // Clicks inside the panel must not reach the backdrop handler.
                onclick: move |e| e.stop_propagation(),

                div { class: "html-preview-header",
                    span { class: "html-preview-title", "HTML Preview" }
                    button {
                        class: "html-preview-close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }
                div { class: "html-preview-body",
                    // srcdoc keeps the document origin-less; the sandbox
                    // grants script execution and nothing else.
                    iframe {
                        class: "html-preview-frame",
                        srcdoc: "{html_content}",
                        "sandbox": "allow-scripts",
                        title: "HTML Preview",
                    }
                }
            }
        }
    }
}
