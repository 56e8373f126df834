//! Message bubble with markdown rendering and the preview affordance.

use dioxus::prelude::*;
use skiff_ui::{previewable_html, render_markdown_to_html};

use crate::state::Role;

/// A single message bubble. Messages carrying an HTML payload (a fenced
/// `html` block, or a whole-message HTML document) get a Preview button
/// that hands the payload to the caller.
#[component]
pub fn MessageBubble(
    role: Role,
    content: String,
    timestamp_millis: u64,
    on_preview: EventHandler<String>,
) -> Element {
    let is_mine = role == Role::User;
    let bubble_class = if is_mine {
        "message-bubble mine"
    } else {
        "message-bubble theirs"
    };
    let time_display = chrono::DateTime::from_timestamp_millis(timestamp_millis as i64)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default();
    let rendered_html = render_markdown_to_html(&content);
    let preview_payload = previewable_html(&content);

    rsx! {
        div { class: "{bubble_class}",
            if is_mine {
                div { class: "message-content", "{content}" }
            } else {
                div {
                    class: "message-content markdown-rendered",
                    dangerous_inner_html: "{rendered_html}",
                }
            }

            div { class: "message-meta",
                if let Some(html) = preview_payload {
                    button {
                        class: "message-preview-btn",
                        onclick: move |_| on_preview.call(html.clone()),
                        "Preview"
                    }
                }
                span { class: "message-time", "{time_display}" }
            }
        }
    }
}
