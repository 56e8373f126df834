//! Chat view — the conversational surface and preview launcher.

use std::sync::Arc;

use dioxus::prelude::*;
use skiff_ui::HtmlPreviewOverlay;

use crate::bridge::BackendClient;
use crate::state::{now_millis, to_history, ChatContext, ChatMessage, ChatStatus, Role};

/// The conversational component. Owns all conversation state, including
/// the preview overlay's visibility: `preview_html` is `Some(html)` while
/// the overlay is open and `None` otherwise, so the overlay stays a pure
/// projection of this component's state.
#[component]
pub fn ChatView(api_url: String, system_prompt: String) -> Element {
    let mut ctx = use_context_provider(move || ChatContext {
        client: Signal::new(Arc::new(BackendClient::new(&api_url, &system_prompt))),
        messages: Signal::new(Vec::new()),
        status: Signal::new(ChatStatus::Idle),
        error: Signal::new(None),
        notice: Signal::new(None),
        preview_html: Signal::new(None),
    });
    let mut next_id = use_signal(|| 0u64);

    let on_send = move |text: String| {
        let client = ctx.client.read().clone();
        let history = to_history(&ctx.messages.read());

        let user_id = format!("m{}", next_id());
        next_id += 1;
        ctx.messages.write().push(ChatMessage {
            id: user_id,
            role: Role::User,
            content: text.clone(),
            timestamp_millis: now_millis(),
        });
        ctx.status.set(ChatStatus::Waiting);
        ctx.error.set(None);

        spawn(async move {
            match client.send_message(&text, &history).await {
                Ok(reply) => {
                    let reply_id = format!("m{}", next_id());
                    next_id += 1;
                    ctx.messages.write().push(ChatMessage {
                        id: reply_id,
                        role: Role::Assistant,
                        content: reply,
                        timestamp_millis: now_millis(),
                    });
                }
                Err(e) => {
                    tracing::error!("chat request failed: {}", e);
                    ctx.error.set(Some(format!("Send failed: {}", e)));
                }
            }
            ctx.status.set(ChatStatus::Idle);
        });
    };

    let on_attach = move |_: ()| {
        let client = ctx.client.read().clone();
        spawn(async move {
            let Some(file) = rfd::AsyncFileDialog::new()
                .set_title("Upload a document")
                .pick_file()
                .await
            else {
                return;
            };
            match client.upload_document(file.path()).await {
                Ok(receipt) => {
                    tracing::info!("uploaded {}", receipt.filename);
                    ctx.notice.set(Some(format!(
                        "Uploaded {} ({} bytes)",
                        receipt.filename, receipt.size_bytes
                    )));
                }
                Err(e) => {
                    tracing::error!("upload failed: {}", e);
                    ctx.error.set(Some(format!("Upload failed: {}", e)));
                }
            }
        });
    };

    let messages = ctx.messages.read().clone();
    let waiting = *ctx.status.read() == ChatStatus::Waiting;
    let backend = ctx.client.read().base_url().to_string();
    let preview_open = ctx.preview_html.read().is_some();
    let preview_content = ctx.preview_html.read().clone().unwrap_or_default();

    rsx! {
        div { class: "chat-view",
            div { class: "chat-header",
                span { class: "chat-header-name", "Skiff" }
                span { class: "chat-header-backend", "{backend}" }
            }

            div { class: "chat-messages",
                if messages.is_empty() {
                    div { class: "chat-empty",
                        "Ask for something. Replies containing HTML can be previewed."
                    }
                }
                for msg in messages.iter() {
                    super::message_bubble::MessageBubble {
                        key: "{msg.id}",
                        role: msg.role,
                        content: msg.content.clone(),
                        timestamp_millis: msg.timestamp_millis,
                        on_preview: move |html: String| ctx.preview_html.set(Some(html)),
                    }
                }
                if waiting {
                    div { class: "chat-waiting", "Thinking..." }
                }
            }

            if let Some(ref notice) = *ctx.notice.read() {
                div { class: "chat-notice",
                    span { "{notice}" }
                    button {
                        class: "chat-line-dismiss",
                        onclick: move |_| ctx.notice.set(None),
                        "\u{2717}"
                    }
                }
            }
            if let Some(ref err) = *ctx.error.read() {
                div { class: "chat-error",
                    span { "{err}" }
                    button {
                        class: "chat-line-dismiss",
                        onclick: move |_| ctx.error.set(None),
                        "\u{2717}"
                    }
                }
            }

            super::message_input::MessageInput {
                disabled: waiting,
                on_send,
                on_attach,
            }

            HtmlPreviewOverlay {
                is_open: preview_open,
                on_close: move |_| ctx.preview_html.set(None),
                html_content: preview_content,
            }
        }
    }
}
