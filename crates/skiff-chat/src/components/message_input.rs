//! Message compose bar with attach and send buttons.

use dioxus::prelude::*;

/// Message input component. Enter sends, Shift+Enter inserts a newline.
/// The bar is disabled while a backend round-trip is in flight.
#[component]
pub fn MessageInput(
    disabled: bool,
    on_send: EventHandler<String>,
    on_attach: EventHandler<()>,
) -> Element {
    let mut text = use_signal(String::new);

    let can_send = !disabled && !text.read().trim().is_empty();

    rsx! {
        div { class: "message-input-bar",
            button {
                class: "attach-button",
                title: "Upload a document",
                disabled: disabled,
                onclick: move |_| on_attach.call(()),
                "+"
            }
            textarea {
                class: "message-input",
                placeholder: "Write a message...",
                value: "{text}",
                disabled: disabled,
                oninput: move |evt| text.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && !evt.modifiers().shift() && can_send {
                        evt.prevent_default();
                        let msg = text.read().trim().to_string();
                        text.set(String::new());
                        on_send.call(msg);
                    }
                },
            }
            button {
                class: "send-button",
                disabled: !can_send,
                onclick: move |_| {
                    if can_send {
                        let msg = text.read().trim().to_string();
                        text.set(String::new());
                        on_send.call(msg);
                    }
                },
                "\u{27a4}"
            }
        }
    }
}
