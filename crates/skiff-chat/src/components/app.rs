//! Host shell — composes the chat view with fixed backend configuration.

use dioxus::prelude::*;

/// Backend endpoint the client talks to.
const API_URL: &str = "http://localhost:8000";

/// Persona identifier sent with every chat request.
const SYSTEM_PROMPT: &str = "default";

/// Root application component. Pure composition: hands the conversational
/// surface its configuration and nothing else.
#[component]
pub fn App() -> Element {
    rsx! {
        super::chat_view::ChatView {
            api_url: API_URL.to_string(),
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }
}
