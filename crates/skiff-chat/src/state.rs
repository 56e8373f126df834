//! Shared chat state using Dioxus signals.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::bridge::{BackendClient, HistoryTurn};

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Role name on the wire.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One conversation entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp_millis: u64,
}

/// Whether a backend round-trip is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatStatus {
    Idle,
    Waiting,
}

/// Shared chat state provided via Dioxus context.
#[derive(Clone, Copy)]
pub struct ChatContext {
    pub client: Signal<Arc<BackendClient>>,
    pub messages: Signal<Vec<ChatMessage>>,
    pub status: Signal<ChatStatus>,
    /// Transport error shown above the compose bar.
    pub error: Signal<Option<String>>,
    /// Local notice line (e.g. upload receipts).
    pub notice: Signal<Option<String>>,
    /// HTML payload currently shown in the preview overlay (None = closed).
    pub preview_html: Signal<Option<String>>,
}

/// Current wall-clock time in milliseconds.
pub fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

/// Convert the conversation so far into wire-format history turns.
pub fn to_history(messages: &[ChatMessage]) -> Vec<HistoryTurn> {
    messages
        .iter()
        .map(|msg| HistoryTurn {
            role: msg.role.as_wire().to_string(),
            content: msg.content.clone(),
        })
        .collect()
}
