//! Skiff — minimal chat client with an isolated HTML preview overlay.
//!
//! Re-exports components, state, and the backend bridge for embedding in
//! host apps.

pub mod bridge;
pub mod components;
pub mod state;

/// Chat-specific CSS for embedding in host apps.
pub const CHAT_CSS: &str = include_str!("style.css");
