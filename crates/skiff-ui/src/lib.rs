//! Shared UI components for the Skiff chat client.
//!
//! Provides the HTML preview overlay, markdown rendering for assistant
//! messages, and the detection helpers that decide when a message offers
//! a previewable HTML payload.

pub mod html;
pub mod markdown;
pub mod preview;

pub use html::{extract_html_block, is_html_document, previewable_html};
pub use markdown::render_markdown_to_html;
pub use preview::HtmlPreviewOverlay;

/// Shared CSS containing design tokens and overlay styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
