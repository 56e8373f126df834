//! Entry point for the Skiff chat client.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

mod bridge;
mod components;
mod state;

const CHAT_CSS: &str = include_str!("style.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("skiff_chat=info")
        .init();

    tracing::info!("Starting Skiff");

    let window = WindowBuilder::new()
        .with_title("Skiff")
        .with_inner_size(LogicalSize::new(900.0, 640.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(window).with_custom_head(format!(
                r#"<style>{}</style><style>{}</style>"#,
                skiff_ui::SHARED_CSS,
                CHAT_CSS,
            )),
        )
        .launch(components::app::App);
}
