//! Entry point for the gazetteer desktop app.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

mod components;
mod state;
mod toast;

const APP_CSS: &str = include_str!("style.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("gazetteer_app=info,gazetteer_api=info")
        .init();

    tracing::info!("Starting Gazetteer");

    let window = WindowBuilder::new()
        .with_title("Gazetteer")
        .with_inner_size(LogicalSize::new(900.0, 600.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(window)
                .with_custom_head(format!(r#"<style>{}</style>"#, APP_CSS)),
        )
        .launch(components::app::App);
}
