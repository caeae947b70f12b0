#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use reception_core::ActiveHighlight;
use tracing_subscriber::EnvFilter;

use crate::context::AppConfig;

/// Global app configuration, set from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app configuration (set from command line or default)
pub fn get_app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// Reception Intake - project questionnaire and prompt tracker
#[derive(Parser, Debug)]
#[command(name = "reception-desktop")]
#[command(about = "Reception Intake - guided project questionnaire")]
struct Args {
    /// Status bar highlight rule while prompts are tracked
    /// (frozen-step, next-pending, off)
    #[arg(long, default_value_t = ActiveHighlight::FrozenStep)]
    active_highlight: ActiveHighlight,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 700.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Window title
    #[arg(long, default_value = "Reception Intake")]
    title: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let _ = APP_CONFIG.set(AppConfig {
        active_highlight: args.active_highlight,
    });

    tracing::info!(
        highlight = %args.active_highlight,
        "Starting '{}' ({}x{})",
        args.title,
        args.width,
        args.height
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
