//! App configuration context for Reception Intake.
//!
//! The root component provides [`AppConfig`] once; children read it with
//! [`use_app_config`].

use dioxus::prelude::*;
use reception_core::ActiveHighlight;

/// Settings chosen on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Which status cell is shown as active during prompt tracking
    pub active_highlight: ActiveHighlight,
}

/// Get the app configuration from the command line.
pub fn get_app_config() -> AppConfig {
    crate::get_app_config()
}

/// Hook to access the app configuration from context.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}
