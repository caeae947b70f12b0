//! Final reflection questions shown once every prompt is complete.

use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Static reflection questions (no answers are captured)
pub const REFLECTION_QUESTIONS: [&str; 2] = [
    "Is this the app you envisioned?",
    "Are there any improvements you can imagine?",
];

/// Reflection questions and the blueprint export action.
#[component]
pub fn Epilogue(on_export: EventHandler<()>) -> Element {
    rsx! {
        section { class: "epilogue",
            h3 { class: "section-header", "Final Questions" }
            for question in REFLECTION_QUESTIONS {
                p { key: "{question}", class: "body-text", "{question}" }
            }
            Button {
                variant: ButtonVariant::Ghost,
                class: "export".to_string(),
                onclick: move |_| on_export.call(()),
                "Export Blueprint"
            }
        }
    }
}
