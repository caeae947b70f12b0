//! Prompt tracking view.
//!
//! ## Components
//!
//! - [`StatusBar`] - One cell per prompt, colored completed / active / pending
//! - [`PromptCard`] - A single prompt with its "Mark Complete" action
//! - [`PromptTracker`] - Heading, status bar and every prompt card

use dioxus::prelude::*;
use reception_core::{Prompt, Session};

use super::Button;
use crate::context::use_app_config;

/// Status bar for the prompts of `session`.
///
/// The active-highlight rule comes from the app configuration.
#[component]
pub fn StatusBar(session: Session) -> Element {
    let highlight = use_app_config().active_highlight;
    let cells: Vec<(usize, &'static str, String)> = session
        .status_cells(highlight)
        .into_iter()
        .enumerate()
        .map(|(i, cell)| (i, cell.class(), format!("Prompt {} {}", i + 1, cell.label())))
        .collect();

    rsx! {
        div { class: "status-bar",
            for (i, class, label) in cells {
                div {
                    key: "{i}",
                    class: "{class}",
                    role: "img",
                    "aria-label": "{label}",
                }
            }
        }
    }
}

/// Card for one derived prompt.
///
/// # Props
///
/// * `prompt` - The prompt to display
/// * `on_complete` - Called with the prompt's index; the button is disabled
///   once the prompt is complete
#[component]
pub fn PromptCard(prompt: Prompt, on_complete: EventHandler<usize>) -> Element {
    let index = prompt.index;
    let card_class = prompt_card_class(prompt.completed);

    rsx! {
        div { class: "{card_class}",
            div {
                p { class: "prompt-title", "Prompt {prompt.number}" }
                p { class: "prompt-text", "{prompt.text}" }
            }
            Button {
                disabled: prompt.completed,
                onclick: move |_| on_complete.call(index),
                "Mark Complete"
            }
        }
    }
}

/// Prompt execution view shown after the summary is confirmed.
#[component]
pub fn PromptTracker(session: Session, on_complete: EventHandler<usize>) -> Element {
    let prompts = session.prompts();

    rsx! {
        section { class: "prompt-tracker",
            h2 { class: "section-header", "Prompt Execution" }
            StatusBar { session: session.clone() }
            for prompt in prompts {
                PromptCard {
                    key: "{prompt.index}",
                    prompt: prompt.clone(),
                    on_complete: on_complete,
                }
            }
        }
    }
}

fn prompt_card_class(completed: bool) -> &'static str {
    if completed {
        "card prompt-card completed"
    } else {
        "card prompt-card"
    }
}
