//! Intake question card.
//!
//! Shows the open question and one button per option. The option list is the
//! question's closed set, so every click is a valid answer.

use dioxus::prelude::*;
use reception_core::{Choice, Question};

use super::{Button, ButtonVariant};

/// Card for the question currently being asked.
///
/// # Props
///
/// * `question` - The open question
/// * `on_select` - Called with the chosen option
#[component]
pub fn IntakeCard(question: &'static Question, on_select: EventHandler<Choice>) -> Element {
    rsx! {
        section { class: "card intake-card",
            p { class: "question-text", "{question.text}" }
            div { class: "option-list",
                for (i, choice) in question.options.iter().copied().enumerate() {
                    Button {
                        key: "{i}",
                        variant: ButtonVariant::Option,
                        onclick: move |_| on_select.call(choice),
                        "{choice}"
                    }
                }
            }
        }
    }
}
