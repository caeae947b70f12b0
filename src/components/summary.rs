//! Summary and confirmation gate.

use dioxus::prelude::*;

use super::Button;

/// Label of the one-way confirmation button
pub const CONFIRM_LABEL: &str = "Yes. That is the item in question.";

/// Lists the recorded answers and asks for confirmation.
///
/// # Props
///
/// * `lines` - `Q<id>: <answer>` lines in question order
/// * `on_confirm` - Called when the user confirms
#[component]
pub fn SummaryPanel(lines: Vec<String>, on_confirm: EventHandler<()>) -> Element {
    rsx! {
        section { class: "summary",
            h2 { class: "section-header", "Summary:" }
            ul { class: "summary-list",
                for (i, line) in lines.iter().enumerate() {
                    li { key: "{i}", "{line}" }
                }
            }
            Button { onclick: move |_| on_confirm.call(()), "{CONFIRM_LABEL}" }
        }
    }
}
