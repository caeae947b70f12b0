use dioxus::prelude::*;
use reception_core::{BlueprintExporter, Choice, InertExporter, Phase, Session};

use crate::components::{Epilogue, IntakeCard, PromptTracker, SummaryPanel};
use crate::context::get_app_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the intake session for the lifetime of the window. Every view is a
/// function of that one signal; handlers mutate it only through the
/// session's transition methods.
#[component]
pub fn App() -> Element {
    use_context_provider(get_app_config);

    let mut session = use_signal(Session::new);

    let on_select = move |choice: Choice| {
        if let Err(e) = session.write().answer(choice) {
            tracing::warn!("Ignoring answer: {}", e);
        }
    };

    let on_confirm = move |_: ()| {
        if let Err(e) = session.write().confirm() {
            tracing::warn!("Ignoring confirmation: {}", e);
        }
    };

    let on_complete = move |index: usize| {
        if let Err(e) = session.write().complete_prompt(index) {
            tracing::warn!("Ignoring completion of prompt {}: {}", index + 1, e);
        }
    };

    let on_export = move |_: ()| {
        let result = session
            .read()
            .blueprint()
            .and_then(|blueprint| InertExporter.export(&blueprint));
        if let Err(e) = result {
            tracing::warn!("Export failed: {}", e);
        }
    };

    let current = session();

    let body = match current.phase() {
        Phase::Intake { .. } => match current.current_question() {
            Some(question) => rsx! {
                IntakeCard { question: question, on_select: on_select }
            },
            None => rsx! {},
        },
        Phase::Summary => rsx! {
            SummaryPanel { lines: current.summary_lines(), on_confirm: on_confirm }
        },
        Phase::Tracking | Phase::Epilogue => rsx! {
            PromptTracker { session: current.clone(), on_complete: on_complete }
            if current.epilogue_visible() {
                Epilogue { on_export: on_export }
            }
        },
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "reception",
            h1 { class: "page-title", "Reception Intake" }
            {body}
        }
    }
}
