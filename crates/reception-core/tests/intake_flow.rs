//! End-to-end intake scenarios
//!
//! Drives a session through the same sequence of clicks the desktop app
//! produces and checks what each view would show.

use reception_core::{
    ActiveHighlight, CellState, Choice, CoreFunction, InputKind, IntakeError, Phase, ProjectType,
    Session, QUESTIONS,
};

fn answer_defaults(session: &mut Session) {
    session.answer(Choice::Project(ProjectType::ToolUtility)).unwrap();
    session.answer(Choice::Function(CoreFunction::PerformTask)).unwrap();
    session.answer(Choice::Input(InputKind::Text)).unwrap();
}

// ============================================================================
// Intake and Summary
// ============================================================================

#[test]
fn test_summary_lists_answers_in_order() {
    let mut session = Session::new();
    answer_defaults(&mut session);

    assert_eq!(session.phase(), Phase::Summary);
    assert_eq!(
        session.summary_lines(),
        vec!["Q1: Tool / Utility", "Q2: Perform a task", "Q3: Text"]
    );
}

#[test]
fn test_step_tracks_answer_count() {
    let mut session = Session::new();
    for (i, question) in QUESTIONS.iter().enumerate() {
        assert_eq!(session.phase(), Phase::Intake { index: i });
        assert_eq!(session.current_question(), Some(question));

        // always pick the last option offered
        let choice = *question.options.last().unwrap();
        session.answer(choice).unwrap();

        assert_eq!(session.step(), i + 1);
        assert_eq!(session.answer_count(), i + 1);
    }
    assert!(session.current_question().is_none());
}

#[test]
fn test_confirm_only_from_summary() {
    let mut session = Session::new();
    assert!(matches!(
        session.confirm(),
        Err(IntakeError::IntakeIncomplete { answered: 0, total: 3 })
    ));

    session.answer(Choice::Project(ProjectType::Game)).unwrap();
    session.answer(Choice::Function(CoreFunction::Other)).unwrap();
    assert!(session.confirm().is_err());

    session.answer(Choice::Input(InputKind::Video)).unwrap();
    assert!(session.confirm().is_ok());
}

// ============================================================================
// Prompt Tracking and Epilogue
// ============================================================================

#[test]
fn test_complete_all_prompts_reveals_epilogue() {
    for order in [[0, 1, 2], [2, 0, 1], [1, 2, 0]] {
        let mut session = Session::new();
        answer_defaults(&mut session);
        session.confirm().unwrap();

        for (n, index) in order.iter().enumerate() {
            assert!(!session.epilogue_visible());
            assert!(session.complete_prompt(*index).unwrap());
            assert_eq!(session.completed().len(), n + 1);
        }

        assert!(session.epilogue_visible());
        assert_eq!(session.phase(), Phase::Epilogue);

        let mut completed = session.completed().to_vec();
        completed.sort_unstable();
        assert_eq!(completed, vec![0, 1, 2]);

        // second completion of prompt 0 is a no-op
        assert!(!session.complete_prompt(0).unwrap());
        assert_eq!(session.completed().len(), 3);
        assert_eq!(session.phase(), Phase::Epilogue);
    }
}

#[test]
fn test_prompt_cards_follow_question_order() {
    let mut session = Session::new();
    answer_defaults(&mut session);
    session.confirm().unwrap();

    let texts: Vec<String> = session.prompts().into_iter().map(|p| p.text).collect();
    assert_eq!(
        texts,
        vec![
            "Build task based on: \"Tool / Utility\"",
            "Build task based on: \"Perform a task\"",
            "Build task based on: \"Text\"",
        ]
    );
}

#[test]
fn test_completed_cell_stable_across_renders() {
    let mut session = Session::new();
    answer_defaults(&mut session);
    session.confirm().unwrap();
    session.complete_prompt(1).unwrap();

    for highlight in [
        ActiveHighlight::FrozenStep,
        ActiveHighlight::NextPending,
        ActiveHighlight::Off,
    ] {
        for _ in 0..3 {
            assert_eq!(session.status_cells(highlight)[1], CellState::Completed);
        }
    }
}

#[test]
fn test_blueprint_matches_session() {
    let mut session = Session::new();
    answer_defaults(&mut session);
    session.confirm().unwrap();
    for i in [2, 1, 0] {
        session.complete_prompt(i).unwrap();
    }

    let blueprint = session.blueprint().unwrap();
    let answers: Vec<&str> = blueprint.answers.iter().map(|a| a.answer).collect();
    assert_eq!(answers, vec!["Tool / Utility", "Perform a task", "Text"]);
    assert_eq!(blueprint.completion_order, vec![2, 1, 0]);
}
