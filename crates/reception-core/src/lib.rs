//! Reception Intake Core Library
//!
//! Session state for a three-question intake questionnaire, independent of
//! any UI toolkit.
//!
//! ## Flow
//!
//! - **Intake**: questions are asked one at a time from a closed option list
//! - **Summary**: answers are shown as `Q<id>: <answer>` and must be confirmed
//! - **Tracking**: one prompt per question, each marked complete independently
//! - **Epilogue**: reflection questions and a (placeholder) blueprint export
//!
//! ## Quick Start
//!
//! ```
//! use reception_core::{Choice, CoreFunction, InputKind, Phase, ProjectType, Session};
//!
//! let mut session = Session::new();
//! session.answer(Choice::Project(ProjectType::ToolUtility))?;
//! session.answer(Choice::Function(CoreFunction::PerformTask))?;
//! session.answer(Choice::Input(InputKind::Text))?;
//! assert_eq!(session.phase(), Phase::Summary);
//!
//! session.confirm()?;
//! for i in 0..3 {
//!     session.complete_prompt(i)?;
//! }
//! assert_eq!(session.phase(), Phase::Epilogue);
//! # Ok::<(), reception_core::IntakeError>(())
//! ```

pub mod blueprint;
pub mod error;
pub mod question;
pub mod session;
pub mod status;

// Re-exports
pub use blueprint::{Blueprint, BlueprintAnswer, BlueprintExporter, InertExporter};
pub use error::{IntakeError, IntakeResult};
pub use question::{
    question, question_count, Choice, CoreFunction, InputKind, ProjectType, Question, QuestionId,
    QUESTIONS,
};
pub use session::{Phase, Prompt, Session};
pub use status::{ActiveHighlight, CellState};
