//! Error types for the intake session

use thiserror::Error;

use crate::question::QuestionId;

/// Error returned when a session transition is not allowed in the current phase
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// The summary was already confirmed; intake can no longer change
    #[error("Session already confirmed")]
    AlreadyConfirmed,

    /// Every question already has an answer
    #[error("Intake complete: no question left to answer")]
    IntakeComplete,

    /// The choice belongs to a different question than the one being asked
    #[error("Choice for question {got} offered while question {expected} is open")]
    ChoiceMismatch { expected: QuestionId, got: QuestionId },

    /// Confirmation attempted before all questions were answered
    #[error("Intake incomplete: {answered} of {total} questions answered")]
    IntakeIncomplete { answered: usize, total: usize },

    /// Prompt tracking requires a confirmed summary
    #[error("Summary not confirmed")]
    NotConfirmed,

    /// Prompt position outside the question list
    #[error("Prompt {index} out of range (total {total})")]
    PromptOutOfRange { index: usize, total: usize },

    /// Blueprint requested before every prompt was completed
    #[error("Prompts not finished: {completed} of {total} complete")]
    NotFinished { completed: usize, total: usize },

    /// Unrecognized active-highlight mode name
    #[error("Unknown highlight mode: {0} (expected frozen-step, next-pending or off)")]
    UnknownHighlight(String),
}

/// Result type alias using IntakeError
pub type IntakeResult<T> = Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntakeError::IntakeIncomplete {
            answered: 1,
            total: 3,
        };
        assert_eq!(format!("{}", err), "Intake incomplete: 1 of 3 questions answered");
    }

    #[test]
    fn test_mismatch_display_uses_question_ids() {
        let err = IntakeError::ChoiceMismatch {
            expected: QuestionId(2),
            got: QuestionId(3),
        };
        assert_eq!(
            err.to_string(),
            "Choice for question 3 offered while question 2 is open"
        );
    }
}
