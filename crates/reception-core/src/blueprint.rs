//! Blueprint payload and the export seam.
//!
//! Exporting is a placeholder: the desktop app wires the "Export Blueprint"
//! button to [`InertExporter`], which accepts the payload and writes nothing.

use serde::Serialize;

use crate::error::IntakeResult;
use crate::question::QuestionId;

/// One answered question as it appears in a blueprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlueprintAnswer {
    pub question_id: QuestionId,
    pub question: &'static str,
    pub answer: &'static str,
}

/// Summary of a finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blueprint {
    /// Answers in question order
    pub answers: Vec<BlueprintAnswer>,
    /// Prompt positions in the order they were marked complete
    pub completion_order: Vec<usize>,
}

/// Destination for a finished blueprint
pub trait BlueprintExporter {
    fn export(&self, blueprint: &Blueprint) -> IntakeResult<()>;
}

/// Exporter with no output. Logs the request and returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InertExporter;

impl BlueprintExporter for InertExporter {
    fn export(&self, blueprint: &Blueprint) -> IntakeResult<()> {
        tracing::debug!(
            answers = blueprint.answers.len(),
            "Export requested; no exporter configured"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Blueprint {
        Blueprint {
            answers: vec![BlueprintAnswer {
                question_id: QuestionId(1),
                question: "What type of project are you building?",
                answer: "Game",
            }],
            completion_order: vec![0],
        }
    }

    #[test]
    fn inert_exporter_accepts_anything() {
        assert!(InertExporter.export(&sample()).is_ok());
    }

    #[test]
    fn blueprint_serializes_question_id_as_number() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["answers"][0]["question_id"], 1);
        assert_eq!(json["answers"][0]["answer"], "Game");
        assert_eq!(json["completion_order"], serde_json::json!([0]));
    }
}
