//! Intake session state machine.
//!
//! A [`Session`] owns the four pieces of state the flow needs: the step
//! cursor, the recorded answers, the agreement flag and the completed prompt
//! positions. Fields are private; the only mutations are [`Session::answer`],
//! [`Session::confirm`] and [`Session::complete_prompt`], each of which checks
//! the current [`Phase`] before touching anything.
//!
//! ```text
//! Intake[0] --answer--> Intake[1] --answer--> ... --answer--> Summary
//! Summary --confirm--> Tracking --complete x N--> Epilogue
//! ```

use std::collections::BTreeMap;

use crate::blueprint::{Blueprint, BlueprintAnswer};
use crate::error::{IntakeError, IntakeResult};
use crate::question::{question_count, Choice, Question, QuestionId, QUESTIONS};
use crate::status::{ActiveHighlight, CellState};

/// Which view the session is currently in
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Asking the question at `index`
    Intake { index: usize },
    /// All questions answered, awaiting confirmation
    Summary,
    /// Confirmed, some prompts still open
    Tracking,
    /// Every prompt complete (terminal)
    Epilogue,
}

/// A derived prompt card, one per question
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    /// 0-based position, used for completion
    pub index: usize,
    /// 1-based position, used for display
    pub number: usize,
    /// `Build task based on: "<answer>"`
    pub text: String,
    pub completed: bool,
}

/// In-memory state of one intake session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    step: usize,
    answers: BTreeMap<QuestionId, Choice>,
    agreed: bool,
    completed: Vec<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view, derived from the state
    pub fn phase(&self) -> Phase {
        if !self.agreed {
            if self.step < question_count() {
                Phase::Intake { index: self.step }
            } else {
                Phase::Summary
            }
        } else if self.completed.len() == question_count() {
            Phase::Epilogue
        } else {
            Phase::Tracking
        }
    }

    /// Step cursor, always in `0..=question_count()`
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_agreed(&self) -> bool {
        self.agreed
    }

    /// The question awaiting an answer, if intake is still running
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.agreed {
            return None;
        }
        QUESTIONS.get(self.step)
    }

    /// Recorded answers in question order
    pub fn answers(&self) -> impl Iterator<Item = (QuestionId, Choice)> + '_ {
        self.answers.iter().map(|(id, choice)| (*id, *choice))
    }

    pub fn answer_for(&self, id: QuestionId) -> Option<Choice> {
        self.answers.get(&id).copied()
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Completed prompt positions, in the order they were completed
    pub fn completed(&self) -> &[usize] {
        &self.completed
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Whether the final reflection questions and export action are shown
    pub fn epilogue_visible(&self) -> bool {
        self.completed.len() == question_count()
    }

    /// Record an answer for the current question and advance the cursor.
    pub fn answer(&mut self, choice: Choice) -> IntakeResult<()> {
        if self.agreed {
            return Err(IntakeError::AlreadyConfirmed);
        }
        let question = self.current_question().ok_or(IntakeError::IntakeComplete)?;
        if choice.question_id() != question.id {
            return Err(IntakeError::ChoiceMismatch {
                expected: question.id,
                got: choice.question_id(),
            });
        }

        self.answers.insert(question.id, choice);
        self.step += 1;
        tracing::debug!(question = %question.id, answer = %choice, step = self.step, "Answer recorded");
        Ok(())
    }

    /// Confirm the summary. One-way: intake cannot be revisited afterwards.
    pub fn confirm(&mut self) -> IntakeResult<()> {
        if self.agreed {
            return Err(IntakeError::AlreadyConfirmed);
        }
        if self.step < question_count() {
            return Err(IntakeError::IntakeIncomplete {
                answered: self.answers.len(),
                total: question_count(),
            });
        }

        self.agreed = true;
        tracing::info!(answers = self.answers.len(), "Summary confirmed");
        Ok(())
    }

    /// Mark the prompt at `index` complete.
    ///
    /// Returns `Ok(false)` without changing anything if it was already complete.
    pub fn complete_prompt(&mut self, index: usize) -> IntakeResult<bool> {
        if !self.agreed {
            return Err(IntakeError::NotConfirmed);
        }
        if index >= question_count() {
            return Err(IntakeError::PromptOutOfRange {
                index,
                total: question_count(),
            });
        }
        if self.completed.contains(&index) {
            return Ok(false);
        }

        self.completed.push(index);
        tracing::info!(
            prompt = index + 1,
            completed = self.completed.len(),
            total = question_count(),
            "Prompt completed"
        );
        Ok(true)
    }

    /// `Q<id>: <answer>` for every recorded answer
    pub fn summary_lines(&self) -> Vec<String> {
        self.answers()
            .map(|(id, choice)| format!("Q{}: {}", id, choice))
            .collect()
    }

    /// Task phrase for the prompt at `index`, if its question was answered
    pub fn prompt_text(&self, index: usize) -> Option<String> {
        let question = QUESTIONS.get(index)?;
        self.answer_for(question.id)
            .map(|choice| format!("Build task based on: \"{}\"", choice))
    }

    /// One prompt card per question, in question order
    pub fn prompts(&self) -> Vec<Prompt> {
        (0..question_count())
            .map(|index| Prompt {
                index,
                number: index + 1,
                text: self
                    .prompt_text(index)
                    .unwrap_or_else(|| "Build task based on: \"\"".to_string()),
                completed: self.is_completed(index),
            })
            .collect()
    }

    /// Status bar cells. Completed always wins over the highlight rule.
    pub fn status_cells(&self, highlight: ActiveHighlight) -> Vec<CellState> {
        let next_pending = (0..question_count()).find(|i| !self.is_completed(*i));

        (0..question_count())
            .map(|i| {
                if self.is_completed(i) {
                    return CellState::Completed;
                }
                let active = match highlight {
                    ActiveHighlight::FrozenStep => i == self.step && self.agreed,
                    ActiveHighlight::NextPending => self.agreed && next_pending == Some(i),
                    ActiveHighlight::Off => false,
                };
                if active {
                    CellState::Active
                } else {
                    CellState::Pending
                }
            })
            .collect()
    }

    /// Snapshot handed to a [`crate::BlueprintExporter`]. Only available once
    /// every prompt is complete.
    pub fn blueprint(&self) -> IntakeResult<Blueprint> {
        if !self.agreed || !self.epilogue_visible() {
            return Err(IntakeError::NotFinished {
                completed: self.completed.len(),
                total: question_count(),
            });
        }

        let answers = QUESTIONS
            .iter()
            .filter_map(|q| {
                self.answer_for(q.id).map(|choice| BlueprintAnswer {
                    question_id: q.id,
                    question: q.text,
                    answer: choice.label(),
                })
            })
            .collect();

        Ok(Blueprint {
            answers,
            completion_order: self.completed.clone(),
        })
    }
}
