//! Fixed intake questions and their closed option sets.
//!
//! Each question's options are a dedicated enum, so an answer can only ever
//! be one of the labels that were offered. [`Choice`] ties an option back to
//! the question it answers.

use std::fmt;

use serde::Serialize;

/// Identifier of an intake question (1-based, as shown in the summary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(pub u8);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// "What type of project are you building?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    ToolUtility,
    Game,
    ExplorerMapper,
    NarrativeSymbolicSpace,
    Marketplace,
    EducationalApp,
    SocialPlatform,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 8] = [
        ProjectType::ToolUtility,
        ProjectType::Game,
        ProjectType::ExplorerMapper,
        ProjectType::NarrativeSymbolicSpace,
        ProjectType::Marketplace,
        ProjectType::EducationalApp,
        ProjectType::SocialPlatform,
        ProjectType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::ToolUtility => "Tool / Utility",
            ProjectType::Game => "Game",
            ProjectType::ExplorerMapper => "Explorer / Mapper",
            ProjectType::NarrativeSymbolicSpace => "Narrative / Symbolic Space",
            ProjectType::Marketplace => "Marketplace",
            ProjectType::EducationalApp => "Educational App",
            ProjectType::SocialPlatform => "Social Platform",
            ProjectType::Other => "Other",
        }
    }
}

/// "What is the core function of your app?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreFunction {
    PerformTask,
    SearchOrDiscover,
    CreateOrModifyContent,
    DeliverExperience,
    AnalyzeOrMeasure,
    Other,
}

impl CoreFunction {
    pub const ALL: [CoreFunction; 6] = [
        CoreFunction::PerformTask,
        CoreFunction::SearchOrDiscover,
        CoreFunction::CreateOrModifyContent,
        CoreFunction::DeliverExperience,
        CoreFunction::AnalyzeOrMeasure,
        CoreFunction::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CoreFunction::PerformTask => "Perform a task",
            CoreFunction::SearchOrDiscover => "Search or discover",
            CoreFunction::CreateOrModifyContent => "Create or modify content",
            CoreFunction::DeliverExperience => "Deliver experience",
            CoreFunction::AnalyzeOrMeasure => "Analyze or measure",
            CoreFunction::Other => "Other",
        }
    }
}

/// "What inputs does your app use?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Text,
    Audio,
    Video,
    FileUpload,
    UserInteraction,
    AiPrompt,
    Other,
}

impl InputKind {
    pub const ALL: [InputKind; 7] = [
        InputKind::Text,
        InputKind::Audio,
        InputKind::Video,
        InputKind::FileUpload,
        InputKind::UserInteraction,
        InputKind::AiPrompt,
        InputKind::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InputKind::Text => "Text",
            InputKind::Audio => "Audio",
            InputKind::Video => "Video",
            InputKind::FileUpload => "File Upload",
            InputKind::UserInteraction => "User Interaction",
            InputKind::AiPrompt => "AI Prompt",
            InputKind::Other => "Other",
        }
    }
}

/// One selectable option, tagged with the question it answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Project(ProjectType),
    Function(CoreFunction),
    Input(InputKind),
}

impl Choice {
    /// The question this option belongs to
    pub fn question_id(&self) -> QuestionId {
        match self {
            Choice::Project(_) => QuestionId(1),
            Choice::Function(_) => QuestionId(2),
            Choice::Input(_) => QuestionId(3),
        }
    }

    /// Button / summary label
    pub fn label(&self) -> &'static str {
        match self {
            Choice::Project(p) => p.label(),
            Choice::Function(f) => f.label(),
            Choice::Input(i) => i.label(),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fixed intake question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    /// Options in display order
    pub options: &'static [Choice],
}

static PROJECT_OPTIONS: [Choice; 8] = [
    Choice::Project(ProjectType::ToolUtility),
    Choice::Project(ProjectType::Game),
    Choice::Project(ProjectType::ExplorerMapper),
    Choice::Project(ProjectType::NarrativeSymbolicSpace),
    Choice::Project(ProjectType::Marketplace),
    Choice::Project(ProjectType::EducationalApp),
    Choice::Project(ProjectType::SocialPlatform),
    Choice::Project(ProjectType::Other),
];

static FUNCTION_OPTIONS: [Choice; 6] = [
    Choice::Function(CoreFunction::PerformTask),
    Choice::Function(CoreFunction::SearchOrDiscover),
    Choice::Function(CoreFunction::CreateOrModifyContent),
    Choice::Function(CoreFunction::DeliverExperience),
    Choice::Function(CoreFunction::AnalyzeOrMeasure),
    Choice::Function(CoreFunction::Other),
];

static INPUT_OPTIONS: [Choice; 7] = [
    Choice::Input(InputKind::Text),
    Choice::Input(InputKind::Audio),
    Choice::Input(InputKind::Video),
    Choice::Input(InputKind::FileUpload),
    Choice::Input(InputKind::UserInteraction),
    Choice::Input(InputKind::AiPrompt),
    Choice::Input(InputKind::Other),
];

/// The intake questionnaire, in the order it is asked
pub static QUESTIONS: [Question; 3] = [
    Question {
        id: QuestionId(1),
        text: "What type of project are you building?",
        options: &PROJECT_OPTIONS,
    },
    Question {
        id: QuestionId(2),
        text: "What is the core function of your app?",
        options: &FUNCTION_OPTIONS,
    },
    Question {
        id: QuestionId(3),
        text: "What inputs does your app use?",
        options: &INPUT_OPTIONS,
    },
];

/// Number of intake questions (and therefore prompts)
pub fn question_count() -> usize {
    QUESTIONS.len()
}

/// Look up a question by its identifier
pub fn question(id: QuestionId) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_ids_are_sequential() {
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(q.id, QuestionId(i as u8 + 1));
        }
    }

    #[test]
    fn options_belong_to_their_question() {
        for q in QUESTIONS.iter() {
            assert!(!q.options.is_empty());
            for choice in q.options {
                assert_eq!(choice.question_id(), q.id);
            }
        }
    }

    #[test]
    fn option_lists_cover_every_variant() {
        assert_eq!(QUESTIONS[0].options.len(), ProjectType::ALL.len());
        assert_eq!(QUESTIONS[1].options.len(), CoreFunction::ALL.len());
        assert_eq!(QUESTIONS[2].options.len(), InputKind::ALL.len());
    }

    #[test]
    fn labels_match_displayed_text() {
        assert_eq!(Choice::Project(ProjectType::ToolUtility).label(), "Tool / Utility");
        assert_eq!(Choice::Function(CoreFunction::PerformTask).label(), "Perform a task");
        assert_eq!(Choice::Input(InputKind::AiPrompt).to_string(), "AI Prompt");
    }

    #[test]
    fn question_lookup() {
        assert_eq!(question(QuestionId(2)).map(|q| q.text), Some("What is the core function of your app?"));
        assert!(question(QuestionId(9)).is_none());
        assert_eq!(question_count(), 3);
    }
}
