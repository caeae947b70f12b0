//! UI Components for Reception Intake.
//!
//! One component per view of the intake flow, plus the shared button.

mod button;
mod epilogue;
mod intake_card;
mod summary;
mod tracker;

pub use button::{Button, ButtonVariant};
pub use epilogue::Epilogue;
pub use intake_card::IntakeCard;
pub use summary::SummaryPanel;
pub use tracker::PromptTracker;
