//! Theme for Reception Intake.

mod styles;

pub use styles::GLOBAL_STYLES;
