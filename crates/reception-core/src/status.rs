//! Status bar cell states and the active-highlight rule.

use std::fmt;
use std::str::FromStr;

use crate::error::IntakeError;

/// Display state of a single status bar cell
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    /// The prompt at this position has been marked complete
    Completed,
    /// Highlighted by the active-highlight rule
    Active,
    /// Neither completed nor highlighted
    #[default]
    Pending,
}

impl CellState {
    /// Returns the CSS class for this state
    pub fn class(&self) -> &'static str {
        match self {
            CellState::Completed => "status-cell completed",
            CellState::Active => "status-cell active",
            CellState::Pending => "status-cell pending",
        }
    }

    /// Accessible label for screen readers
    pub fn label(&self) -> &'static str {
        match self {
            CellState::Completed => "completed",
            CellState::Active => "active",
            CellState::Pending => "pending",
        }
    }
}

/// Which status cell, if any, is highlighted as "active" while prompts are tracked.
///
/// The step cursor stops moving once the summary is confirmed, so the literal
/// comparison (`FrozenStep`) never matches a prompt position in practice. The
/// other modes are opt-in alternatives.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ActiveHighlight {
    /// Cell index equals the step cursor and the summary is confirmed
    #[default]
    FrozenStep,
    /// The lowest-index prompt not yet completed
    NextPending,
    /// Never highlight
    Off,
}

impl ActiveHighlight {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveHighlight::FrozenStep => "frozen-step",
            ActiveHighlight::NextPending => "next-pending",
            ActiveHighlight::Off => "off",
        }
    }
}

impl fmt::Display for ActiveHighlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveHighlight {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frozen-step" => Ok(ActiveHighlight::FrozenStep),
            "next-pending" => Ok(ActiveHighlight::NextPending),
            "off" => Ok(ActiveHighlight::Off),
            other => Err(IntakeError::UnknownHighlight(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_state_classes() {
        assert_eq!(CellState::Completed.class(), "status-cell completed");
        assert_eq!(CellState::Active.class(), "status-cell active");
        assert_eq!(CellState::Pending.class(), "status-cell pending");
    }

    #[test]
    fn cell_state_default_is_pending() {
        assert_eq!(CellState::default(), CellState::Pending);
    }

    #[test]
    fn highlight_parses_and_displays() {
        for mode in [
            ActiveHighlight::FrozenStep,
            ActiveHighlight::NextPending,
            ActiveHighlight::Off,
        ] {
            assert_eq!(mode.to_string().parse::<ActiveHighlight>(), Ok(mode));
        }
        assert_eq!("  Next-Pending ".parse::<ActiveHighlight>(), Ok(ActiveHighlight::NextPending));
    }

    #[test]
    fn highlight_rejects_unknown() {
        let err = "cursor".parse::<ActiveHighlight>().unwrap_err();
        assert!(matches!(err, IntakeError::UnknownHighlight(ref s) if s == "cursor"));
    }

    #[test]
    fn highlight_default_is_literal_rule() {
        assert_eq!(ActiveHighlight::default(), ActiveHighlight::FrozenStep);
    }
}
