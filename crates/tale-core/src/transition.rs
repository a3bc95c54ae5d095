use std::fmt;

use serde::{Deserialize, Serialize};

use crate::room::RoomId;

/// How a story ends: the outcome carried by a terminal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The adventure was completed.
    Success,
    /// The adventure ended in defeat.
    Failure,
}

impl Outcome {
    /// The marker that denotes this outcome in a story file.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Success => "=)",
            Self::Failure => "=(",
        }
    }

    /// Recognize a terminal marker line. Returns `None` for anything that is
    /// not exactly `=)` or `=(`.
    pub fn from_marker(line: &str) -> Option<Self> {
        match line {
            "=)" => Some(Self::Success),
            "=(" => Some(Self::Failure),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// A directed edge out of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Ends the story with the given outcome. Must be the room's sole
    /// transition.
    Terminal(Outcome),
    /// Moves to another room, either by manual choice (no weight) or by
    /// weighted random selection.
    Choice {
        /// Text shown to the player for manual choices.
        description: String,
        /// Destination room id. Resolved lazily, at navigation time.
        target: RoomId,
        /// Selection weight; `None` means the transition is a manual choice.
        weight: Option<u32>,
    },
}

impl Transition {
    /// Convenience constructor for a choice transition.
    pub fn choice(description: impl Into<String>, target: impl Into<RoomId>, weight: Option<u32>) -> Self {
        Self::Choice {
            description: description.into(),
            target: target.into(),
            weight,
        }
    }

    /// Whether this transition ends the story.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }

    /// The selection weight, if this is a weighted choice.
    pub fn weight(&self) -> Option<u32> {
        match self {
            Self::Choice { weight, .. } => *weight,
            Self::Terminal(_) => None,
        }
    }

    /// The destination room id, if this is a choice.
    pub fn target(&self) -> Option<&RoomId> {
        match self {
            Self::Choice { target, .. } => Some(target),
            Self::Terminal(_) => None,
        }
    }

    /// The display text, if this is a choice.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Choice { description, .. } => Some(description),
            Self::Terminal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_round_trip() {
        assert_eq!(Outcome::from_marker("=)"), Some(Outcome::Success));
        assert_eq!(Outcome::from_marker("=("), Some(Outcome::Failure));
        assert_eq!(Outcome::Success.marker(), "=)");
        assert_eq!(Outcome::Failure.marker(), "=(");
    }

    #[test]
    fn marker_must_match_exactly() {
        assert_eq!(Outcome::from_marker("=) "), None);
        assert_eq!(Outcome::from_marker("=-("), None);
        assert_eq!(Outcome::from_marker(""), None);
    }

    #[test]
    fn terminal_has_no_target_or_weight() {
        let t = Transition::Terminal(Outcome::Success);
        assert!(t.is_terminal());
        assert_eq!(t.weight(), None);
        assert_eq!(t.target(), None);
    }

    #[test]
    fn choice_accessors() {
        let t = Transition::choice("Go north", "2", Some(3));
        assert!(!t.is_terminal());
        assert_eq!(t.weight(), Some(3));
        assert_eq!(t.target(), Some(&RoomId::new("2")));
    }
}
