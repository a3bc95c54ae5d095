use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transition::Transition;

/// Identifier for a room, taken verbatim (trimmed) from the story file.
///
/// Room ids are author-chosen strings, not generated — `"1"`, `"cellar"`,
/// and `"the long hall"` are all valid. Ids may not contain `?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    /// Create a room id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A node in the story graph.
///
/// A room owns its outgoing transitions directly, so the graph cannot get
/// into a state where rooms and transition lists disagree in length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier within the story.
    pub id: RoomId,
    /// Display title, from the text after the `:` on the room's `R` line.
    pub title: String,
    /// Free-text description; multi-line, joined with `\n`.
    pub description: String,
    /// Outgoing transitions in story-file order.
    pub transitions: Vec<Transition>,
}

impl Room {
    /// Create a room with an empty description and no transitions.
    pub fn new(id: RoomId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            transitions: Vec::new(),
        }
    }

    /// Iterate over the choice transitions that carry no weight — the ones
    /// offered for manual selection.
    pub fn manual_choices(&self) -> impl Iterator<Item = &Transition> {
        self.transitions
            .iter()
            .filter(|t| matches!(t, Transition::Choice { weight: None, .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_id_display() {
        let id = RoomId::new("cellar");
        assert_eq!(id.to_string(), "cellar");
    }

    #[test]
    fn new_room_is_bare() {
        let room = Room::new(RoomId::new("1"), "Room 1");
        assert_eq!(room.description, "");
        assert!(room.transitions.is_empty());
    }

    #[test]
    fn manual_choices_skip_weighted() {
        let mut room = Room::new(RoomId::new("1"), "Room 1");
        room.transitions.push(Transition::choice("Left", "2", None));
        room.transitions
            .push(Transition::choice("Right", "3", Some(4)));
        room.transitions.push(Transition::choice("Back", "4", None));

        let manual: Vec<_> = room.manual_choices().collect();
        assert_eq!(manual.len(), 2);
    }
}
