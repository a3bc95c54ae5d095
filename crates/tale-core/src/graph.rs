use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};
use crate::room::{Room, RoomId};

/// The story graph. Owns all rooms in story-file order.
///
/// Built once per parse and read-only afterward; a new story load always
/// produces a fresh graph. The room at index 0 is the story's starting room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryGraph {
    rooms: Vec<Room>,
}

impl StoryGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a room, preserving insertion order. Fails if a room with the
    /// same id already exists.
    pub fn push(&mut self, room: Room) -> StoryResult<()> {
        if self.contains(&room.id) {
            return Err(StoryError::DuplicateRoom(room.id.clone()));
        }
        self.rooms.push(room);
        Ok(())
    }

    /// Look up a room by id, scanning in insertion order.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    /// Whether a room with the given id exists.
    pub fn contains(&self, id: &RoomId) -> bool {
        self.rooms.iter().any(|r| &r.id == id)
    }

    /// The starting room id: the first room parsed, if any.
    pub fn start(&self) -> Option<&RoomId> {
        self.rooms.first().map(|r| &r.id)
    }

    /// All rooms in story-file order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the graph has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
