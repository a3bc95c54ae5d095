//! Core types for Taleweaver: rooms, transitions, and the story graph.
//!
//! This crate defines the data model that the story-file parser produces. It
//! is independent of the parser — you can construct a [`StoryGraph`]
//! programmatically or deserialize one from JSON.

/// Error types used throughout the crate.
pub mod error;
/// The story graph that owns all rooms.
pub mod graph;
/// Room types and identifiers.
pub mod room;
/// Transitions out of a room: terminal outcomes and choices.
pub mod transition;

/// Re-export error types.
pub use error::{StoryError, StoryResult};
/// Re-export the story graph.
pub use graph::StoryGraph;
/// Re-export room types.
pub use room::{Room, RoomId};
/// Re-export transition types.
pub use transition::{Outcome, Transition};
