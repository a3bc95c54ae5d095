//! Navigation engine for Taleweaver.
//!
//! Walks a [`tale_core::StoryGraph`]: detects terminal rooms, performs
//! weighted-random transition selection over a caller-seeded RNG, and tracks
//! one playthrough's state from its starting room to a success or failure
//! outcome.

/// Error types for navigation.
pub mod error;
/// Terminal detection and weighted-random selection.
pub mod select;
/// Playthrough session state machine.
pub mod session;

pub use error::{EngineError, EngineResult};
pub use select::{is_terminal, terminal_outcome, weighted_select};
pub use session::{Advance, PlayState, Playthrough};
