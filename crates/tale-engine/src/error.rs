use tale_core::RoomId;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while navigating a story.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A transition pointed at a room id with no match in the graph.
    /// Targets resolve lazily, so a dangling edge only surfaces when the
    /// playthrough actually reaches it.
    #[error("no room with id \"{0}\" exists in this story")]
    UnknownRoom(RoomId),

    /// A manual choice index was out of range for the current room.
    #[error("invalid choice: {0}")]
    InvalidChoice(usize),

    /// The playthrough has already reached an outcome.
    #[error("the playthrough has already finished")]
    Finished,
}
