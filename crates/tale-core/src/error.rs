use crate::room::RoomId;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur when building a story graph.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// A room with the same id already exists in the graph.
    #[error("duplicate room id: \"{0}\"")]
    DuplicateRoom(RoomId),
}
