//! Bookmark codec and magic-line file dispatch.
//!
//! Both file formats open with a magic line. A story file carries the story
//! itself; a bookmark file carries a story path and a room id:
//!
//! ```text
//! #!BOOKMARK
//! goldilocks.story
//! 7
//! ```
//!
//! [`load`] reads the first line and dispatches: story files go to the
//! parser, bookmark files re-enter [`load`] on the story path they name and
//! then override the starting room.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tale_core::{RoomId, StoryGraph};

use crate::parser::{self, ParseError};

/// First line of a story file.
pub const MAGIC_STORY: &str = "#!STORY";

/// First line of a bookmark file.
pub const MAGIC_BOOKMARK: &str = "#!BOOKMARK";

/// Bookmarks may point at other bookmarks; chains longer than this (or a
/// bookmark that points at itself) are rejected.
const MAX_BOOKMARK_DEPTH: usize = 8;

/// A fully loaded story: the graph, the room to start in, and the path of
/// the story file itself (which a later bookmark should reference).
#[derive(Debug, Clone)]
pub struct LoadedStory {
    /// The parsed story graph.
    pub graph: StoryGraph,
    /// The room to start navigation in. The graph's first room for a story
    /// file; the bookmarked room for a bookmark file.
    pub current: RoomId,
    /// Path of the story file that produced the graph.
    pub story_path: PathBuf,
}

/// Errors from loading a story or bookmark file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("error reading file: {}", path.display())]
    Io {
        /// The unreadable path.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The file is empty; no first line to dispatch on.
    #[error("unable to read first line from file: {}", path.display())]
    UnreadableFirstLine {
        /// The offending file.
        path: PathBuf,
    },

    /// The first line matches neither magic marker.
    #[error("first line \"{value}\" does not correspond to a known format")]
    UnrecognizedMagic {
        /// The trimmed first line as read.
        value: String,
    },

    /// A bookmark file ended before its story path or room id line.
    #[error("bookmark file is truncated: {}", path.display())]
    TruncatedBookmark {
        /// The offending file.
        path: PathBuf,
    },

    /// A chain of bookmarks pointing at bookmarks exceeded the depth limit.
    #[error("bookmark chain too deep at: {}", path.display())]
    BookmarkChainTooDeep {
        /// The bookmark at which the limit was hit.
        path: PathBuf,
    },

    /// The dispatched story file failed to parse. The path names the story
    /// file itself, which may sit behind a chain of bookmarks.
    #[error("error parsing {}: {source}", path.display())]
    Parse {
        /// The story file that failed.
        path: PathBuf,
        /// The parse failure.
        source: ParseError,
    },
}

/// Save the current position to a bookmark file, overwriting any existing
/// file at `path`.
pub fn save_bookmark(
    path: impl AsRef<Path>,
    story_path: &Path,
    room: &RoomId,
) -> io::Result<()> {
    let content = format!("{MAGIC_BOOKMARK}\n{}\n{room}\n", story_path.display());
    fs::write(path, content)
}

/// Load a story from either a story file or a bookmark file, dispatching on
/// the magic first line.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedStory, LoadError> {
    load_at_depth(path.as_ref(), 0)
}

fn load_at_depth(path: &Path, depth: usize) -> Result<LoadedStory, LoadError> {
    if depth > MAX_BOOKMARK_DEPTH {
        return Err(LoadError::BookmarkChainTooDeep {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut lines = content.lines();

    let Some(first) = lines.next() else {
        return Err(LoadError::UnreadableFirstLine {
            path: path.to_path_buf(),
        });
    };

    match first.trim() {
        MAGIC_STORY => {
            let graph = parser::parse_story(lines).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            let Some(start) = graph.start() else {
                return Err(LoadError::Parse {
                    path: path.to_path_buf(),
                    source: parser::IncompleteStory::NoRooms.into(),
                });
            };
            let current = start.clone();
            Ok(LoadedStory {
                graph,
                current,
                story_path: path.to_path_buf(),
            })
        }
        MAGIC_BOOKMARK => {
            let (Some(story_line), Some(room_line)) = (lines.next(), lines.next()) else {
                return Err(LoadError::TruncatedBookmark {
                    path: path.to_path_buf(),
                });
            };

            let loaded = load_at_depth(Path::new(story_line.trim()), depth + 1)?;
            Ok(LoadedStory {
                current: RoomId::new(room_line.trim()),
                ..loaded
            })
        }
        other => Err(LoadError::UnrecognizedMagic {
            value: other.to_string(),
        }),
    }
}
