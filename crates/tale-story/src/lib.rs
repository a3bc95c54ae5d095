//! Story-file parser and bookmark codec for Taleweaver.
//!
//! Two line-oriented file formats share a dispatch line: a story file starts
//! with `#!STORY` and describes rooms and transitions; a bookmark file starts
//! with `#!BOOKMARK` and names a story file plus the room to resume from.
//! [`load`] recognizes either and always produces a fully parsed
//! [`tale_core::StoryGraph`] together with the room to start in.

/// Bookmark codec and magic-line file dispatch.
pub mod bookmark;
/// Terminal rendering of parse errors.
pub mod diagnostics;
/// The line-oriented story parser.
pub mod parser;

pub use bookmark::{LoadError, LoadedStory, MAGIC_BOOKMARK, MAGIC_STORY, load, save_bookmark};
pub use diagnostics::render_parse_error;
pub use parser::{IncompleteStory, ParseError, parse_story};
