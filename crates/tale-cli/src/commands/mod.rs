//! Subcommand implementations.

pub mod check;
pub mod export;
pub mod play;
pub mod rooms;

use std::path::Path;

use tale_story::{LoadError, LoadedStory};

/// Load a story or bookmark file, rendering parse diagnostics to stderr.
fn load_reported(path: &Path) -> Result<LoadedStory, String> {
    match tale_story::load(path) {
        Ok(loaded) => Ok(loaded),
        Err(LoadError::Parse {
            path: story_path,
            source,
        }) => {
            // Re-read the story file (it may sit behind a bookmark) so the
            // report can underline the offending line.
            if let Ok(text) = std::fs::read_to_string(&story_path) {
                let name = story_path.display().to_string();
                eprint!("{}", tale_story::render_parse_error(&text, &name, &source));
                Err(format!("failed to parse {}", story_path.display()))
            } else {
                Err(format!("error parsing {}: {source}", story_path.display()))
            }
        }
        Err(e) => Err(e.to_string()),
    }
}
