//! Line-oriented story parser.
//!
//! The format is unambiguous line-by-line given the current state, so a
//! three-state machine with O(1) work per line suffices — one pass, no
//! backtracking. Parsing stops at the first malformed line.

use tale_core::{Outcome, Room, RoomId, StoryGraph, Transition};

/// Which line grammar the parser expects next.
///
/// The original format has no lookahead: a line is classified entirely by
/// this state plus its own shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Before the first room, or between a room's `R` line and nothing else.
    Default,
    /// Inside a room's description, until the `;;;` terminator.
    Description,
    /// Inside a room's transition block, until the next `R` line or EOF.
    Transition,
}

/// Errors produced by [`parse_story`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A line violated the story grammar. Carries the 1-based count of lines
    /// consumed so far (skipped blank/comment lines included) and the
    /// offending trimmed line.
    #[error("malformed story line {line}: {text}")]
    Structural {
        /// 1-based line count at the offending line.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// Two rooms declared the same id. Carries the line of the later `R`
    /// line.
    #[error("duplicate room id \"{id}\" on line {line}")]
    DuplicateRoom {
        /// 1-based line count at the duplicate `R` line.
        line: usize,
        /// The id declared twice.
        id: RoomId,
    },

    /// Every line was well-formed, but the graph is unusable.
    #[error("incomplete story: {0}")]
    Incomplete(#[from] IncompleteStory),
}

/// Why a structurally clean parse still failed validation.
#[derive(Debug, thiserror::Error)]
pub enum IncompleteStory {
    /// The input contained no rooms at all.
    #[error("no rooms were parsed")]
    NoRooms,

    /// A room's transition block was never opened or contains no
    /// transitions.
    #[error("room \"{0}\" has no transitions")]
    NoTransitions(RoomId),
}

impl ParseError {
    /// The line number the error points at, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Structural { line, .. } | Self::DuplicateRoom { line, .. } => Some(*line),
            Self::Incomplete(_) => None,
        }
    }
}

/// A room being accumulated during the parse, plus the bookkeeping needed
/// for diagnostics.
struct OpenRoom {
    /// Line count at this room's `R` line.
    line: usize,
    room: Room,
    /// A description line was seen. Distinct from the description being
    /// empty: a blank first line sets an empty description, and later lines
    /// still join with `\n`.
    has_description: bool,
    /// A terminal transition was recorded; the block accepts nothing more.
    sealed: bool,
}

fn structural(line: usize, text: &str) -> ParseError {
    ParseError::Structural {
        line,
        text: text.to_string(),
    }
}

/// Parse story lines (everything after the `#!STORY` magic line) into a
/// [`StoryGraph`].
///
/// Lines are trimmed before classification. Outside descriptions, blank
/// lines and lines starting with `#` are skipped but still counted toward
/// the line numbers reported in errors. On success the graph is non-empty,
/// every room has at least one transition, and room ids are unique; the
/// graph's start room is the first room parsed.
pub fn parse_story<'a, I>(lines: I) -> Result<StoryGraph, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut graph = StoryGraph::new();
    let mut state = ParseState::Default;
    let mut open: Option<OpenRoom> = None;
    let mut line_no = 0usize;

    for raw in lines {
        line_no += 1;
        let line = raw.trim();

        if state != ParseState::Description && (line.is_empty() || line.starts_with('#')) {
            continue;
        }

        if state != ParseState::Description && line.starts_with('R') {
            if let Some(prev) = open.take() {
                close_room(&mut graph, prev)?;
            }
            open = Some(parse_room_line(line, line_no)?);
            state = ParseState::Description;
            continue;
        }

        if line == ";;;" {
            if state == ParseState::Description && open.is_some() {
                state = ParseState::Transition;
                continue;
            }
            // A stray terminator: before any room, or repeated inside a
            // transition block.
            return Err(structural(line_no, line));
        }

        if state == ParseState::Description {
            if let Some(current) = open.as_mut() {
                if current.has_description {
                    current.room.description.push('\n');
                } else {
                    current.has_description = true;
                }
                current.room.description.push_str(line);
            }
            continue;
        }

        if state == ParseState::Transition {
            let Some(current) = open.as_mut() else {
                return Err(structural(line_no, line));
            };
            if current.sealed {
                return Err(structural(line_no, line));
            }
            if let Some(rest) = line.strip_prefix(':') {
                let transition = parse_choice_line(rest, line, line_no)?;
                current.room.transitions.push(transition);
            } else if let Some(outcome) = Outcome::from_marker(line) {
                // A terminal must be the room's sole transition.
                if !current.room.transitions.is_empty() {
                    return Err(structural(line_no, line));
                }
                current.room.transitions.push(Transition::Terminal(outcome));
                current.sealed = true;
            } else {
                return Err(structural(line_no, line));
            }
            continue;
        }

        // Default state and nothing matched.
        return Err(structural(line_no, line));
    }

    if let Some(last) = open.take() {
        close_room(&mut graph, last)?;
    }

    if graph.is_empty() {
        return Err(IncompleteStory::NoRooms.into());
    }
    for room in graph.rooms() {
        if room.transitions.is_empty() {
            return Err(IncompleteStory::NoTransitions(room.id.clone()).into());
        }
    }

    Ok(graph)
}

/// Parse an `R<id>: <title>` line into a fresh open room.
fn parse_room_line(line: &str, line_no: usize) -> Result<OpenRoom, ParseError> {
    let rest = &line[1..];
    let Some(colon) = rest.find(':') else {
        return Err(structural(line_no, line));
    };
    let id = rest[..colon].trim();
    if id.is_empty() {
        return Err(structural(line_no, line));
    }
    let title = rest[colon + 1..].trim();
    Ok(OpenRoom {
        line: line_no,
        room: Room::new(RoomId::new(id), title),
        has_description: false,
        sealed: false,
    })
}

/// Parse the remainder of a `: <description> -> <target>[?<weight>]` line.
///
/// `rest` is the text after the leading `:`; `line` is the full trimmed line
/// for error reporting. The weight, when present, sits after the last `?` —
/// room ids are guaranteed not to contain `?`.
fn parse_choice_line(rest: &str, line: &str, line_no: usize) -> Result<Transition, ParseError> {
    let Some(arrow) = rest.find(" -> ") else {
        return Err(structural(line_no, line));
    };
    let description = rest[..arrow].trim();
    let target_part = &rest[arrow + 4..];

    let (target, weight) = match target_part.rfind('?') {
        Some(q) => {
            let weight = target_part[q + 1..]
                .trim()
                .parse::<u32>()
                .map_err(|_| structural(line_no, line))?;
            (target_part[..q].trim(), Some(weight))
        }
        None => (target_part.trim(), None),
    };

    Ok(Transition::choice(description, target, weight))
}

/// Move a finished room into the graph, reporting a duplicate id against the
/// room's own `R` line.
fn close_room(graph: &mut StoryGraph, open: OpenRoom) -> Result<(), ParseError> {
    let id = open.room.id.clone();
    graph.push(open.room).map_err(|_| ParseError::DuplicateRoom {
        line: open.line,
        id,
    })
}
