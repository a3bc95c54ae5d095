//! Playthrough session state machine.

use rand::SeedableRng;
use rand::rngs::StdRng;

use tale_core::{Outcome, Room, RoomId, StoryGraph, Transition};

use crate::error::{EngineError, EngineResult};
use crate::select::{terminal_outcome, weighted_select};

/// Where a playthrough stands.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayState {
    /// In a room, with the story still going.
    Active(RoomId),
    /// The story has ended with this outcome.
    Finished(Outcome),
}

/// The result of advancing a playthrough by one step.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// A weighted selection moved the playthrough to this room.
    Moved(RoomId),
    /// The current room needs a manual choice; pick one of
    /// [`Playthrough::choices`] via [`Playthrough::choose`].
    AwaitChoice,
    /// The story ended.
    Finished(Outcome),
}

/// One walk through a story, from a starting room to an outcome.
///
/// Owns the graph (read-only from here on) and the RNG stream. The RNG is
/// seeded once per playthrough so a fixed seed reproduces the whole run.
#[derive(Debug)]
pub struct Playthrough {
    graph: StoryGraph,
    state: PlayState,
    rng: StdRng,
}

impl Playthrough {
    /// Start a playthrough at the given room. The starting room is not
    /// validated here — like transition targets, it resolves lazily on the
    /// first step.
    pub fn new(graph: StoryGraph, start: RoomId, seed: u64) -> Self {
        Self {
            graph,
            state: PlayState::Active(start),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The current state.
    pub fn state(&self) -> &PlayState {
        &self.state
    }

    /// The graph being walked.
    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }

    /// The outcome, once the playthrough has finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            PlayState::Finished(outcome) => Some(outcome),
            PlayState::Active(_) => None,
        }
    }

    /// The room the playthrough is currently in.
    pub fn current_room(&self) -> EngineResult<&Room> {
        match &self.state {
            PlayState::Active(id) => self
                .graph
                .room(id)
                .ok_or_else(|| EngineError::UnknownRoom(id.clone())),
            PlayState::Finished(_) => Err(EngineError::Finished),
        }
    }

    /// Advance one step: a terminal room finishes the story, a room with
    /// positively weighted choices moves at random, and anything else waits
    /// for a manual choice.
    pub fn advance(&mut self) -> EngineResult<Advance> {
        let current = match &self.state {
            PlayState::Finished(outcome) => return Ok(Advance::Finished(*outcome)),
            PlayState::Active(id) => self
                .graph
                .room(id)
                .ok_or_else(|| EngineError::UnknownRoom(id.clone()))?,
        };

        if let Some(outcome) = terminal_outcome(&current.transitions) {
            self.state = PlayState::Finished(outcome);
            return Ok(Advance::Finished(outcome));
        }

        if let Some(target) = weighted_select(&current.transitions, &mut self.rng) {
            let target = target.clone();
            self.state = PlayState::Active(target.clone());
            return Ok(Advance::Moved(target));
        }

        Ok(Advance::AwaitChoice)
    }

    /// The transitions offered for manual selection in the current room:
    /// choice transitions without a weight, in story order. Weighted
    /// transitions are never offered manually.
    pub fn choices(&self) -> EngineResult<Vec<&Transition>> {
        Ok(self.current_room()?.manual_choices().collect())
    }

    /// Take the manual choice at `index` into [`Self::choices`].
    pub fn choose(&mut self, index: usize) -> EngineResult<RoomId> {
        let room = self.current_room()?;
        let target = room
            .manual_choices()
            .nth(index)
            .and_then(Transition::target)
            .ok_or(EngineError::InvalidChoice(index))?
            .clone();
        self.state = PlayState::Active(target.clone());
        Ok(target)
    }
}
