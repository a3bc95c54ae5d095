//! Terminal detection and weighted-random transition selection.

use rand::Rng;
use rand::rngs::StdRng;

use tale_core::{Outcome, RoomId, Transition};

/// Whether a transition list marks a terminal room: exactly one entry, and
/// that entry ends the story.
pub fn is_terminal(transitions: &[Transition]) -> bool {
    matches!(transitions, [t] if t.is_terminal())
}

/// The outcome of a terminal room, or `None` if the room is not terminal.
pub fn terminal_outcome(transitions: &[Transition]) -> Option<Outcome> {
    match transitions {
        [Transition::Terminal(outcome)] => Some(*outcome),
        _ => None,
    }
}

/// Weighted-random selection among the weighted choice transitions.
///
/// Considers only choices that carry a weight; unweighted choices and
/// terminals are ignored. Returns `None` when no weighted choices exist or
/// their weights sum to less than 1 — the caller's signal to fall back to a
/// manual choice.
///
/// Draws a uniform integer in `[0, total)` and returns the target of the
/// first transition, in list order, whose cumulative weight exceeds the
/// draw, so each target is chosen with probability `weight / total`. The
/// RNG is supplied by the caller and must live for the whole playthrough:
/// reseeding per call would break reproducibility under a fixed seed.
pub fn weighted_select<'a>(
    transitions: &'a [Transition],
    rng: &mut StdRng,
) -> Option<&'a RoomId> {
    let total: u64 = transitions
        .iter()
        .filter_map(Transition::weight)
        .map(u64::from)
        .sum();
    if total < 1 {
        return None;
    }

    let draw = rng.random_range(0..total);
    let mut cumulative = 0u64;
    for transition in transitions {
        if let Transition::Choice {
            target,
            weight: Some(weight),
            ..
        } = transition
        {
            cumulative += u64::from(*weight);
            if cumulative > draw {
                return Some(target);
            }
        }
    }

    None
}
