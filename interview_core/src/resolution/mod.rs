//! Ending resolution - matches a terminal state against the ending table.

use interview_rules::{Ending, GameState};

use crate::evaluator;

/// First ending in the table whose condition matches, in authored order.
///
/// Authoring order is the priority mechanism: an earlier ending shadows
/// any later one whose condition also holds.
pub fn first_match<'a>(state: &GameState, endings: &'a [Ending]) -> Option<&'a Ending> {
    endings
        .iter()
        .find(|ending| evaluator::ending_matches(&ending.condition, state))
}

/// Resolves terminal states to endings, failing closed.
///
/// A validated content set always carries an unconditional catch-all, so
/// the built-in default only surfaces when resolution is run against an
/// unvalidated table. That fallthrough is an authoring gap, reported to
/// the log, never to the player.
pub struct EndingResolver {
    default: Ending,
}

impl EndingResolver {
    /// Create a resolver with the built-in default ending.
    pub fn new() -> Self {
        Self {
            default: Ending::fallback(),
        }
    }

    /// Pick the ending for a terminal state.
    ///
    /// Always returns exactly one ending: the first match, or the default
    /// when nothing in the table matches.
    pub fn resolve<'a>(&'a self, state: &GameState, endings: &'a [Ending]) -> &'a Ending {
        match first_match(state, endings) {
            Some(ending) => ending,
            None => {
                tracing::warn!(
                    playthrough = %state.playthrough,
                    total = state.total_points(),
                    mood = %state.current_state,
                    "no ending condition matched, falling back to default"
                );
                &self.default
            }
        }
    }
}

impl Default for EndingResolver {
    fn default() -> Self {
        Self::new()
    }
}
