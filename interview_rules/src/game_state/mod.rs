//! Game state - the single mutable aggregate for one playthrough.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::content::{AnswerId, QuestionId};
use crate::mechanics::{AnswerType, InterviewState};

/// Unique identifier for playthroughs, stamped on each [`GameState`] so
/// embedding applications can correlate diagnostics per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaythroughId(pub Uuid);

impl PlaythroughId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlaythroughId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlaythroughId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in the answer history.
///
/// Carries the answer archetype so predominance analysis never needs a
/// content lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: QuestionId,
    pub answer: AnswerId,
    pub answer_type: AnswerType,
}

/// The complete runtime state of one interview playthrough.
///
/// Created once per playthrough and mutated exclusively by the answer
/// processor; a new playthrough takes a fresh state (or a full
/// [`GameState::reset`]), never a partial reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub playthrough: PlaythroughId,

    /// Professional-track accumulator.
    pub normal_points: i32,

    /// Absurd/aggressive-track accumulator.
    pub chaos_points: i32,

    /// Current mood, kept consistent with points by the answer processor.
    pub current_state: InterviewState,

    /// Number of questions answered so far.
    pub questions_answered: u32,

    /// Questions answered this playthrough; a question is never scored twice.
    pub answered_question_ids: HashSet<QuestionId>,

    /// Append-only record of every chosen answer, in order.
    pub answer_history: Vec<AnswerRecord>,
}

impl GameState {
    /// Create a fresh state for a new playthrough.
    pub fn new() -> Self {
        Self {
            playthrough: PlaythroughId::new(),
            normal_points: 0,
            chaos_points: 0,
            current_state: InterviewState::Normal,
            questions_answered: 0,
            answered_question_ids: HashSet::new(),
            answer_history: Vec::new(),
        }
    }

    /// Reset every field to initial values under a new playthrough id.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Sum of both tracks; always recomputed, never stored.
    pub fn total_points(&self) -> i32 {
        self.normal_points + self.chaos_points
    }

    /// Whether the given question has already been answered.
    pub fn has_answered(&self, question_id: &QuestionId) -> bool {
        self.answered_question_ids.contains(question_id)
    }

    /// Whether the given answer appears anywhere in the history.
    pub fn has_chosen(&self, answer_id: &AnswerId) -> bool {
        self.answer_history.iter().any(|r| &r.answer == answer_id)
    }

    /// The most frequent answer archetype in the history.
    ///
    /// Ties are broken by recency: among equally frequent archetypes, the
    /// one chosen most recently wins. `None` only when the history is empty.
    pub fn predominant_answer_type(&self) -> Option<AnswerType> {
        let mut tally: Vec<(AnswerType, usize, usize)> = Vec::new();

        for (index, record) in self.answer_history.iter().enumerate() {
            match tally.iter_mut().find(|(t, _, _)| *t == record.answer_type) {
                Some((_, count, last_seen)) => {
                    *count += 1;
                    *last_seen = index;
                }
                None => tally.push((record.answer_type, 1, index)),
            }
        }

        tally
            .into_iter()
            .max_by_key(|(_, count, last_seen)| (*count, *last_seen))
            .map(|(answer_type, _, _)| answer_type)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
