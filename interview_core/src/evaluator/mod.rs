//! Condition evaluation - pure predicates over a game-state snapshot.
//!
//! Nothing here mutates state or touches content tables beyond the
//! condition being tested; both evaluators are plain functions so the
//! selector and resolver can call them anywhere.

use interview_rules::{EndingCondition, GameState, InterviewState, Question, UnlockCondition};

/// Test a single unlock condition against the current state.
///
/// Numeric bounds are inclusive. `StateTense` / `StateChaos` require the
/// mood to match exactly, not "at least". `SpecificAnswer` holds when the
/// referenced question has been answered, whichever answer was chosen.
pub fn unlock_condition_holds(condition: &UnlockCondition, state: &GameState) -> bool {
    match condition {
        UnlockCondition::MinNormalPoints(min) => state.normal_points >= *min,
        UnlockCondition::MinChaosPoints(min) => state.chaos_points >= *min,
        UnlockCondition::MaxNormalPoints(max) => state.normal_points <= *max,
        UnlockCondition::MaxChaosPoints(max) => state.chaos_points <= *max,
        UnlockCondition::StateTense => state.current_state == InterviewState::Tense,
        UnlockCondition::StateChaos => state.current_state == InterviewState::Chaos,
        UnlockCondition::SpecificAnswer(question_id) => state.has_answered(question_id),
    }
}

/// Whether every unlock condition on the question holds (logical AND).
///
/// A question with no conditions is always unlocked.
pub fn question_unlocked(question: &Question, state: &GameState) -> bool {
    question
        .unlock_conditions
        .iter()
        .all(|condition| unlock_condition_holds(condition, state))
}

/// Test an ending condition against a terminal state.
///
/// Each field is evaluated independently; the ending matches iff every set
/// field holds. A condition with no fields set matches any state.
pub fn ending_matches(condition: &EndingCondition, state: &GameState) -> bool {
    if !condition.total_points.contains(state.total_points()) {
        return false;
    }
    if !condition.normal_points.contains(state.normal_points) {
        return false;
    }
    if !condition.chaos_points.contains(state.chaos_points) {
        return false;
    }
    if let Some(required) = condition.required_state {
        if state.current_state != required {
            return false;
        }
    }
    if let Some(required) = condition.predominant_answer_type {
        if state.predominant_answer_type() != Some(required) {
            return false;
        }
    }
    condition
        .required_answer_ids
        .iter()
        .all(|answer_id| state.has_chosen(answer_id))
}
