//! Mood derivation from accumulated points.

use interview_rules::{Disposition, GameState, InterviewState};

/// Upper bound (inclusive) of the Normal bracket.
pub const NORMAL_MAX: i32 = 30;
/// Upper bound (inclusive) of the Tense bracket.
pub const TENSE_MAX: i32 = 60;
/// Upper bound (inclusive) of the Chaos bracket.
pub const CHAOS_MAX: i32 = 90;

/// Derive the mood for the given state.
///
/// Pure function of `total_points` and the predominant answer archetype.
/// Totals below zero fall into the Normal bracket and totals above 100
/// into the endgame bracket; out-of-range values never fail.
///
/// The endgame bracket splits on the predominant archetype's disposition:
/// a composed-leaning history reads as `HiredByMistake`, an unhinged one
/// as `ViolentlyExpelled`.
pub fn derive_state(state: &GameState) -> InterviewState {
    match state.total_points() {
        total if total <= NORMAL_MAX => InterviewState::Normal,
        total if total <= TENSE_MAX => InterviewState::Tense,
        total if total <= CHAOS_MAX => InterviewState::Chaos,
        _ => match state.predominant_answer_type().map(|t| t.disposition()) {
            Some(Disposition::Unhinged) => InterviewState::ViolentlyExpelled,
            // An empty history cannot reach this bracket through play;
            // the composed reading covers direct calls on synthetic state.
            Some(Disposition::Composed) | None => InterviewState::HiredByMistake,
        },
    }
}
