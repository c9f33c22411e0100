//! Question selection - picks the next eligible question from the pool.

use interview_rules::{GameState, Question};

use crate::evaluator;

/// Whether the question's contradiction rule is triggered.
///
/// A question is contradicted once its counterpart has been answered,
/// whichever answer was chosen.
fn contradicted(question: &Question, state: &GameState) -> bool {
    question
        .contradicts_question_id
        .as_ref()
        .map_or(false, |counterpart| state.has_answered(counterpart))
}

/// All currently eligible questions, in authored order.
///
/// Eligible means: not yet answered, every unlock condition holds, and the
/// contradiction rule is not triggered.
pub fn eligible_questions<'a>(state: &GameState, pool: &'a [Question]) -> Vec<&'a Question> {
    pool.iter()
        .filter(|question| !state.has_answered(&question.id))
        .filter(|question| evaluator::question_unlocked(question, state))
        .filter(|question| !contradicted(question, state))
        .collect()
}

/// Pick the next question to ask, or `None` when the pool is exhausted.
///
/// Base questions are preferred over Special, Special over Secret; within
/// a tier, authored order is preserved. `None` signals the orchestrator to
/// terminate the interview and resolve an ending.
pub fn select_next<'a>(state: &GameState, pool: &'a [Question]) -> Option<&'a Question> {
    let eligible = eligible_questions(state, pool);
    let selected = eligible
        .into_iter()
        // min_by_key keeps the first of equally ranked candidates, so
        // authored order decides ties.
        .min_by_key(|question| question.question_type.rank());

    match selected {
        Some(question) => tracing::debug!(question = %question.id, "question selected"),
        None => tracing::debug!(
            answered = state.questions_answered,
            "question pool exhausted"
        ),
    }

    selected
}
