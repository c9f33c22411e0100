//! Answer processing - the only writer of game state.

pub mod transition;

pub use transition::derive_state;

use thiserror::Error;

use interview_rules::{Answer, AnswerRecord, GameState, Question, QuestionId};

/// Rejected answer submissions. The state is never mutated on error.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("question {0} has already been answered")]
    AlreadyAnswered(QuestionId),

    #[error("question {question} has {available} answers, index {index} is out of range")]
    AnswerIndexOutOfRange {
        question: QuestionId,
        index: usize,
        available: usize,
    },
}

/// Apply the chosen answer to the state.
///
/// Scores the point deltas (unclamped - totals may leave the nominal 0-100
/// display range), records the answer in the history, and recomputes the
/// mood so the state is consistent with its points on return. Returns the
/// applied answer for event emission.
pub fn apply_answer<'a>(
    state: &mut GameState,
    question: &'a Question,
    answer_index: usize,
) -> Result<&'a Answer, ProcessError> {
    if state.has_answered(&question.id) {
        return Err(ProcessError::AlreadyAnswered(question.id.clone()));
    }
    let answer = question
        .answer_at(answer_index)
        .ok_or_else(|| ProcessError::AnswerIndexOutOfRange {
            question: question.id.clone(),
            index: answer_index,
            available: question.answers.len(),
        })?;

    state.normal_points += answer.normal_points;
    state.chaos_points += answer.chaos_points;
    state.questions_answered += 1;
    state.answered_question_ids.insert(question.id.clone());
    state.answer_history.push(AnswerRecord {
        question: question.id.clone(),
        answer: answer.id.clone(),
        answer_type: answer.answer_type,
    });

    state.current_state = transition::derive_state(state);

    tracing::debug!(
        playthrough = %state.playthrough,
        question = %question.id,
        answer = %answer.id,
        normal = state.normal_points,
        chaos = state.chaos_points,
        mood = %state.current_state,
        "answer applied"
    );

    Ok(answer)
}
