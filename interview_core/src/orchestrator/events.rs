//! Events emitted toward presentation collaborators.

use serde::{Deserialize, Serialize};

use interview_rules::{Ending, InterviewState, Question};

/// What happened inside the engine, for the embedding application to
/// dispatch to UI, audio, and animation.
///
/// Operations on [`crate::orchestrator::Interview`] return these in
/// emission order; the caller drains and forwards them. The engine never
/// calls back into presentation code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InterviewEvent {
    /// A question is ready to be shown; an answer is awaited.
    QuestionPresented(Question),

    /// The mood changed (or was recomputed) after an answer was scored.
    StateChanged(InterviewState),

    /// The playthrough is over; no further answers are accepted.
    InterviewFinished(Ending),
}
