//! The interview orchestrator - sequences one playthrough end to end.
//!
//! The orchestrator is the only component that faces the embedding
//! application: it owns the game state for the lifetime of a playthrough,
//! routes player choices through the answer processor, and reports what
//! happened as [`InterviewEvent`]s for presentation collaborators.

mod events;

pub use events::*;

use thiserror::Error;

use interview_rules::{ContentError, ContentSet, GameState, Question};

use crate::progression::{self, ProcessError};
use crate::resolution::EndingResolver;
use crate::selection;

/// Where the playthrough stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Resolved,
}

/// Caller violations of the orchestrator state machine.
///
/// Rejected inputs never corrupt the game state; the caller may retry
/// with corrected input.
#[derive(Debug, Error)]
pub enum InterviewError {
    #[error("no interview in progress (phase: {phase:?})")]
    NotInProgress { phase: Phase },

    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// One interview playthrough over a validated content set.
///
/// Single-threaded and synchronous: every call completes before control
/// returns, and the surrounding event loop supplies player input between
/// calls. [`Interview::start`] may be invoked again at any time and fully
/// discards prior state.
pub struct Interview {
    content: ContentSet,
    state: GameState,
    phase: Phase,
    current_question: Option<Question>,
    resolver: EndingResolver,
}

impl Interview {
    /// Create an orchestrator over the given content.
    ///
    /// The content is validated up front; a playthrough never starts on
    /// malformed data.
    pub fn new(content: ContentSet) -> Result<Self, ContentError> {
        content.validate()?;
        Ok(Self {
            content,
            state: GameState::new(),
            phase: Phase::NotStarted,
            current_question: None,
            resolver: EndingResolver::new(),
        })
    }

    /// Begin (or restart) a playthrough.
    ///
    /// Resets the game state, presents the first question, and returns the
    /// emitted events. If no question is eligible at all, the interview
    /// resolves immediately.
    pub fn start(&mut self) -> Vec<InterviewEvent> {
        self.state.reset();
        self.phase = Phase::InProgress;
        self.current_question = None;

        tracing::debug!(playthrough = %self.state.playthrough, "interview started");

        let mut events = Vec::new();
        self.advance(&mut events);
        events
    }

    /// Submit the player's choice for the current question by answer index.
    ///
    /// Rejected without touching state when no interview is in progress or
    /// the index is out of range. On success, returns the emitted events:
    /// a mood update, then either the next question or the ending.
    pub fn submit_answer(&mut self, answer_index: usize) -> Result<Vec<InterviewEvent>, InterviewError> {
        if self.phase != Phase::InProgress {
            tracing::warn!(phase = ?self.phase, "answer submitted outside an active interview");
            return Err(InterviewError::NotInProgress { phase: self.phase });
        }
        let question = match &self.current_question {
            Some(question) => question.clone(),
            None => return Err(InterviewError::NotInProgress { phase: self.phase }),
        };

        if let Err(error) = progression::apply_answer(&mut self.state, &question, answer_index) {
            tracing::warn!(question = %question.id, error = %error, "answer rejected");
            return Err(error.into());
        }

        let mut events = vec![InterviewEvent::StateChanged(self.state.current_state)];
        self.advance(&mut events);
        Ok(events)
    }

    /// Where the playthrough stands.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Snapshot of the running game state, for score meters and the like.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The question currently awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    /// Present the next eligible question, or resolve the ending when the
    /// pool is exhausted.
    fn advance(&mut self, events: &mut Vec<InterviewEvent>) {
        match selection::select_next(&self.state, &self.content.questions).cloned() {
            Some(question) => {
                self.current_question = Some(question.clone());
                events.push(InterviewEvent::QuestionPresented(question));
            }
            None => {
                self.phase = Phase::Resolved;
                self.current_question = None;
                let ending = self
                    .resolver
                    .resolve(&self.state, &self.content.endings)
                    .clone();
                tracing::debug!(
                    playthrough = %self.state.playthrough,
                    ending = %ending.id,
                    "interview resolved"
                );
                events.push(InterviewEvent::InterviewFinished(ending));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_rules::{
        Answer, AnswerType, Ending, EndingCondition, InterviewState, PointRange, Question,
        QuestionType, UnlockCondition,
    };

    fn content() -> ContentSet {
        ContentSet::new(
            vec![
                Question::new("q_intro", "Why are you here?")
                    .with_answer(
                        Answer::new("a_polite", "I admire the company.", AnswerType::Professional)
                            .with_points(20, 0),
                    )
                    .with_answer(
                        Answer::new("a_howl", "*howls*", AnswerType::AbsurdExtreme)
                            .with_points(0, 35),
                    ),
                Question::new("q_followup", "Walk me through your resume.")
                    .with_answer(
                        Answer::new("a_resume", "Gladly. Page one...", AnswerType::Professional)
                            .with_points(15, 0),
                    )
                    .with_answer(
                        Answer::new("a_bite", "It walks through YOU.", AnswerType::Aggressive)
                            .with_points(0, 30),
                    ),
                Question::new("q_secret", "Do you hear the walls too?")
                    .with_type(QuestionType::Secret)
                    .with_unlock_condition(UnlockCondition::MinChaosPoints(30))
                    .with_answer(
                        Answer::new("a_embrace", "They never stop.", AnswerType::Sociopathic)
                            .with_points(0, 40),
                    ),
            ],
            vec![
                Ending::new("e_hired", "Welcome Aboard").with_condition(
                    EndingCondition::any().with_normal_points(PointRange::at_least(30)),
                ),
                Ending::new("e_shrug", "The Interview Ends")
                    .with_description("Nobody is ever in touch."),
            ],
        )
    }

    fn presented_id(event: &InterviewEvent) -> &str {
        match event {
            InterviewEvent::QuestionPresented(question) => question.id.as_str(),
            other => panic!("expected QuestionPresented, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_invalid_content() {
        let empty_endings = ContentSet::new(vec![], vec![]);
        assert!(Interview::new(empty_endings).is_err());
    }

    #[test]
    fn test_submit_before_start_is_rejected() {
        let mut interview = Interview::new(content()).unwrap();
        assert!(matches!(
            interview.submit_answer(0),
            Err(InterviewError::NotInProgress { phase: Phase::NotStarted })
        ));
        assert_eq!(interview.state().questions_answered, 0);
    }

    #[test]
    fn test_professional_playthrough() {
        let mut interview = Interview::new(content()).unwrap();

        let events = interview.start();
        assert_eq!(events.len(), 1);
        assert_eq!(presented_id(&events[0]), "q_intro");

        let events = interview.submit_answer(0).unwrap();
        assert!(matches!(
            events[0],
            InterviewEvent::StateChanged(InterviewState::Normal)
        ));
        assert_eq!(presented_id(&events[1]), "q_followup");

        // 20 + 15 = 35 normal; the secret question stays locked, so the
        // interview resolves.
        let events = interview.submit_answer(0).unwrap();
        assert!(matches!(
            events[0],
            InterviewEvent::StateChanged(InterviewState::Tense)
        ));
        match &events[1] {
            InterviewEvent::InterviewFinished(ending) => {
                assert_eq!(ending.id.as_str(), "e_hired");
            }
            other => panic!("expected InterviewFinished, got {:?}", other),
        }

        assert_eq!(interview.phase(), Phase::Resolved);
        assert!(interview.current_question().is_none());
    }

    #[test]
    fn test_chaos_playthrough_unlocks_secret_and_expels() {
        let mut interview = Interview::new(content()).unwrap();
        interview.start();

        interview.submit_answer(1).unwrap(); // howl: chaos 35
        interview.submit_answer(1).unwrap(); // bite: chaos 65

        // The secret question unlocked at chaos >= 30.
        assert_eq!(
            interview.current_question().unwrap().id.as_str(),
            "q_secret"
        );

        let events = interview.submit_answer(0).unwrap(); // chaos 105
        assert!(matches!(
            events[0],
            InterviewEvent::StateChanged(InterviewState::ViolentlyExpelled)
        ));
        match &events[1] {
            InterviewEvent::InterviewFinished(ending) => {
                assert_eq!(ending.id.as_str(), "e_shrug");
            }
            other => panic!("expected InterviewFinished, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_index_is_a_no_op() {
        let mut interview = Interview::new(content()).unwrap();
        interview.start();

        let result = interview.submit_answer(99);
        assert!(matches!(
            result,
            Err(InterviewError::Process(ProcessError::AnswerIndexOutOfRange { .. }))
        ));
        assert_eq!(interview.state().questions_answered, 0);
        assert_eq!(interview.state().total_points(), 0);

        // The same question is still pending and answerable.
        assert_eq!(
            interview.current_question().unwrap().id.as_str(),
            "q_intro"
        );
        assert!(interview.submit_answer(0).is_ok());
    }

    #[test]
    fn test_submit_after_resolution_is_rejected() {
        let mut interview = Interview::new(content()).unwrap();
        interview.start();
        interview.submit_answer(0).unwrap();
        interview.submit_answer(0).unwrap();
        assert_eq!(interview.phase(), Phase::Resolved);

        assert!(matches!(
            interview.submit_answer(0),
            Err(InterviewError::NotInProgress { phase: Phase::Resolved })
        ));
    }

    #[test]
    fn test_restart_fully_discards_prior_state() {
        let mut interview = Interview::new(content()).unwrap();
        interview.start();
        interview.submit_answer(1).unwrap();
        let first_playthrough = interview.state().playthrough;
        assert_ne!(interview.state().total_points(), 0);

        let events = interview.start();
        assert_eq!(interview.phase(), Phase::InProgress);
        assert_eq!(interview.state().total_points(), 0);
        assert_eq!(interview.state().questions_answered, 0);
        assert_ne!(interview.state().playthrough, first_playthrough);
        assert_eq!(presented_id(&events[0]), "q_intro");
    }
}
