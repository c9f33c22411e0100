//! The content catalog - an authored set of questions and endings,
//! validated once at load time and read-only afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::{AnswerId, Ending, EndingId, Question, QuestionId, UnlockCondition};

/// Malformed authored data, detected at load time.
///
/// The engine refuses to start a playthrough on content that fails these
/// checks rather than fail mid-game.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("duplicate question id: {0}")]
    DuplicateQuestionId(QuestionId),

    #[error("duplicate answer id: {0}")]
    DuplicateAnswerId(AnswerId),

    #[error("question {0} has no answers")]
    EmptyAnswerList(QuestionId),

    #[error("question {question} contradicts unknown question {target}")]
    DanglingContradiction {
        question: QuestionId,
        target: QuestionId,
    },

    #[error("question {question} is marked as contradicting itself")]
    SelfContradiction { question: QuestionId },

    #[error("question {question} has an unlock condition referencing unknown question {target}")]
    DanglingConditionReference {
        question: QuestionId,
        target: QuestionId,
    },

    #[error("duplicate ending id: {0}")]
    DuplicateEndingId(EndingId),

    #[error("ending table is empty")]
    NoEndings,

    #[error("ending table has no unconditional catch-all ending")]
    MissingFallbackEnding,

    #[error("failed to parse TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON content: {0}")]
    Json(#[from] serde_json::Error),
}

/// An authored content set: the question pool and the ordered ending table.
///
/// Ending order is the priority order for resolution - the first matching
/// ending wins, so the table must carry an unconditional catch-all.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentSet {
    #[serde(default)]
    pub questions: Vec<Question>,

    #[serde(default)]
    pub endings: Vec<Ending>,
}

impl ContentSet {
    /// Create a content set from already-built tables. Call
    /// [`ContentSet::validate`] before handing it to the engine.
    pub fn new(questions: Vec<Question>, endings: Vec<Ending>) -> Self {
        Self { questions, endings }
    }

    /// Parse and validate a content set from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let set: ContentSet = toml::from_str(source)?;
        set.validate()?;
        Ok(set)
    }

    /// Parse and validate a content set from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ContentError> {
        let set: ContentSet = serde_json::from_str(source)?;
        set.validate()?;
        Ok(set)
    }

    /// Look up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Look up an ending by id.
    pub fn ending(&self, id: &EndingId) -> Option<&Ending> {
        self.endings.iter().find(|e| &e.id == id)
    }

    /// Check the whole set for authoring errors.
    ///
    /// Verifies id uniqueness, non-empty answer lists, referential
    /// integrity of contradiction and unlock references, and the presence
    /// of an unconditional catch-all ending.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut question_ids = HashSet::new();
        let mut answer_ids = HashSet::new();

        for question in &self.questions {
            if !question_ids.insert(&question.id) {
                return Err(ContentError::DuplicateQuestionId(question.id.clone()));
            }
            if question.answers.is_empty() {
                return Err(ContentError::EmptyAnswerList(question.id.clone()));
            }
            for answer in &question.answers {
                if !answer_ids.insert(&answer.id) {
                    return Err(ContentError::DuplicateAnswerId(answer.id.clone()));
                }
            }
        }

        // Reference checks need the full id set, so run them second.
        for question in &self.questions {
            if let Some(target) = &question.contradicts_question_id {
                if target == &question.id {
                    return Err(ContentError::SelfContradiction {
                        question: question.id.clone(),
                    });
                }
                if !question_ids.contains(target) {
                    return Err(ContentError::DanglingContradiction {
                        question: question.id.clone(),
                        target: target.clone(),
                    });
                }
            }
            for condition in &question.unlock_conditions {
                if let UnlockCondition::SpecificAnswer(target) = condition {
                    if !question_ids.contains(target) {
                        return Err(ContentError::DanglingConditionReference {
                            question: question.id.clone(),
                            target: target.clone(),
                        });
                    }
                }
            }
        }

        if self.endings.is_empty() {
            return Err(ContentError::NoEndings);
        }
        let mut ending_ids = HashSet::new();
        for ending in &self.endings {
            if !ending_ids.insert(&ending.id) {
                return Err(ContentError::DuplicateEndingId(ending.id.clone()));
            }
        }
        if !self.endings.iter().any(|e| e.condition.is_unconditional()) {
            return Err(ContentError::MissingFallbackEnding);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Answer, EndingCondition, PointRange};
    use crate::mechanics::AnswerType;

    fn question_with_answer(qid: &str, aid: &str) -> Question {
        Question::new(qid, "prompt").with_answer(Answer::new(
            aid,
            "reply",
            AnswerType::Professional,
        ))
    }

    fn valid_set() -> ContentSet {
        ContentSet::new(
            vec![
                question_with_answer("q1", "q1_a1"),
                question_with_answer("q2", "q2_a1"),
            ],
            vec![Ending::fallback()],
        )
    }

    #[test]
    fn test_valid_set_passes() {
        assert!(valid_set().validate().is_ok());
    }

    #[test]
    fn test_duplicate_question_id() {
        let mut set = valid_set();
        set.questions.push(question_with_answer("q1", "q3_a1"));
        assert!(matches!(
            set.validate(),
            Err(ContentError::DuplicateQuestionId(_))
        ));
    }

    #[test]
    fn test_duplicate_answer_id_across_questions() {
        let mut set = valid_set();
        set.questions.push(question_with_answer("q3", "q1_a1"));
        assert!(matches!(
            set.validate(),
            Err(ContentError::DuplicateAnswerId(_))
        ));
    }

    #[test]
    fn test_empty_answer_list() {
        let mut set = valid_set();
        set.questions.push(Question::new("q_bare", "prompt"));
        assert!(matches!(
            set.validate(),
            Err(ContentError::EmptyAnswerList(_))
        ));
    }

    #[test]
    fn test_dangling_contradiction() {
        let mut set = valid_set();
        set.questions.push(
            question_with_answer("q3", "q3_a1").with_contradiction(QuestionId::new("q_nowhere")),
        );
        assert!(matches!(
            set.validate(),
            Err(ContentError::DanglingContradiction { .. })
        ));
    }

    #[test]
    fn test_dangling_unlock_reference() {
        let mut set = valid_set();
        set.questions.push(
            question_with_answer("q3", "q3_a1")
                .with_unlock_condition(UnlockCondition::SpecificAnswer(QuestionId::new(
                    "q_nowhere",
                ))),
        );
        assert!(matches!(
            set.validate(),
            Err(ContentError::DanglingConditionReference { .. })
        ));
    }

    #[test]
    fn test_missing_fallback_ending() {
        let set = ContentSet::new(
            vec![question_with_answer("q1", "q1_a1")],
            vec![Ending::new("e_win", "Hired").with_condition(
                EndingCondition::any().with_total_points(PointRange::at_least(90)),
            )],
        );
        assert!(matches!(
            set.validate(),
            Err(ContentError::MissingFallbackEnding)
        ));
    }

    #[test]
    fn test_no_endings() {
        let set = ContentSet::new(vec![question_with_answer("q1", "q1_a1")], vec![]);
        assert!(matches!(set.validate(), Err(ContentError::NoEndings)));
    }

    #[test]
    fn test_load_from_toml() {
        let source = r#"
            [[questions]]
            id = "q_coffee"
            text = "How do you take your coffee?"

            [[questions.answers]]
            id = "a_black"
            text = "Black, like my quarterly reports."
            normal_points = 10
            chaos_points = 0
            answer_type = "Professional"

            [[questions.answers]]
            id = "a_intravenous"
            text = "Intravenously, during meetings."
            normal_points = 0
            chaos_points = 15
            answer_type = "AbsurdExtreme"

            [[questions]]
            id = "q_locked"
            text = "Why is there a stapler in your mouth?"
            question_type = "Secret"
            category = "Absurd"
            unlock_conditions = [{ min_chaos_points = 20 }]

            [[questions.answers]]
            id = "a_stapler"
            text = "Efficiency."
            normal_points = -5
            chaos_points = 20
            answer_type = "Sociopathic"

            [[endings]]
            id = "e_chaos"
            title = "Violently Expelled"
            description = "Security was called. Twice."

            [endings.condition]
            total_points = { min = 91 }
            required_state = "ViolentlyExpelled"

            [[endings]]
            id = "e_default"
            title = "The Interview Ends"
            description = "Nobody is ever in touch."
        "#;

        let set = ContentSet::from_toml_str(source).unwrap();
        assert_eq!(set.questions.len(), 2);
        assert_eq!(set.endings.len(), 2);

        let locked = set.question(&QuestionId::new("q_locked")).unwrap();
        assert_eq!(
            locked.unlock_conditions,
            vec![UnlockCondition::MinChaosPoints(20)]
        );
        assert!(set.ending(&EndingId::new("e_default")).unwrap().condition.is_unconditional());
    }

    #[test]
    fn test_load_from_json() {
        let source = r#"{
            "questions": [{
                "id": "q1",
                "text": "First question?",
                "answers": [{
                    "id": "a1",
                    "text": "Yes.",
                    "normal_points": 5,
                    "chaos_points": 0,
                    "answer_type": "Zen"
                }]
            }],
            "endings": [{
                "id": "e_default",
                "title": "Done",
                "description": ""
            }]
        }"#;

        let set = ContentSet::from_json_str(source).unwrap();
        assert_eq!(set.questions.len(), 1);
        assert_eq!(
            set.questions[0].answers[0].answer_type,
            AnswerType::Zen
        );
    }
}
