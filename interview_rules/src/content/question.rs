//! Question and answer definitions.

use serde::{Deserialize, Serialize};

use super::{AnswerId, QuestionId};
use crate::mechanics::AnswerType;

/// One selectable reply to a question.
///
/// Created at content-load time and immutable thereafter; owned by exactly
/// one [`Question`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub text: String,

    /// Signed delta applied to the professional track.
    pub normal_points: i32,
    /// Signed delta applied to the chaos track.
    pub chaos_points: i32,

    pub answer_type: AnswerType,

    /// Interviewer reaction line, advisory for presentation only.
    #[serde(default)]
    pub reaction_text: String,
    /// Scene consequence line, advisory for presentation only.
    #[serde(default)]
    pub visual_consequence_text: String,
}

impl Answer {
    /// Create a new answer with the given id, display text, and archetype.
    pub fn new(id: impl Into<String>, text: impl Into<String>, answer_type: AnswerType) -> Self {
        Self {
            id: AnswerId::new(id),
            text: text.into(),
            normal_points: 0,
            chaos_points: 0,
            answer_type,
            reaction_text: String::new(),
            visual_consequence_text: String::new(),
        }
    }

    /// Set the point deltas for both tracks.
    pub fn with_points(mut self, normal: i32, chaos: i32) -> Self {
        self.normal_points = normal;
        self.chaos_points = chaos;
        self
    }

    /// Set the interviewer reaction line.
    pub fn with_reaction(mut self, text: impl Into<String>) -> Self {
        self.reaction_text = text.into();
        self
    }

    /// Set the scene consequence line.
    pub fn with_visual_consequence(mut self, text: impl Into<String>) -> Self {
        self.visual_consequence_text = text.into();
        self
    }
}

/// Question tiers, in selection-preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuestionType {
    #[default]
    Base,
    Special,
    Secret,
}

impl QuestionType {
    /// Selection rank: lower is preferred. Base before Special before Secret.
    pub fn rank(&self) -> u8 {
        match self {
            QuestionType::Base => 0,
            QuestionType::Special => 1,
            QuestionType::Secret => 2,
        }
    }
}

/// Authoring categories for questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuestionCategory {
    #[default]
    General,
    Personality,
    Experience,
    Ethics,
    Absurd,
    Meta,
}

/// A single eligibility predicate attached to a question.
///
/// A question becomes eligible only when all of its conditions hold
/// (logical AND); a question with no conditions is always eligible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockCondition {
    /// `normal_points >= v` (inclusive).
    MinNormalPoints(i32),
    /// `chaos_points >= v` (inclusive).
    MinChaosPoints(i32),
    /// `normal_points <= v` (inclusive).
    MaxNormalPoints(i32),
    /// `chaos_points <= v` (inclusive).
    MaxChaosPoints(i32),
    /// Current mood is exactly Tense (not "at least").
    StateTense,
    /// Current mood is exactly Chaos.
    StateChaos,
    /// The referenced question has been answered (any answer counts).
    SpecificAnswer(QuestionId),
}

/// A prompt with a fixed ordered list of answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,

    /// Ordered answer list; non-empty by construction contract,
    /// enforced by catalog validation.
    pub answers: Vec<Answer>,

    #[serde(default)]
    pub question_type: QuestionType,

    #[serde(default)]
    pub category: QuestionCategory,

    /// Eligibility predicates; empty means always eligible.
    #[serde(default)]
    pub unlock_conditions: Vec<UnlockCondition>,

    /// Once the referenced question has been answered, this one is
    /// never asked.
    #[serde(default)]
    pub contradicts_question_id: Option<QuestionId>,
}

impl Question {
    /// Create a new question with the given id and prompt text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            answers: Vec::new(),
            question_type: QuestionType::Base,
            category: QuestionCategory::General,
            unlock_conditions: Vec::new(),
            contradicts_question_id: None,
        }
    }

    /// Append an answer to the ordered list.
    pub fn with_answer(mut self, answer: Answer) -> Self {
        self.answers.push(answer);
        self
    }

    /// Set the question tier.
    pub fn with_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = question_type;
        self
    }

    /// Set the authoring category.
    pub fn with_category(mut self, category: QuestionCategory) -> Self {
        self.category = category;
        self
    }

    /// Add an unlock condition.
    pub fn with_unlock_condition(mut self, condition: UnlockCondition) -> Self {
        self.unlock_conditions.push(condition);
        self
    }

    /// Mark this question as contradicting another.
    pub fn with_contradiction(mut self, question_id: QuestionId) -> Self {
        self.contradicts_question_id = Some(question_id);
        self
    }

    /// Look up an answer by its position in the authored list.
    pub fn answer_at(&self, index: usize) -> Option<&Answer> {
        self.answers.get(index)
    }
}
