//! Interview mechanics: answer archetypes, dispositions, and mood states.

use serde::{Deserialize, Serialize};

/// All answer archetypes in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerType {
    // Composed
    Professional,
    AbsurdCoherent,
    Zen,

    // Unhinged
    Aggressive,
    AbsurdExtreme,
    Sociopathic,
}

impl AnswerType {
    /// Get the disposition this archetype leans toward.
    pub fn disposition(&self) -> Disposition {
        match self {
            AnswerType::Professional | AnswerType::AbsurdCoherent | AnswerType::Zen => {
                Disposition::Composed
            }
            AnswerType::Aggressive | AnswerType::AbsurdExtreme | AnswerType::Sociopathic => {
                Disposition::Unhinged
            }
        }
    }
}

/// Coarse grouping of answer archetypes, used to split the endgame mood.
///
/// A history leaning `Composed` resolves the 91+ bracket to `HiredByMistake`;
/// one leaning `Unhinged` resolves it to `ViolentlyExpelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    Composed,
    Unhinged,
}

/// The discrete mood of the interview, derived from accumulated points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterviewState {
    #[default]
    Normal,
    Tense,
    Chaos,
    HiredByMistake,
    ViolentlyExpelled,
}

impl InterviewState {
    /// Whether this mood is one of the two terminal-bracket moods.
    pub fn is_endgame(&self) -> bool {
        matches!(
            self,
            InterviewState::HiredByMistake | InterviewState::ViolentlyExpelled
        )
    }
}

impl std::fmt::Display for InterviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InterviewState::Normal => "Normal",
            InterviewState::Tense => "Tense",
            InterviewState::Chaos => "Chaos",
            InterviewState::HiredByMistake => "Hired by Mistake",
            InterviewState::ViolentlyExpelled => "Violently Expelled",
        };
        write!(f, "{}", label)
    }
}
