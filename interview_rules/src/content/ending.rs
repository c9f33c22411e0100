//! Ending definitions - terminal narrative outcomes and their conditions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{AnswerId, EndingId};
use crate::mechanics::{AnswerType, InterviewState};

/// Inclusive bounds on one point axis. `None` on either side means no bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PointRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl PointRange {
    /// A range with no bounds; matches any value.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// At least `min`, inclusive.
    pub fn at_least(min: i32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// At most `max`, inclusive.
    pub fn at_most(max: i32) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Between `min` and `max`, both inclusive.
    pub fn between(min: i32, max: i32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Whether the value satisfies both bounds.
    pub fn contains(&self, value: i32) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Whether neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Conjunction of optional checks an ending requires.
///
/// A field left unset never excludes a candidate; all set fields must hold
/// simultaneously for the ending to match. A condition with no fields set
/// matches any state (the catch-all form).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EndingCondition {
    #[serde(default)]
    pub total_points: PointRange,
    #[serde(default)]
    pub normal_points: PointRange,
    #[serde(default)]
    pub chaos_points: PointRange,

    /// Exact mood match, if set.
    #[serde(default)]
    pub required_state: Option<InterviewState>,

    /// Exact match against the most-frequent answer archetype, if set.
    #[serde(default)]
    pub predominant_answer_type: Option<AnswerType>,

    /// Every listed answer must appear in the answer history.
    #[serde(default)]
    pub required_answer_ids: HashSet<AnswerId>,
}

impl EndingCondition {
    /// The catch-all condition: no fields set, matches any state.
    pub fn any() -> Self {
        Self::default()
    }

    /// Whether no field is set, i.e. this condition matches any state.
    pub fn is_unconditional(&self) -> bool {
        self.total_points.is_unbounded()
            && self.normal_points.is_unbounded()
            && self.chaos_points.is_unbounded()
            && self.required_state.is_none()
            && self.predominant_answer_type.is_none()
            && self.required_answer_ids.is_empty()
    }

    /// Bound the total-points axis.
    pub fn with_total_points(mut self, range: PointRange) -> Self {
        self.total_points = range;
        self
    }

    /// Bound the normal-points axis.
    pub fn with_normal_points(mut self, range: PointRange) -> Self {
        self.normal_points = range;
        self
    }

    /// Bound the chaos-points axis.
    pub fn with_chaos_points(mut self, range: PointRange) -> Self {
        self.chaos_points = range;
        self
    }

    /// Require an exact mood.
    pub fn with_required_state(mut self, state: InterviewState) -> Self {
        self.required_state = Some(state);
        self
    }

    /// Require a predominant answer archetype.
    pub fn with_predominant_type(mut self, answer_type: AnswerType) -> Self {
        self.predominant_answer_type = Some(answer_type);
        self
    }

    /// Require an answer to appear in the history.
    pub fn with_required_answer(mut self, answer_id: AnswerId) -> Self {
        self.required_answer_ids.insert(answer_id);
        self
    }
}

/// A terminal narrative outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ending {
    pub id: EndingId,
    pub title: String,
    pub description: String,

    #[serde(default)]
    pub condition: EndingCondition,
}

impl Ending {
    /// Create a new ending with a catch-all condition.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: EndingId::new(id),
            title: title.into(),
            description: String::new(),
            condition: EndingCondition::any(),
        }
    }

    /// Set the narrative description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the match condition.
    pub fn with_condition(mut self, condition: EndingCondition) -> Self {
        self.condition = condition;
        self
    }

    /// The built-in fail-closed ending, returned when no authored ending
    /// matches a terminal state.
    pub fn fallback() -> Self {
        Ending::new("ending_default", "The Interview Ends").with_description(
            "The interviewer closes the folder, thanks you for your time, \
             and promises to be in touch. Nobody is ever in touch.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_range_bounds_are_inclusive() {
        let range = PointRange::between(10, 20);
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));

        assert!(PointRange::at_least(5).contains(5));
        assert!(PointRange::at_most(5).contains(5));
        assert!(PointRange::unbounded().contains(i32::MIN));
        assert!(PointRange::unbounded().contains(i32::MAX));
    }

    #[test]
    fn test_unconditional_detection() {
        assert!(EndingCondition::any().is_unconditional());
        assert!(!EndingCondition::any()
            .with_total_points(PointRange::at_least(90))
            .is_unconditional());
        assert!(!EndingCondition::any()
            .with_required_state(InterviewState::Chaos)
            .is_unconditional());
        assert!(!EndingCondition::any()
            .with_required_answer(AnswerId::new("a_stapler"))
            .is_unconditional());
    }

    #[test]
    fn test_fallback_ending_matches_anything() {
        let fallback = Ending::fallback();
        assert!(fallback.condition.is_unconditional());
        assert_eq!(fallback.id.as_str(), "ending_default");
    }
}
