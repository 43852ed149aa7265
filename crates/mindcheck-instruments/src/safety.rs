//! Elevated-risk answer detection.
//!
//! Which items count as high-risk (typically PHQ-9 item 9) is deployment
//! policy, not scoring logic, so the watched set is configured rather than
//! hard-coded. Evaluation resolves scores through the same scale registry
//! and question lookup as [`crate::scoring::compute_result`].

use std::collections::HashSet;

use uuid::Uuid;

use mindcheck_core::models::answer::Answer;

use crate::scale;
use crate::scoring::QuestionLookup;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafetyPolicy {
    pub watched_questions: HashSet<Uuid>,
    /// An answer to a watched question at or above this score raises the
    /// flag. Zero is treated as one: a zero-scored answer is never positive.
    pub min_score: u32,
}

impl SafetyPolicy {
    pub fn new(watched_questions: impl IntoIterator<Item = Uuid>, min_score: u32) -> Self {
        Self {
            watched_questions: watched_questions.into_iter().collect(),
            min_score,
        }
    }

    /// Parse a comma-separated list of question ids, as read from config.
    pub fn parse_watched(list: &str) -> Result<Vec<Uuid>, uuid::Error> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Uuid::parse_str)
            .collect()
    }

    pub fn evaluate(&self, answers: &[Answer], lookup: &QuestionLookup) -> bool {
        if self.watched_questions.is_empty() {
            return false;
        }
        answers
            .iter()
            .filter(|a| self.watched_questions.contains(&a.question_id))
            .filter_map(|a| lookup.get(&a.question_id).map(|q| scale::score_of(q, &a.option)))
            .any(|score| score >= self.min_score.max(1))
    }
}
