//! Aggregation of a session's answers into per-category results.
//!
//! This is the only place answers become scores. Session progress, session
//! results and profile history all go through [`compute_result`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use mindcheck_core::models::answer::Answer;
use mindcheck_core::models::category::Category;
use mindcheck_core::models::question::Question;

use crate::{instrument_for, scale};

/// Questions by id, as resolved from the catalog for a set of answers.
pub type QuestionLookup = HashMap<Uuid, Question>;

/// Scores for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub category: Category,
    pub label: String,
    pub test_name: String,
    /// Sum of answer scores.
    pub score: u32,
    /// Sum of the best attainable score of each answered item.
    pub max_score: u32,
    /// `score / max_score`, or 0 when nothing was answered. Always in [0, 1].
    pub normalized_score: f64,
    /// Band label for the raw score.
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResult {
    /// One row per category, in canonical order.
    pub results: Vec<CategoryScore>,
    pub dominant: Option<Category>,
}

impl ScoringResult {
    pub fn get(&self, category: Category) -> &CategoryScore {
        &self.results[category.index()]
    }

    pub fn dominant_score(&self) -> Option<&CategoryScore> {
        self.dominant.map(|c| self.get(c))
    }

    /// True when no category scored at all.
    pub fn has_no_symptoms(&self) -> bool {
        self.results.iter().all(|r| r.score == 0)
    }
}

/// Score `answers` against the catalog snapshot in `lookup`.
///
/// Answers whose question is missing from `lookup` (deleted after being
/// answered) are skipped: they count toward neither score nor maximum.
pub fn compute_result(answers: &[Answer], lookup: &QuestionLookup) -> ScoringResult {
    let mut raw = [0u32; Category::ALL.len()];
    let mut max = [0u32; Category::ALL.len()];

    for answer in answers {
        let Some(question) = lookup.get(&answer.question_id) else {
            continue;
        };
        let i = question.category.index();
        raw[i] += scale::score_of(question, &answer.option);
        max[i] += scale::max_score_of(question);
    }

    let results: Vec<CategoryScore> = Category::ALL
        .into_iter()
        .map(|category| {
            let i = category.index();
            let instrument = instrument_for(category);
            CategoryScore {
                category,
                label: instrument.label().to_string(),
                test_name: instrument.test_name().to_string(),
                score: raw[i],
                max_score: max[i],
                normalized_score: normalize(raw[i], max[i]),
                severity: instrument.severity_of(raw[i]).to_string(),
            }
        })
        .collect();

    let dominant = dominant_of(&results);

    ScoringResult { results, dominant }
}

fn normalize(raw: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    // A custom option list can score below its own max, never above, but a
    // catalog edit between answering and scoring could break that.
    (f64::from(raw) / f64::from(max)).clamp(0.0, 1.0)
}

/// Strictly highest positive normalized score; earlier categories win ties.
fn dominant_of(results: &[CategoryScore]) -> Option<Category> {
    let mut best: Option<&CategoryScore> = None;
    for row in results {
        if row.normalized_score <= 0.0 {
            continue;
        }
        match best {
            Some(b) if row.normalized_score <= b.normalized_score => {}
            _ => best = Some(row),
        }
    }
    best.map(|r| r.category)
}

/// Resolve every question referenced by `answers` from a catalog listing.
pub fn lookup_from<I>(questions: I) -> QuestionLookup
where
    I: IntoIterator<Item = Question>,
{
    questions.into_iter().map(|q| (q.id, q)).collect()
}
