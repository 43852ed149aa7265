//! Answer-token → score resolution.
//!
//! Most questions share the default 4-point frequency scale. A question may
//! instead carry its own option list (yes/no, multi-choice) with per-option
//! scores; when it does, only those tokens are accepted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindcheck_core::models::question::Question;

/// The global frequency scale shared by PHQ-9/GAD-7 style items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DefaultScale {
    NotAtAll,
    SeveralDays,
    MoreThanHalf,
    NearlyEveryDay,
}

impl DefaultScale {
    pub const ALL: [DefaultScale; 4] = [
        DefaultScale::NotAtAll,
        DefaultScale::SeveralDays,
        DefaultScale::MoreThanHalf,
        DefaultScale::NearlyEveryDay,
    ];

    /// Highest score on the default scale.
    pub const MAX_SCORE: u32 = 3;

    /// Stable wire token. Never changes once published.
    pub fn token(&self) -> &'static str {
        match self {
            DefaultScale::NotAtAll => "not_at_all",
            DefaultScale::SeveralDays => "several_days",
            DefaultScale::MoreThanHalf => "more_than_half",
            DefaultScale::NearlyEveryDay => "nearly_every_day",
        }
    }

    /// Display label. Safe to reword.
    pub fn label(&self) -> &'static str {
        match self {
            DefaultScale::NotAtAll => "Not at all",
            DefaultScale::SeveralDays => "Several days",
            DefaultScale::MoreThanHalf => "More than half the days",
            DefaultScale::NearlyEveryDay => "Nearly every day",
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            DefaultScale::NotAtAll => 0,
            DefaultScale::SeveralDays => 1,
            DefaultScale::MoreThanHalf => 2,
            DefaultScale::NearlyEveryDay => 3,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.token() == token)
    }
}

/// An option as presented to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionView {
    pub value: String,
    pub label: String,
}

/// Score for `token` on `question`. Unknown tokens score 0; validation is
/// expected to have rejected them before they were recorded.
pub fn score_of(question: &Question, token: &str) -> u32 {
    match question.custom_options() {
        Some(options) => options
            .iter()
            .find(|o| o.value == token)
            .map(|o| o.score)
            .unwrap_or(0),
        None => DefaultScale::from_token(token)
            .map(|s| s.score())
            .unwrap_or(0),
    }
}

/// The best score attainable on `question`.
pub fn max_score_of(question: &Question) -> u32 {
    match question.custom_options() {
        Some(options) => options.iter().map(|o| o.score).max().unwrap_or(0),
        None => DefaultScale::MAX_SCORE,
    }
}

/// Whether `token` is in the question's accepted set.
pub fn accepts(question: &Question, token: &str) -> bool {
    match question.custom_options() {
        Some(options) => options.iter().any(|o| o.value == token),
        None => DefaultScale::from_token(token).is_some(),
    }
}

/// The options a client should render for `question`.
pub fn options_for(question: &Question) -> Vec<OptionView> {
    match question.custom_options() {
        Some(options) => options
            .iter()
            .map(|o| OptionView {
                value: o.value.clone(),
                label: o.label.clone(),
            })
            .collect(),
        None => DefaultScale::ALL
            .iter()
            .map(|s| OptionView {
                value: s.token().to_string(),
                label: s.label().to_string(),
            })
            .collect(),
    }
}
