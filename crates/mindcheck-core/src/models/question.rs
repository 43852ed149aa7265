use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::category::Category;
use crate::error::CoreError;

/// A questionnaire item in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub category: Category,
    /// Zero-based position among active questions.
    pub order: u32,
    pub is_active: bool,
    /// Bespoke options. `None` or empty means the default 4-point scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuestionOption>>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Question {
    /// Custom options, if this question defines a non-empty list.
    pub fn custom_options(&self) -> Option<&[QuestionOption]> {
        self.options.as_deref().filter(|opts| !opts.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
    pub score: u32,
}

/// A question definition as submitted by a catalog administrator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
///
/// Required fields default to empty when absent so that validation can
/// report each one by name.
pub struct NewQuestion {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub options: Option<Vec<NewQuestionOption>>,
}

/// Option scores are taken as signed so out-of-range input reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewQuestionOption {
    pub value: String,
    pub label: String,
    pub score: i64,
}

impl NewQuestion {
    /// Build the catalog entry. Call [`crate::validation::validate_question`] first.
    pub fn into_question(self) -> Result<Question, CoreError> {
        let category = self.category.ok_or(CoreError::MissingField("category"))?;
        let order = self
            .order
            .and_then(|o| u32::try_from(o).ok())
            .ok_or(CoreError::MissingField("order"))?;
        let now = jiff::Timestamp::now();
        Ok(Question {
            id: Uuid::new_v4(),
            text: self.text.trim().to_string(),
            category,
            order,
            is_active: self.is_active.unwrap_or(true),
            options: self.options.map(|opts| {
                opts.into_iter()
                    .map(|o| QuestionOption {
                        value: o.value.trim().to_string(),
                        label: o.label.trim().to_string(),
                        score: u32::try_from(o.score).unwrap_or(0),
                    })
                    .collect()
            }),
            created_at: now,
            updated_at: now,
        })
    }
}
