//! Payloads returned by [`crate::service::SessionService`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use mindcheck_core::models::category::Category;
use mindcheck_core::models::question::Question;
use mindcheck_core::models::session::SessionStatus;
use mindcheck_instruments::scale::{self, OptionView};
use mindcheck_instruments::scoring::CategoryScore;

/// A question as shown to the person answering it. Scores are withheld.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionView {
    pub id: Uuid,
    pub text: String,
    pub category: Category,
    pub options: Vec<OptionView>,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            text: q.text.clone(),
            category: q.category,
            options: scale::options_for(q),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progress {
    pub status: SessionStatus,
    pub question: Option<QuestionView>,
    /// 1-based position of `question`, or the number answered once finished.
    pub current_index: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitOutcome {
    pub status: SessionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionResult {
    pub results: Vec<CategoryScore>,
    pub dominant: Option<CategoryScore>,
    pub safety_flag: bool,
    pub has_no_symptoms: bool,
}

/// One row of a user's screening history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSummary {
    pub id: Uuid,
    pub created_at: jiff::Timestamp,
    pub status: SessionStatus,
    pub answers_count: u32,
    pub total_questions: u32,
    pub dominant: Option<CategoryScore>,
}
