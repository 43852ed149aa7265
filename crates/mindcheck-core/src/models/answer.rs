use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A single recorded response. Immutable once appended to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: Uuid,
    /// The option token the user picked, e.g. `"several_days"` or `"yes"`.
    pub option: String,
    pub answered_at: jiff::Timestamp,
}

impl Answer {
    pub fn new(question_id: Uuid, option: impl Into<String>) -> Self {
        Self {
            question_id,
            option: option.into(),
            answered_at: jiff::Timestamp::now(),
        }
    }
}
