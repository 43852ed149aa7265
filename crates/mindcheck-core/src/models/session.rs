use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionStatus {
    InProgress,
    Completed,
}

/// One user's pass through the question catalog.
///
/// `answers`, `current_question_index` and `status` are only mutated through
/// [`Session::record_answer`] and [`Session::complete`], which keep
/// `current_question_index == answers.len()` and never move a completed
/// session back to in-progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub id: Uuid,
    pub user_id: String,
    answers: Vec<Answer>,
    current_question_index: u32,
    status: SessionStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            answers: Vec::new(),
            current_question_index: 0,
            status: SessionStatus::InProgress,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn current_question_index(&self) -> u32 {
        self.current_question_index
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Append an answer and advance the index. Callers validate first;
    /// this only refuses writes to a completed session.
    pub fn record_answer(&mut self, answer: Answer) -> bool {
        if self.is_completed() {
            return false;
        }
        self.answers.push(answer);
        self.current_question_index = self.answers.len() as u32;
        self.updated_at = jiff::Timestamp::now();
        true
    }

    /// Move to the terminal state. Returns `true` if the status changed.
    pub fn complete(&mut self) -> bool {
        if self.is_completed() {
            return false;
        }
        self.status = SessionStatus::Completed;
        self.updated_at = jiff::Timestamp::now();
        true
    }
}
