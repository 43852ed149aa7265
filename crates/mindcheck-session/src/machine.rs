//! The session state machine.
//!
//! States are `in_progress` (initial) and `completed` (terminal). Progress is
//! the count of accepted answers: the question expected next is the active
//! question at that position in the catalog. Every function here is pure
//! over its arguments; persistence happens in [`crate::service`].

use uuid::Uuid;

use mindcheck_core::models::answer::Answer;
use mindcheck_core::models::question::Question;
use mindcheck_core::models::session::{Session, SessionStatus};
use mindcheck_instruments::scale;
use mindcheck_storage::catalog::active_sorted;

use crate::error::SessionError;

/// Active questions in presentation order.
#[derive(Debug, Clone, Default)]
pub struct ActiveCatalog {
    questions: Vec<Question>,
}

impl ActiveCatalog {
    /// Drops inactive questions and sorts the rest by `order`.
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Self {
        Self {
            questions: active_sorted(questions),
        }
    }

    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    /// The question expected when `index` answers have been accepted.
    pub fn at(&self, index: u32) -> Option<&Question> {
        self.questions.get(index as usize)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// The question to present next.
#[derive(Debug, Clone, Copy)]
pub struct NextQuestion<'a> {
    pub question: &'a Question,
    /// 1-based position of `question`.
    pub position: u32,
    pub total: u32,
}

/// Start a session for `user_id`.
pub fn create(user_id: impl Into<String>) -> Session {
    Session::new(user_id)
}

/// The next question for `session`, or `None` once there is nothing left to
/// answer. Reaching the end marks the session completed.
pub fn next_question<'a>(
    session: &mut Session,
    catalog: &'a ActiveCatalog,
) -> Option<NextQuestion<'a>> {
    if session.is_completed() {
        return None;
    }

    let index = session.current_question_index();
    match catalog.at(index) {
        Some(question) => Some(NextQuestion {
            question,
            position: index + 1,
            total: catalog.total(),
        }),
        None => {
            session.complete();
            None
        }
    }
}

/// Validate and record one answer.
///
/// On any error the answer list and index are left untouched. The only
/// state change on the error path is completing a session whose catalog
/// shrank below its index.
pub fn submit_answer(
    session: &mut Session,
    question_id: Uuid,
    option: &str,
    catalog: &ActiveCatalog,
) -> Result<SessionStatus, SessionError> {
    if session.is_completed() {
        return Err(SessionError::SessionCompleted);
    }

    let index = session.current_question_index();
    let Some(expected) = catalog.at(index) else {
        session.complete();
        return Err(SessionError::SessionCompleted);
    };

    if expected.id != question_id {
        return Err(SessionError::OutOfOrder {
            expected: expected.id,
            received: question_id,
        });
    }

    if !scale::accepts(expected, option) {
        return Err(SessionError::InvalidOption {
            question_id,
            option: option.to_string(),
        });
    }

    session.record_answer(Answer::new(question_id, option));

    if session.current_question_index() >= catalog.total() {
        session.complete();
    }

    Ok(session.status())
}
