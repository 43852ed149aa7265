use thiserror::Error;
use uuid::Uuid;

use mindcheck_core::validation::FieldErrors;
use mindcheck_storage::error::StorageError;

/// Expected, caller-recoverable outcomes of session operations, plus
/// collaborator failures.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid input")]
    Validation(FieldErrors),

    #[error("session is already completed")]
    SessionCompleted,

    #[error("expected an answer for question {expected}, got {received}")]
    OutOfOrder { expected: Uuid, received: Uuid },

    #[error("option '{option}' is not valid for question {question_id}")]
    InvalidOption { question_id: Uuid, option: String },

    #[error("session was modified concurrently")]
    Conflict,

    #[error("storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for SessionError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::PreconditionFailed { .. } => SessionError::Conflict,
            other => SessionError::Storage(other),
        }
    }
}

impl SessionError {
    /// Stable machine-readable code surfaced to clients.
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::NotFound(_) => "not_found",
            SessionError::Validation(_) => "validation_error",
            SessionError::SessionCompleted => "session_completed",
            SessionError::OutOfOrder { .. } => "out_of_order",
            SessionError::InvalidOption { .. } => "invalid_option",
            SessionError::Conflict => "conflict",
            SessionError::Storage(_) => "server_error",
        }
    }
}
