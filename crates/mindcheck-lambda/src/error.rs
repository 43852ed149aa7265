use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use mindcheck_auth::error::AuthError;
use mindcheck_core::validation::{self, FieldErrors};
use mindcheck_session::error::SessionError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    NotFound(String),
    Validation(FieldErrors),
    /// A request the session state machine refused. Built only through
    /// `From<SessionError>`, which routes the other kinds elsewhere.
    Session(SessionError),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_errors: Option<FieldErrors>,
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::NotFound(_) => "not_found",
            ApiError::Validation(_) => "validation_error",
            ApiError::Session(e) => e.code(),
            ApiError::Internal(_) => "server_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Session(SessionError::InvalidOption { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Session(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let (message, field_errors) = match self {
            ApiError::Unauthorized(msg) | ApiError::NotFound(msg) => (msg, None),
            ApiError::Validation(fields) => ("Invalid input".to_string(), Some(fields)),
            ApiError::Session(e) => (e.to_string(), None),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                ("internal server error".to_string(), None)
            }
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message,
                field_errors,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound(what) => ApiError::NotFound(format!("{what} not found")),
            SessionError::Validation(fields) => ApiError::Validation(fields),
            SessionError::Storage(e) => ApiError::Internal(e.to_string()),
            other => ApiError::Session(other),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        tracing::debug!(error = %e, "rejected credentials");
        match e {
            AuthError::MissingToken => ApiError::Unauthorized("missing bearer token".to_string()),
            AuthError::TokenExpired => ApiError::Unauthorized("token expired".to_string()),
            _ => ApiError::Unauthorized("invalid token".to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation(validation::single("body", &e.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::Validation(validation::single("query", &e.body_text()))
    }
}

/// Malformed ids cannot name an existing resource.
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::NotFound("not found".to_string())
    }
}
