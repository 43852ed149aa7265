use axum::http::StatusCode;
use uuid::Uuid;

use mindcheck_core::validation;
use mindcheck_lambda::error::ApiError;
use mindcheck_session::error::SessionError;
use mindcheck_storage::error::StorageError;

fn mapped(e: SessionError) -> (StatusCode, &'static str) {
    let api = ApiError::from(e);
    (api.status(), api.code())
}

#[test]
fn session_errors_map_to_taxonomy() {
    assert_eq!(
        mapped(SessionError::NotFound("session")),
        (StatusCode::NOT_FOUND, "not_found")
    );
    assert_eq!(
        mapped(SessionError::Validation(validation::single("order", "bad"))),
        (StatusCode::BAD_REQUEST, "validation_error")
    );
    assert_eq!(
        mapped(SessionError::SessionCompleted),
        (StatusCode::CONFLICT, "session_completed")
    );
    assert_eq!(
        mapped(SessionError::OutOfOrder {
            expected: Uuid::new_v4(),
            received: Uuid::new_v4(),
        }),
        (StatusCode::CONFLICT, "out_of_order")
    );
    assert_eq!(
        mapped(SessionError::InvalidOption {
            question_id: Uuid::new_v4(),
            option: "x".to_string(),
        }),
        (StatusCode::UNPROCESSABLE_ENTITY, "invalid_option")
    );
    assert_eq!(mapped(SessionError::Conflict), (StatusCode::CONFLICT, "conflict"));
}

#[test]
fn storage_failures_become_server_errors() {
    let e = SessionError::from(StorageError::GetObject("timeout".to_string()));
    let api = ApiError::from(e);
    assert!(matches!(api, ApiError::Internal(_)));
    assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(api.code(), "server_error");

    let lost_race = SessionError::from(StorageError::PreconditionFailed {
        key: "sessions/x".to_string(),
    });
    assert_eq!(ApiError::from(lost_race).status(), StatusCode::CONFLICT);
}
