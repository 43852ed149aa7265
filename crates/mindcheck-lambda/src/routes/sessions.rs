use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use mindcheck_core::models::session::Session;
use mindcheck_session::views::{Progress, SessionResult, SubmitOutcome};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitAnswerRequest {
    pub question_id: Uuid,
    pub option: String,
}

pub async fn create_session(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<(StatusCode, Json<Session>), ApiError> {
    let session = state.service.create_session(&user.sub).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn get_progress(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Progress>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.service.get_progress(id, &user.sub).await?))
}

pub async fn submit_answer(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> Result<Json<SubmitOutcome>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;

    let status = state
        .service
        .submit_answer(id, &user.sub, body.question_id, &body.option)
        .await?;
    Ok(Json(SubmitOutcome { status }))
}

pub async fn get_result(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<SessionResult>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.service.get_result(id, &user.sub).await?))
}
