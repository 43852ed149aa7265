use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Query, State};
use axum::Json;
use serde::Deserialize;

use mindcheck_core::validation;
use mindcheck_session::service::MAX_HISTORY_LIMIT;
use mindcheck_session::views::SessionSummary;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

pub async fn list_sessions(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    let Query(query) = query?;
    let limit = validation::validate_limit(query.limit, MAX_HISTORY_LIMIT as i64)
        .map_err(ApiError::Validation)?;

    Ok(Json(state.service.history(&user.sub, limit).await?))
}
