use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use serde_path_to_error::Segment;

use mindcheck_core::models::question::{NewQuestion, Question};
use mindcheck_core::validation::{self, FieldErrors};
use mindcheck_session::views::QuestionView;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionView>>, ApiError> {
    Ok(Json(state.service.list_questions().await?))
}

/// Accepts a single definition or an array of them.
pub async fn create_questions(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<Question>>), ApiError> {
    let Json(payload) = payload?;
    let (definitions, batch) = parse_definitions(payload)?;

    let created = state
        .service
        .create_questions(definitions, batch, &user.sub)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Deserialize each item on its own so a type error is reported under the
/// field that caused it (`"category"`, `"1.options.0.score"`).
pub fn parse_definitions(payload: Value) -> Result<(Vec<NewQuestion>, bool), ApiError> {
    let (items, batch) = match payload {
        Value::Array(items) => (items, true),
        item @ Value::Object(_) => (vec![item], false),
        _ => {
            return Err(ApiError::Validation(validation::single(
                "body",
                "Expected a question or an array of questions",
            )));
        }
    };

    let mut errors = FieldErrors::new();
    let mut definitions = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        let prefix = if batch { format!("{i}.") } else { String::new() };
        let parsed: Result<NewQuestion, _> = serde_path_to_error::deserialize(item);
        match parsed {
            Ok(def) => definitions.push(def),
            Err(e) => {
                let field = field_path(e.path().iter());
                let field = if field.is_empty() {
                    format!("{prefix}body")
                } else {
                    format!("{prefix}{field}")
                };
                errors.insert(field, e.inner().to_string());
            }
        }
    }

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    Ok((definitions, batch))
}

fn field_path<'a>(segments: impl Iterator<Item = &'a Segment>) -> String {
    segments
        .filter_map(|segment| match segment {
            Segment::Seq { index } => Some(index.to_string()),
            Segment::Map { key } => Some(key.clone()),
            Segment::Enum { variant } => Some(variant.clone()),
            Segment::Unknown => None,
        })
        .collect::<Vec<_>>()
        .join(".")
}
