//! Field-level validation of catalog input.
//!
//! Errors are collected into a field → message map rather than failing on the
//! first problem, so a client can highlight every offending field at once.

use std::collections::{BTreeMap, HashSet};

use crate::models::question::NewQuestion;

pub type FieldErrors = BTreeMap<String, String>;

pub const TEXT_MIN_CHARS: usize = 5;
pub const TEXT_MAX_CHARS: usize = 500;
pub const OPTION_SCORE_MAX: i64 = 4;
pub const MIN_OPTIONS: usize = 2;

/// Validate a question definition. `prefix` namespaces field names when a
/// batch is submitted (e.g. `"1."` yields `"1.text"`).
pub fn validate_question(question: &NewQuestion, prefix: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let field = |name: &str| format!("{prefix}{name}");

    let text_len = question.text.trim().chars().count();
    if text_len == 0 {
        errors.insert(field("text"), "Question text is required".to_string());
    } else if text_len < TEXT_MIN_CHARS {
        errors.insert(field("text"), "Question text is too short".to_string());
    } else if text_len > TEXT_MAX_CHARS {
        errors.insert(field("text"), "Question text is too long".to_string());
    }

    if question.category.is_none() {
        errors.insert(field("category"), "Category is required".to_string());
    }

    match question.order {
        None => {
            errors.insert(field("order"), "Order is required".to_string());
        }
        Some(order) if order < 0 => {
            errors.insert(field("order"), "Order must be 0 or greater".to_string());
        }
        Some(order) if u32::try_from(order).is_err() => {
            errors.insert(field("order"), "Order is too large".to_string());
        }
        Some(_) => {}
    }

    if let Some(options) = &question.options {
        if options.len() < MIN_OPTIONS {
            errors.insert(
                field("options"),
                "Provide at least two options".to_string(),
            );
        }

        let mut seen = HashSet::new();
        for (i, option) in options.iter().enumerate() {
            let value = option.value.trim();
            if value.is_empty() {
                errors.insert(
                    field(&format!("options.{i}.value")),
                    "Option value is required".to_string(),
                );
            } else if !seen.insert(value) {
                errors.insert(
                    field(&format!("options.{i}.value")),
                    "Option values must be unique".to_string(),
                );
            }
            if option.label.trim().is_empty() {
                errors.insert(
                    field(&format!("options.{i}.label")),
                    "Option label is required".to_string(),
                );
            }
            if option.score < 0 {
                errors.insert(
                    field(&format!("options.{i}.score")),
                    "Score must be at least 0".to_string(),
                );
            } else if option.score > OPTION_SCORE_MAX {
                errors.insert(
                    field(&format!("options.{i}.score")),
                    "Score must be at most 4".to_string(),
                );
            }
        }
    }

    errors
}

/// Reject an active question whose position is already in `taken`, and
/// claim the position otherwise. `taken` starts as the orders of the active
/// catalog and accumulates across a batch.
pub fn validate_order_unique(
    question: &NewQuestion,
    prefix: &str,
    taken: &mut HashSet<u32>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !question.is_active.unwrap_or(true) {
        return errors;
    }
    let Some(order) = question.order.and_then(|o| u32::try_from(o).ok()) else {
        return errors;
    };
    if !taken.insert(order) {
        errors.insert(
            format!("{prefix}order"),
            "Order is already used by another active question".to_string(),
        );
    }
    errors
}

/// Validate an optional history `limit` query parameter.
pub fn validate_limit(limit: Option<i64>, max: i64) -> Result<Option<usize>, FieldErrors> {
    match limit {
        None => Ok(None),
        Some(n) if n < 1 => Err(single("limit", "Limit must be at least 1")),
        Some(n) if n > max => Err(single("limit", &format!("Limit must be {max} or less"))),
        Some(n) => Ok(Some(n as usize)),
    }
}

pub fn single(field: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), message.to_string());
    errors
}
