#![allow(dead_code)]

use std::sync::Arc;

use mindcheck_core::models::category::Category;
use mindcheck_core::models::question::{Question, QuestionOption};
use mindcheck_instruments::safety::SafetyPolicy;
use mindcheck_session::service::SessionService;
use mindcheck_storage::memory::MemoryStore;
use uuid::Uuid;

pub fn question(category: Category, order: u32) -> Question {
    let now = jiff::Timestamp::now();
    Question {
        id: Uuid::new_v4(),
        text: format!("{category} item {order}"),
        category,
        order,
        is_active: true,
        options: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn with_options(mut q: Question, options: &[(&str, u32)]) -> Question {
    q.options = Some(
        options
            .iter()
            .map(|(value, score)| QuestionOption {
                value: value.to_string(),
                label: value.to_string(),
                score: *score,
            })
            .collect(),
    );
    q
}

pub async fn service_with(
    questions: Vec<Question>,
    safety: SafetyPolicy,
) -> (SessionService, MemoryStore) {
    let store = MemoryStore::with_questions(questions).await;
    let service = SessionService::new(Arc::new(store.clone()), Arc::new(store.clone()), safety);
    (service, store)
}
