#![allow(dead_code)]

use mindcheck_core::models::answer::Answer;
use mindcheck_core::models::category::Category;
use mindcheck_core::models::question::{Question, QuestionOption};
use uuid::Uuid;

pub fn scale_question(category: Category, order: u32) -> Question {
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

pub fn custom_question(category: Category, order: u32, options: &[(&str, u32)]) -> Question {
    let mut q = scale_question(category, order);
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

pub fn answer(question: &Question, option: &str) -> Answer {
    Answer::new(question.id, option)
}
