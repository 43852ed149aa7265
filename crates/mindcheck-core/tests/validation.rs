use mindcheck_core::models::category::Category;
use mindcheck_core::models::question::{NewQuestion, NewQuestionOption};
use std::collections::HashSet;

use mindcheck_core::validation::{validate_limit, validate_order_unique, validate_question};

fn new_question(text: &str, order: i64, options: Option<Vec<NewQuestionOption>>) -> NewQuestion {
    NewQuestion {
        text: text.to_string(),
        category: Some(Category::Depression),
        order: Some(order),
        is_active: None,
        options,
    }
}

fn option(value: &str, score: i64) -> NewQuestionOption {
    NewQuestionOption {
        value: value.to_string(),
        label: value.to_uppercase(),
        score,
    }
}

#[test]
fn default_scale_question_is_valid() {
    let q = new_question("Little interest or pleasure in doing things", 0, None);
    assert!(validate_question(&q, "").is_empty());
}

#[test]
fn short_text_and_negative_order_are_reported_together() {
    let q = new_question("   hi  ", -1, None);
    let errors = validate_question(&q, "");
    assert_eq!(errors.get("text").map(String::as_str), Some("Question text is too short"));
    assert_eq!(errors.get("order").map(String::as_str), Some("Order must be 0 or greater"));
}

#[test]
fn custom_options_need_two_entries_and_bounded_scores() {
    let q = new_question("Do you check things repeatedly?", 3, Some(vec![option("yes", 5)]));
    let errors = validate_question(&q, "2.");
    assert!(errors.contains_key("2.options"));
    assert_eq!(
        errors.get("2.options.0.score").map(String::as_str),
        Some("Score must be at most 4")
    );
}

#[test]
fn duplicate_option_values_are_rejected() {
    let q = new_question(
        "Do you check things repeatedly?",
        3,
        Some(vec![option("yes", 4), option(" yes ", 0)]),
    );
    let errors = validate_question(&q, "");
    assert!(errors.contains_key("options.1.value"));
}

#[test]
fn into_question_trims_and_defaults_active() {
    let q = new_question(
        "  Do you check things repeatedly?  ",
        3,
        Some(vec![option("yes", 4), option("no", 0)]),
    )
    .into_question()
    .unwrap();
    assert_eq!(q.text, "Do you check things repeatedly?");
    assert_eq!(q.order, 3);
    assert!(q.is_active);
    assert_eq!(q.custom_options().map(|o| o.len()), Some(2));
}

#[test]
fn missing_fields_are_reported_by_name() {
    let q = NewQuestion {
        text: String::new(),
        category: None,
        order: None,
        is_active: None,
        options: None,
    };
    let errors = validate_question(&q, "1.");
    assert_eq!(errors.get("1.text").map(String::as_str), Some("Question text is required"));
    assert_eq!(errors.get("1.category").map(String::as_str), Some("Category is required"));
    assert_eq!(errors.get("1.order").map(String::as_str), Some("Order is required"));
    assert!(q.into_question().is_err());
}

#[test]
fn active_orders_must_be_unique() {
    let mut taken: HashSet<u32> = [0, 1].into_iter().collect();

    let clash = new_question("Feeling down, depressed or hopeless", 1, None);
    let errors = validate_order_unique(&clash, "0.", &mut taken);
    assert!(errors.contains_key("0.order"));

    let fresh = new_question("Trouble falling or staying asleep", 2, None);
    assert!(validate_order_unique(&fresh, "1.", &mut taken).is_empty());
    let same_again = new_question("Feeling tired or having little energy", 2, None);
    assert!(validate_order_unique(&same_again, "2.", &mut taken).contains_key("2.order"));

    let mut inactive = new_question("Poor appetite or overeating", 0, None);
    inactive.is_active = Some(false);
    assert!(validate_order_unique(&inactive, "3.", &mut taken).is_empty());
}

#[test]
fn limit_bounds() {
    assert_eq!(validate_limit(None, 50), Ok(None));
    assert_eq!(validate_limit(Some(10), 50), Ok(Some(10)));
    assert!(validate_limit(Some(0), 50).unwrap_err().contains_key("limit"));
    assert!(validate_limit(Some(51), 50).is_err());
}
