mod common;

use mindcheck_core::models::category::Category;
use mindcheck_instruments::scale::{accepts, max_score_of, options_for, score_of, DefaultScale};

use common::{custom_question, scale_question};

#[test]
fn default_scale_scores_zero_to_three() {
    let q = scale_question(Category::Depression, 0);
    assert_eq!(score_of(&q, "not_at_all"), 0);
    assert_eq!(score_of(&q, "several_days"), 1);
    assert_eq!(score_of(&q, "more_than_half"), 2);
    assert_eq!(score_of(&q, "nearly_every_day"), 3);
    assert_eq!(max_score_of(&q), 3);
}

#[test]
fn unrecognized_default_token_scores_zero_and_is_not_accepted() {
    let q = scale_question(Category::Anxiety, 0);
    assert_eq!(score_of(&q, "always"), 0);
    assert!(!accepts(&q, "always"));
    assert!(accepts(&q, "several_days"));
}

#[test]
fn custom_options_replace_the_default_scale() {
    let q = custom_question(Category::Ocd, 0, &[("yes", 4), ("no", 0)]);
    assert_eq!(score_of(&q, "yes"), 4);
    assert_eq!(score_of(&q, "no"), 0);
    assert_eq!(max_score_of(&q), 4);
    assert!(!accepts(&q, "several_days"));
    assert_eq!(score_of(&q, "several_days"), 0);
}

#[test]
fn empty_custom_list_falls_back_to_default_scale() {
    let mut q = scale_question(Category::Stress, 0);
    q.options = Some(Vec::new());
    assert!(accepts(&q, "nearly_every_day"));
    assert_eq!(max_score_of(&q), 3);
    assert_eq!(options_for(&q).len(), 4);
}

#[test]
fn default_options_carry_labels_in_scale_order() {
    let q = scale_question(Category::Depression, 0);
    let views = options_for(&q);
    let values: Vec<_> = views.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(
        values,
        ["not_at_all", "several_days", "more_than_half", "nearly_every_day"]
    );
    assert_eq!(views[2].label, "More than half the days");
    assert_eq!(DefaultScale::from_token("more_than_half"), Some(DefaultScale::MoreThanHalf));
}
