use mindcheck_core::models::answer::Answer;
use mindcheck_core::models::category::Category;
use mindcheck_core::models::session::{Session, SessionStatus};
use uuid::Uuid;

#[test]
fn new_session_is_empty_and_in_progress() {
    let session = Session::new("user-1");
    assert_eq!(session.status(), SessionStatus::InProgress);
    assert_eq!(session.current_question_index(), 0);
    assert!(session.answers().is_empty());
}

#[test]
fn recording_keeps_index_equal_to_answer_count() {
    let mut session = Session::new("user-1");
    assert!(session.record_answer(Answer::new(Uuid::new_v4(), "not_at_all")));
    assert!(session.record_answer(Answer::new(Uuid::new_v4(), "several_days")));
    assert_eq!(session.current_question_index() as usize, session.answers().len());
}

#[test]
fn completed_session_rejects_answers_and_stays_completed() {
    let mut session = Session::new("user-1");
    assert!(session.complete());
    assert!(!session.complete());
    assert!(!session.record_answer(Answer::new(Uuid::new_v4(), "not_at_all")));
    assert!(session.answers().is_empty());
    assert_eq!(session.status(), SessionStatus::Completed);
}

#[test]
fn session_survives_json_round_trip() {
    let mut session = Session::new("user-1");
    session.record_answer(Answer::new(Uuid::new_v4(), "nearly_every_day"));
    let json = serde_json::to_string(&session).unwrap();
    assert!(json.contains("\"status\":\"in_progress\""));
    let back: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}

#[test]
fn category_parses_from_its_wire_name() {
    for category in Category::ALL {
        assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        assert_eq!(Category::ALL[category.index()], category);
    }
    assert!("sleep".parse::<Category>().is_err());
}
