use mindcheck_audit::events::{AuditAction, AuditEvent};

#[test]
fn session_event_carries_ids_and_details() {
    let event = AuditEvent::session(AuditAction::AnswerSubmitted, 42, "user-1")
        .with_details(serde_json::json!({ "answers": 3 }));

    assert_eq!(event.resource_type, "session");
    assert_eq!(event.resource_id, "42");

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["action"], "answer_submitted");
    assert_eq!(json["details"]["answers"], 3);

    event.emit();
}

#[test]
fn action_names_match_serialized_form() {
    for action in [
        AuditAction::SessionCreated,
        AuditAction::AnswerSubmitted,
        AuditAction::SessionCompleted,
        AuditAction::ResultViewed,
        AuditAction::SafetyFlagRaised,
        AuditAction::QuestionCreated,
    ] {
        let json = serde_json::to_value(action).unwrap();
        assert_eq!(json, action.as_str());
    }
}
