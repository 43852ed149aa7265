use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    SessionCreated,
    AnswerSubmitted,
    SessionCompleted,
    ResultViewed,
    SafetyFlagRaised,
    QuestionCreated,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::SessionCreated => "session_created",
            AuditAction::AnswerSubmitted => "answer_submitted",
            AuditAction::SessionCompleted => "session_completed",
            AuditAction::ResultViewed => "result_viewed",
            AuditAction::SafetyFlagRaised => "safety_flag_raised",
            AuditAction::QuestionCreated => "question_created",
        }
    }
}

/// A structured audit event.
///
/// Logged via `tracing` so it lands in the same JSON log stream as request
/// logs. Answer contents are never included; only identifiers and counts.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub resource_type: String,
    pub resource_id: String,
    pub user_sub: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: AuditAction,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        user_sub: impl Into<String>,
    ) -> Self {
        Self {
            action,
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            user_sub: user_sub.into(),
            details: None,
        }
    }

    pub fn session(action: AuditAction, session_id: impl ToString, user_sub: &str) -> Self {
        Self::new(action, "session", session_id.to_string(), user_sub)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing. Safety flags go out at warn level
    /// so they can be alerted on separately.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();

        if self.action == AuditAction::SafetyFlagRaised {
            warn!(
                audit.action = self.action.as_str(),
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.user_sub = %self.user_sub,
                audit.details = %details,
                "audit event"
            );
        } else {
            info!(
                audit.action = self.action.as_str(),
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.user_sub = %self.user_sub,
                audit.details = %details,
                "audit event"
            );
        }
    }
}
