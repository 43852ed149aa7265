//! Session operations against the catalog and session store.
//!
//! Each call loads what it needs, runs the pure state machine or scoring
//! engine, and writes back with a version check. A write that loses a race
//! fails with [`SessionError::Conflict`] and is not retried here.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use mindcheck_audit::events::{AuditAction, AuditEvent};
use mindcheck_core::models::question::{NewQuestion, Question};
use mindcheck_core::models::session::{Session, SessionStatus};
use mindcheck_core::validation::{self, FieldErrors};
use mindcheck_instruments::safety::SafetyPolicy;
use mindcheck_instruments::scoring::{self, QuestionLookup};
use mindcheck_storage::catalog::QuestionCatalog;
use mindcheck_storage::sessions::SessionStore;
use mindcheck_storage::state::Versioned;

use crate::error::SessionError;
use crate::machine::{self, ActiveCatalog};
use crate::views::{Progress, QuestionView, SessionResult, SessionSummary};

pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const MAX_HISTORY_LIMIT: usize = 50;

#[derive(Clone)]
pub struct SessionService {
    catalog: Arc<dyn QuestionCatalog>,
    sessions: Arc<dyn SessionStore>,
    safety: SafetyPolicy,
}

impl SessionService {
    pub fn new(
        catalog: Arc<dyn QuestionCatalog>,
        sessions: Arc<dyn SessionStore>,
        safety: SafetyPolicy,
    ) -> Self {
        Self {
            catalog,
            sessions,
            safety,
        }
    }

    pub async fn create_session(&self, user_id: &str) -> Result<Session, SessionError> {
        let session = machine::create(user_id);
        self.sessions.create(&session).await?;

        info!(session_id = %session.id, "session created");
        AuditEvent::session(AuditAction::SessionCreated, session.id, user_id).emit();

        Ok(session)
    }

    pub async fn get_progress(
        &self,
        session_id: Uuid,
        user_id: &str,
    ) -> Result<Progress, SessionError> {
        let Versioned {
            value: mut session,
            version,
        } = self.load(session_id, user_id).await?;
        let catalog = self.active_catalog().await?;

        let was_completed = session.is_completed();
        let progress = match machine::next_question(&mut session, &catalog) {
            Some(next) => Progress {
                status: session.status(),
                question: Some(QuestionView::from(next.question)),
                current_index: next.position,
                total: next.total,
            },
            None => Progress {
                status: session.status(),
                question: None,
                current_index: session.current_question_index(),
                total: catalog.total(),
            },
        };

        if !was_completed && session.is_completed() {
            self.persist_lazy_completion(&session, &version).await;
        }

        Ok(progress)
    }

    pub async fn submit_answer(
        &self,
        session_id: Uuid,
        user_id: &str,
        question_id: Uuid,
        option: &str,
    ) -> Result<SessionStatus, SessionError> {
        let Versioned {
            value: mut session,
            version,
        } = self.load(session_id, user_id).await?;
        if session.is_completed() {
            return Err(SessionError::SessionCompleted);
        }

        let catalog = self.active_catalog().await?;

        let status = match machine::submit_answer(&mut session, question_id, option, &catalog) {
            Ok(status) => status,
            Err(SessionError::SessionCompleted) => {
                // The catalog shrank below this session's position.
                self.persist_lazy_completion(&session, &version).await;
                return Err(SessionError::SessionCompleted);
            }
            Err(e) => {
                debug!(session_id = %session_id, code = e.code(), "answer rejected");
                return Err(e);
            }
        };

        self.sessions.save(&session, &version).await?;

        AuditEvent::session(AuditAction::AnswerSubmitted, session.id, user_id)
            .with_details(serde_json::json!({
                "answers_count": session.answers().len(),
            }))
            .emit();
        if status == SessionStatus::Completed {
            info!(session_id = %session.id, answers = session.answers().len(), "session completed");
            AuditEvent::session(AuditAction::SessionCompleted, session.id, user_id).emit();
        }

        Ok(status)
    }

    pub async fn get_result(
        &self,
        session_id: Uuid,
        user_id: &str,
    ) -> Result<SessionResult, SessionError> {
        let session = self.load(session_id, user_id).await?.value;
        let lookup = self.lookup_for([&session]).await?;

        let scored = scoring::compute_result(session.answers(), &lookup);
        let safety_flag = self.safety.evaluate(session.answers(), &lookup);

        AuditEvent::session(AuditAction::ResultViewed, session.id, user_id).emit();
        if safety_flag {
            AuditEvent::session(AuditAction::SafetyFlagRaised, session.id, user_id).emit();
        }

        Ok(SessionResult {
            dominant: scored.dominant_score().cloned(),
            has_no_symptoms: scored.has_no_symptoms(),
            results: scored.results,
            safety_flag,
        })
    }

    /// The user's sessions, newest first. `limit` defaults to
    /// [`DEFAULT_HISTORY_LIMIT`] and is capped at [`MAX_HISTORY_LIMIT`].
    pub async fn history(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SessionSummary>, SessionError> {
        let limit = limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT);

        let sessions = self.sessions.list_for_user(user_id, limit).await?;
        let total_questions = self.catalog.count_active().await? as u32;
        let lookup = self.lookup_for(&sessions).await?;

        debug!(count = sessions.len(), limit, "loaded session history");

        Ok(sessions
            .iter()
            .map(|session| {
                let scored = scoring::compute_result(session.answers(), &lookup);
                // Completion is derived here as on any read, but not persisted.
                let status = if session.current_question_index() >= total_questions {
                    SessionStatus::Completed
                } else {
                    session.status()
                };
                SessionSummary {
                    id: session.id,
                    created_at: session.created_at,
                    status,
                    answers_count: session.answers().len() as u32,
                    total_questions,
                    dominant: scored.dominant_score().cloned(),
                }
            })
            .collect())
    }

    /// Active questions in presentation order.
    pub async fn list_questions(&self) -> Result<Vec<QuestionView>, SessionError> {
        let catalog = self.active_catalog().await?;
        Ok(catalog.questions().iter().map(QuestionView::from).collect())
    }

    /// Validate and add question definitions. Nothing is inserted unless
    /// every definition is valid, and no two active questions may share an
    /// order. Field names of a batch are prefixed with
    /// the item's position (`"1.text"`).
    pub async fn create_questions(
        &self,
        definitions: Vec<NewQuestion>,
        batch: bool,
        user_id: &str,
    ) -> Result<Vec<Question>, SessionError> {
        let mut taken: HashSet<u32> = self
            .catalog
            .list_active()
            .await?
            .iter()
            .map(|q| q.order)
            .collect();

        let mut errors = FieldErrors::new();
        for (i, def) in definitions.iter().enumerate() {
            let prefix = if batch { format!("{i}.") } else { String::new() };
            errors.extend(validation::validate_question(def, &prefix));
            for (field, message) in validation::validate_order_unique(def, &prefix, &mut taken) {
                errors.entry(field).or_insert(message);
            }
        }
        if definitions.is_empty() {
            errors.extend(validation::single("questions", "Provide at least one question"));
        }
        if !errors.is_empty() {
            return Err(SessionError::Validation(errors));
        }

        let mut created = Vec::with_capacity(definitions.len());
        for def in definitions {
            let question = def
                .into_question()
                .map_err(|e| SessionError::Validation(validation::single("body", &e.to_string())))?;
            self.catalog.insert(&question).await?;
            AuditEvent::new(
                AuditAction::QuestionCreated,
                "question",
                question.id.to_string(),
                user_id,
            )
            .emit();
            created.push(question);
        }

        info!(count = created.len(), "questions created");
        Ok(created)
    }

    async fn load(
        &self,
        session_id: Uuid,
        user_id: &str,
    ) -> Result<Versioned<Session>, SessionError> {
        self.sessions
            .find_by_id_for_user(session_id, user_id)
            .await?
            .ok_or(SessionError::NotFound("session"))
    }

    async fn active_catalog(&self) -> Result<ActiveCatalog, SessionError> {
        Ok(ActiveCatalog::new(self.catalog.list_active().await?))
    }

    /// Resolve every question answered across `sessions`, active or not.
    async fn lookup_for<'a, I>(&self, sessions: I) -> Result<QuestionLookup, SessionError>
    where
        I: IntoIterator<Item = &'a Session>,
    {
        let ids: HashSet<Uuid> = sessions
            .into_iter()
            .flat_map(|s| s.answers().iter().map(|a| a.question_id))
            .collect();
        if ids.is_empty() {
            return Ok(QuestionLookup::new());
        }
        let ids: Vec<Uuid> = ids.into_iter().collect();
        let questions = self.catalog.find_many_by_id(&ids).await?;
        Ok(scoring::lookup_from(questions))
    }

    /// Write a completion observed on read. Failures are logged only; the
    /// next read derives the same state again.
    async fn persist_lazy_completion(&self, session: &Session, version: &str) {
        match self.sessions.save(session, version).await {
            Ok(_) => {
                info!(session_id = %session.id, "session completed on read");
                AuditEvent::session(AuditAction::SessionCompleted, session.id, &session.user_id)
                    .emit();
            }
            Err(e) => {
                warn!(session_id = %session.id, error = %e, "failed to persist completion");
            }
        }
    }
}
