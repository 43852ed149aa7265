//! In-process catalog and session store.
//!
//! Used for local development (`MINDCHECK_STORAGE=memory`) and tests. Same
//! contract as the S3 implementations, including version-checked saves.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use mindcheck_core::models::question::Question;
use mindcheck_core::models::session::Session;

use crate::catalog::{active_sorted, QuestionCatalog};
use crate::error::StorageError;
use crate::sessions::SessionStore;
use crate::state::Versioned;

#[derive(Default)]
struct Inner {
    questions: HashMap<Uuid, Question>,
    sessions: HashMap<Uuid, (Session, u64)>,
}

/// Cheap to clone; clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the catalog.
    pub async fn with_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write().await;
            for q in questions {
                inner.questions.insert(q.id, q);
            }
        }
        store
    }

    /// Replace or add a question, for simulating catalog edits.
    pub async fn upsert_question(&self, question: Question) {
        self.inner.write().await.questions.insert(question.id, question);
    }

    pub async fn remove_question(&self, id: Uuid) -> Option<Question> {
        self.inner.write().await.questions.remove(&id)
    }
}

fn session_key(id: Uuid) -> String {
    format!("sessions/{id}")
}

#[async_trait]
impl QuestionCatalog for MemoryStore {
    async fn list_active(&self) -> Result<Vec<Question>, StorageError> {
        let inner = self.inner.read().await;
        Ok(active_sorted(inner.questions.values().cloned()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, StorageError> {
        Ok(self.inner.read().await.questions.get(&id).cloned())
    }

    async fn find_many_by_id(&self, ids: &[Uuid]) -> Result<Vec<Question>, StorageError> {
        let inner = self.inner.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| inner.questions.get(id).cloned())
            .collect())
    }

    async fn insert(&self, question: &Question) -> Result<(), StorageError> {
        let mut inner = self.inner.write().await;
        if inner.questions.contains_key(&question.id) {
            return Err(StorageError::PreconditionFailed {
                key: format!("questions/{}", question.id),
            });
        }
        inner.questions.insert(question.id, question.clone());
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn create(&self, session: &Session) -> Result<String, StorageError> {
        let mut inner = self.inner.write().await;
        if inner.sessions.contains_key(&session.id) {
            return Err(StorageError::PreconditionFailed {
                key: session_key(session.id),
            });
        }
        inner.sessions.insert(session.id, (session.clone(), 1));
        Ok("1".to_string())
    }

    async fn find_by_id_for_user(
        &self,
        id: Uuid,
        user_id: &str,
    ) -> Result<Option<Versioned<Session>>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner
            .sessions
            .get(&id)
            .filter(|(s, _)| s.user_id == user_id)
            .map(|(s, version)| Versioned {
                value: s.clone(),
                version: version.to_string(),
            }))
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<Session>, StorageError> {
        let inner = self.inner.read().await;
        let mut sessions: Vec<Session> = inner
            .sessions
            .values()
            .filter(|(s, _)| s.user_id == user_id)
            .map(|(s, _)| s.clone())
            .collect();
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sessions.truncate(limit);
        Ok(sessions)
    }

    async fn save(
        &self,
        session: &Session,
        expected_version: &str,
    ) -> Result<String, StorageError> {
        let mut inner = self.inner.write().await;
        let Some((stored, version)) = inner.sessions.get_mut(&session.id) else {
            return Err(StorageError::NotFound {
                key: session_key(session.id),
            });
        };
        if version.to_string() != expected_version || stored.user_id != session.user_id {
            return Err(StorageError::PreconditionFailed {
                key: session_key(session.id),
            });
        }
        *version += 1;
        *stored = session.clone();
        Ok(version.to_string())
    }
}
