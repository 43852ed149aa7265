mod common;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Barrier;
use uuid::Uuid;

use mindcheck_core::models::category::Category;
use mindcheck_core::models::session::{Session, SessionStatus};
use mindcheck_instruments::safety::SafetyPolicy;
use mindcheck_session::error::SessionError;
use mindcheck_session::service::SessionService;
use mindcheck_storage::error::StorageError;
use mindcheck_storage::memory::MemoryStore;
use mindcheck_storage::sessions::SessionStore;
use mindcheck_storage::state::Versioned;

use common::question;

/// Holds every load until `barrier` has been reached by all callers, so
/// concurrent writers all start from the same snapshot.
struct LockstepStore {
    inner: MemoryStore,
    barrier: Barrier,
}

#[async_trait]
impl SessionStore for LockstepStore {
    async fn create(&self, session: &Session) -> Result<String, StorageError> {
        self.inner.create(session).await
    }

    async fn find_by_id_for_user(
        &self,
        id: Uuid,
        user_id: &str,
    ) -> Result<Option<Versioned<Session>>, StorageError> {
        let loaded = self.inner.find_by_id_for_user(id, user_id).await;
        self.barrier.wait().await;
        loaded
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<Session>, StorageError> {
        self.inner.list_for_user(user_id, limit).await
    }

    async fn save(&self, session: &Session, expected_version: &str) -> Result<String, StorageError> {
        self.inner.save(session, expected_version).await
    }
}

#[tokio::test]
async fn concurrent_submissions_on_one_snapshot_append_once() {
    let q1 = question(Category::Anxiety, 0);
    let q2 = question(Category::Anxiety, 1);
    let store = MemoryStore::with_questions(vec![q1.clone(), q2]).await;
    let lockstep = Arc::new(LockstepStore {
        inner: store.clone(),
        barrier: Barrier::new(2),
    });
    let service = SessionService::new(
        Arc::new(store.clone()),
        lockstep,
        SafetyPolicy::default(),
    );

    let session = service.create_session("alice").await.unwrap();

    let (first, second) = tokio::join!(
        service.submit_answer(session.id, "alice", q1.id, "several_days"),
        service.submit_answer(session.id, "alice", q1.id, "nearly_every_day"),
    );

    let outcomes = [first, second];
    let succeeded = outcomes
        .iter()
        .filter(|r| matches!(r, Ok(SessionStatus::InProgress)))
        .count();
    let conflicted = outcomes
        .iter()
        .filter(|r| matches!(r, Err(SessionError::Conflict)))
        .count();
    assert_eq!(succeeded, 1);
    assert_eq!(conflicted, 1);

    let stored = store
        .find_by_id_for_user(session.id, "alice")
        .await
        .unwrap()
        .unwrap()
        .value;
    assert_eq!(stored.answers().len(), 1);
    assert_eq!(stored.current_question_index(), 1);
    assert_eq!(stored.status(), SessionStatus::InProgress);
}
