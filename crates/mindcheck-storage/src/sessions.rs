use async_trait::async_trait;
use aws_sdk_s3::Client;
use uuid::Uuid;

use mindcheck_core::models::session::Session;
use mindcheck_core::s3_keys;

use crate::error::StorageError;
use crate::objects::{self, PutCondition};
use crate::state::{self, Versioned};

/// Persistence for screening sessions.
///
/// Writes are optimistic: `save` only succeeds if the stored version still
/// matches the one the caller read, so two concurrent submissions on the
/// same session cannot both append against the same snapshot.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a new session. Returns its initial version.
    async fn create(&self, session: &Session) -> Result<String, StorageError>;

    /// Load a session if it exists and belongs to `user_id`.
    async fn find_by_id_for_user(
        &self,
        id: Uuid,
        user_id: &str,
    ) -> Result<Option<Versioned<Session>>, StorageError>;

    /// The user's sessions, newest first, at most `limit`.
    async fn list_for_user(&self, user_id: &str, limit: usize)
    -> Result<Vec<Session>, StorageError>;

    /// Replace the stored session if it is still at `expected_version`.
    /// Returns the new version, or `StorageError::PreconditionFailed`.
    async fn save(&self, session: &Session, expected_version: &str)
    -> Result<String, StorageError>;
}

/// Sessions stored as `sessions/{user}/{id}.json`.
#[derive(Clone)]
pub struct S3SessionStore {
    client: Client,
    bucket: String,
}

impl S3SessionStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl SessionStore for S3SessionStore {
    async fn create(&self, session: &Session) -> Result<String, StorageError> {
        let key = s3_keys::session(&session.user_id, session.id);
        state::save_json(&self.client, &self.bucket, &key, session, PutCondition::IfAbsent).await
    }

    async fn find_by_id_for_user(
        &self,
        id: Uuid,
        user_id: &str,
    ) -> Result<Option<Versioned<Session>>, StorageError> {
        let key = s3_keys::session(user_id, id);
        let loaded = state::load_json::<Session>(&self.client, &self.bucket, &key).await?;
        // Key encoding is lossy; the stored owner is authoritative.
        Ok(loaded.filter(|v| v.value.user_id == user_id))
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<Session>, StorageError> {
        let prefix = s3_keys::user_sessions_prefix(user_id);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

        let mut sessions = Vec::with_capacity(keys.len());
        for key in &keys {
            if let Some(v) = state::load_json::<Session>(&self.client, &self.bucket, key).await?
                && v.value.user_id == user_id
            {
                sessions.push(v.value);
            }
        }
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sessions.truncate(limit);
        Ok(sessions)
    }

    async fn save(
        &self,
        session: &Session,
        expected_version: &str,
    ) -> Result<String, StorageError> {
        let key = s3_keys::session(&session.user_id, session.id);
        state::save_json(
            &self.client,
            &self.bucket,
            &key,
            session,
            PutCondition::IfMatch(expected_version),
        )
        .await
    }
}
