use async_trait::async_trait;
use aws_sdk_s3::Client;
use tracing::debug;
use uuid::Uuid;

use mindcheck_core::models::question::Question;
use mindcheck_core::s3_keys;

use crate::error::StorageError;
use crate::objects::{self, PutCondition};
use crate::state;

/// Read access to the question catalog, plus insertion for administration.
#[async_trait]
pub trait QuestionCatalog: Send + Sync {
    /// Active questions sorted by `order`.
    async fn list_active(&self) -> Result<Vec<Question>, StorageError>;

    async fn count_active(&self) -> Result<usize, StorageError> {
        Ok(self.list_active().await?.len())
    }

    /// Any question, active or not.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, StorageError>;

    /// The subset of `ids` that exist. Order is unspecified; missing ids are
    /// simply absent.
    async fn find_many_by_id(&self, ids: &[Uuid]) -> Result<Vec<Question>, StorageError>;

    async fn insert(&self, question: &Question) -> Result<(), StorageError>;
}

/// Keep active questions and sort them by position. Shared positions fall
/// back to creation time, then id, so the order never depends on how the
/// backend happened to list them.
pub fn active_sorted(questions: impl IntoIterator<Item = Question>) -> Vec<Question> {
    let mut active: Vec<Question> = questions.into_iter().filter(|q| q.is_active).collect();
    active.sort_by_key(|q| (q.order, q.created_at, q.id));
    active
}

/// Catalog stored as one JSON object per question under `questions/`.
#[derive(Clone)]
pub struct S3QuestionCatalog {
    client: Client,
    bucket: String,
}

impl S3QuestionCatalog {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    async fn load_all(&self) -> Result<Vec<Question>, StorageError> {
        let keys =
            objects::list_objects(&self.client, &self.bucket, s3_keys::QUESTIONS_PREFIX).await?;
        let mut questions = Vec::with_capacity(keys.len());
        for key in &keys {
            if let Some(q) = state::load_json::<Question>(&self.client, &self.bucket, key).await? {
                questions.push(q.value);
            }
        }
        debug!(count = questions.len(), "loaded question catalog");
        Ok(questions)
    }
}

#[async_trait]
impl QuestionCatalog for S3QuestionCatalog {
    async fn list_active(&self) -> Result<Vec<Question>, StorageError> {
        Ok(active_sorted(self.load_all().await?))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, StorageError> {
        let key = s3_keys::question(id);
        let loaded = state::load_json::<Question>(&self.client, &self.bucket, &key).await?;
        Ok(loaded.map(|v| v.value))
    }

    async fn find_many_by_id(&self, ids: &[Uuid]) -> Result<Vec<Question>, StorageError> {
        let mut questions = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(q) = self.find_by_id(*id).await? {
                questions.push(q);
            }
        }
        Ok(questions)
    }

    async fn insert(&self, question: &Question) -> Result<(), StorageError> {
        let key = s3_keys::question(question.id);
        state::save_json(&self.client, &self.bucket, &key, question, PutCondition::IfAbsent)
            .await?;
        Ok(())
    }
}
