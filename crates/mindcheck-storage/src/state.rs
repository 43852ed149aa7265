use aws_sdk_s3::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::objects::{self, PutCondition};

/// A stored value together with the version it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    pub value: T,
    /// Opaque token (an S3 ETag, or a counter in memory) to pass back on save.
    pub version: String,
}

/// Load a JSON document from S3. Returns `None` if the key does not exist.
pub async fn load_json<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<Option<Versioned<T>>, StorageError> {
    let Some(output) = objects::get_object_opt(client, bucket, key).await? else {
        return Ok(None);
    };
    let value: T = serde_json::from_slice(&output.body)?;
    let version = output.etag.unwrap_or_default();
    Ok(Some(Versioned { value, version }))
}

/// Save a JSON document to S3 under `condition`. Returns the new ETag.
pub async fn save_json<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
    condition: PutCondition<'_>,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec(value)?;
    objects::put_object(client, bucket, key, body, Some("application/json"), condition).await
}
