//! mindcheck-core
//!
//! Pure domain types, question-definition validation, and S3 key conventions.
//! No AWS SDK dependency. This is the shared vocabulary of the MindCheck system.

pub mod error;
pub mod models;
pub mod s3_keys;
pub mod validation;
