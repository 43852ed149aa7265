//! mindcheck-storage
//!
//! The question catalog and session store the core consumes, with an S3
//! implementation (thin wrapper around the AWS S3 SDK, ETag optimistic
//! locking for session writes) and an in-memory one for local runs and tests.

pub mod catalog;
pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod sessions;
pub mod state;
