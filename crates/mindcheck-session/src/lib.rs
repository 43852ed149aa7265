//! mindcheck-session
//!
//! The session state machine (question sequencing, answer validation,
//! completion) and the service that runs it against the catalog and session
//! store collaborators.

pub mod error;
pub mod machine;
pub mod service;
pub mod views;
