//! mindcheck-audit
//!
//! Application-level audit events for session and catalog activity.

pub mod events;
