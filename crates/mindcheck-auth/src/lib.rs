//! mindcheck-auth
//!
//! Bearer-token validation. Token issuance and credential handling belong
//! to the identity provider; this crate only turns a token into a caller.

pub mod error;
pub mod jwt;
