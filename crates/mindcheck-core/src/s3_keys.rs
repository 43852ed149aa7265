//! S3 key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the MindCheck S3 bucket.

use uuid::Uuid;

pub const QUESTIONS_PREFIX: &str = "questions/";

pub fn question(id: Uuid) -> String {
    format!("questions/{id}.json")
}

/// Sessions are grouped per user so history listing is a single prefix scan.
pub fn user_sessions_prefix(user_id: &str) -> String {
    format!("sessions/{}/", encode_user_id(user_id))
}

pub fn session(user_id: &str, id: Uuid) -> String {
    format!("sessions/{}/{id}.json", encode_user_id(user_id))
}

/// Caller identities come from token subjects and may contain characters
/// that are awkward in a key path.
fn encode_user_id(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
            _ => '_',
        })
        .collect()
}
