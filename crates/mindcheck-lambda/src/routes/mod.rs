pub mod categories;
pub mod health;
pub mod profile;
pub mod questions;
pub mod sessions;
