use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A screening dimension a question measures.
///
/// The set is closed: adding a variant forces every exhaustive match in the
/// instrument registry and scoring engine to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Depression,
    Anxiety,
    Stress,
    Adhd,
    Ocd,
}

impl Category {
    /// Canonical ordering. Result rows and dominant tie-breaks follow it.
    pub const ALL: [Category; 5] = [
        Category::Depression,
        Category::Anxiety,
        Category::Stress,
        Category::Adhd,
        Category::Ocd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Depression => "depression",
            Category::Anxiety => "anxiety",
            Category::Stress => "stress",
            Category::Adhd => "adhd",
            Category::Ocd => "ocd",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Category::Depression => 0,
            Category::Anxiety => 1,
            Category::Stress => 2,
            Category::Adhd => 3,
            Category::Ocd => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
