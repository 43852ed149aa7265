use serde::Serialize;

/// One step of a severity table: raw scores up to and including
/// `upper_bound` map to `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityBand {
    pub upper_bound: u32,
    pub label: &'static str,
}

pub const fn band(upper_bound: u32, label: &'static str) -> SeverityBand {
    SeverityBand { upper_bound, label }
}

/// Evaluate a band table in order; the first band whose inclusive upper bound
/// covers `score` wins, otherwise `top_label`.
pub fn step<'a>(bands: &'a [SeverityBand], top_label: &'a str, score: u32) -> &'a str {
    bands
        .iter()
        .find(|b| score <= b.upper_bound)
        .map(|b| b.label)
        .unwrap_or(top_label)
}
