//! mindcheck-instruments
//!
//! Screening instrument definitions and scoring. Pure data and pure
//! functions with no storage or network dependency. Defines the default answer
//! scale, the severity bands for each category, the scoring engine, and the
//! safety-flag policy.

pub mod instruments;
pub mod safety;
pub mod scale;
pub mod scoring;
pub mod severity;

use mindcheck_core::models::category::Category;
use severity::SeverityBand;

/// Trait implemented by the instrument backing each screening category.
pub trait Instrument: Send + Sync {
    /// The category this instrument scores.
    fn category(&self) -> Category;

    /// Human-readable category label (e.g., "Depression").
    fn label(&self) -> &str;

    /// Source instrument name (e.g., "PHQ-9").
    fn test_name(&self) -> &str;

    /// Severity bands on the raw score, ascending by upper bound.
    fn bands(&self) -> &[SeverityBand];

    /// Label for raw scores above every band's upper bound.
    fn top_label(&self) -> &str;

    /// Map a raw score to its severity label.
    fn severity_of(&self, raw_score: u32) -> &str {
        severity::step(self.bands(), self.top_label(), raw_score)
    }
}

/// Return every instrument, in canonical category order.
pub fn all_instruments() -> Vec<&'static dyn Instrument> {
    Category::ALL.into_iter().map(instrument_for).collect()
}

/// Look up the instrument for a category.
pub fn instrument_for(category: Category) -> &'static dyn Instrument {
    match category {
        Category::Depression => &instruments::phq9::Phq9,
        Category::Anxiety => &instruments::gad7::Gad7,
        Category::Stress => &instruments::pss::Pss,
        Category::Adhd => &instruments::asrs::Asrs,
        Category::Ocd => &instruments::oci::Oci,
    }
}
