use mindcheck_core::models::category::Category;

use crate::severity::{band, SeverityBand};
use crate::Instrument;

/// PSS: Perceived Stress Scale, short form.
pub struct Pss;

const BANDS: [SeverityBand; 2] = [band(3, "Low"), band(6, "Moderate")];

impl Instrument for Pss {
    fn category(&self) -> Category {
        Category::Stress
    }

    fn label(&self) -> &str {
        "Stress"
    }

    fn test_name(&self) -> &str {
        "PSS"
    }

    fn bands(&self) -> &[SeverityBand] {
        &BANDS
    }

    fn top_label(&self) -> &str {
        "High"
    }
}
