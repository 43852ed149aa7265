use mindcheck_core::models::category::Category;

use crate::severity::{band, SeverityBand};
use crate::Instrument;

/// ASRS: Adult ADHD Self-Report Scale screener items.
pub struct Asrs;

const BANDS: [SeverityBand; 2] = [band(3, "Low"), band(8, "Moderate")];

impl Instrument for Asrs {
    fn category(&self) -> Category {
        Category::Adhd
    }

    fn label(&self) -> &str {
        "ADHD"
    }

    fn test_name(&self) -> &str {
        "ASRS"
    }

    fn bands(&self) -> &[SeverityBand] {
        &BANDS
    }

    fn top_label(&self) -> &str {
        "High"
    }
}
