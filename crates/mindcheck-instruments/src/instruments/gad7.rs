use mindcheck_core::models::category::Category;

use crate::severity::{band, SeverityBand};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder scale. Total 0–21.
pub struct Gad7;

const BANDS: [SeverityBand; 3] = [band(4, "Minimal"), band(9, "Mild"), band(14, "Moderate")];

impl Instrument for Gad7 {
    fn category(&self) -> Category {
        Category::Anxiety
    }

    fn label(&self) -> &str {
        "Anxiety"
    }

    fn test_name(&self) -> &str {
        "GAD-7"
    }

    fn bands(&self) -> &[SeverityBand] {
        &BANDS
    }

    fn top_label(&self) -> &str {
        "Severe"
    }
}
