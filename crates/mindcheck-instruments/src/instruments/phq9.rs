use mindcheck_core::models::category::Category;

use crate::severity::{band, SeverityBand};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, depression module.
/// Nine items on the 0–3 default scale, total 0–27.
pub struct Phq9;

const BANDS: [SeverityBand; 4] = [
    band(4, "Minimal"),
    band(9, "Mild"),
    band(14, "Moderate"),
    band(19, "Moderately Severe"),
];

impl Instrument for Phq9 {
    fn category(&self) -> Category {
        Category::Depression
    }

    fn label(&self) -> &str {
        "Depression"
    }

    fn test_name(&self) -> &str {
        "PHQ-9"
    }

    fn bands(&self) -> &[SeverityBand] {
        &BANDS
    }

    fn top_label(&self) -> &str {
        "Severe"
    }
}
