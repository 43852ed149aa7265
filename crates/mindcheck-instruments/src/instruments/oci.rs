use mindcheck_core::models::category::Category;

use crate::severity::{band, SeverityBand};
use crate::Instrument;

/// OCI: Obsessive-Compulsive Inventory, short screening form.
pub struct Oci;

const BANDS: [SeverityBand; 3] = [band(4, "Minimal"), band(9, "Mild"), band(14, "Moderate")];

impl Instrument for Oci {
    fn category(&self) -> Category {
        Category::Ocd
    }

    fn label(&self) -> &str {
        "Obsessive-Compulsive"
    }

    fn test_name(&self) -> &str {
        "OCI"
    }

    fn bands(&self) -> &[SeverityBand] {
        &BANDS
    }

    fn top_label(&self) -> &str {
        "Severe"
    }
}
