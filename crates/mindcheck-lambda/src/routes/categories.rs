use axum::Json;
use serde::Serialize;

use mindcheck_core::models::category::Category;
use mindcheck_instruments::all_instruments;
use mindcheck_instruments::severity::SeverityBand;

#[derive(Serialize)]
pub struct CategorySummary {
    category: Category,
    label: String,
    test_name: String,
    bands: Vec<SeverityBand>,
    top_label: String,
}

/// Category configuration, in canonical order. Public schema data.
pub async fn list_categories() -> Json<Vec<CategorySummary>> {
    let categories = all_instruments()
        .iter()
        .map(|i| CategorySummary {
            category: i.category(),
            label: i.label().to_string(),
            test_name: i.test_name().to_string(),
            bands: i.bands().to_vec(),
            top_label: i.top_label().to_string(),
        })
        .collect();
    Json(categories)
}
