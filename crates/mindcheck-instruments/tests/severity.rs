use mindcheck_core::models::category::Category;
use mindcheck_instruments::severity::{band, step};
use mindcheck_instruments::{all_instruments, instrument_for};

#[test]
fn phq9_bands() {
    let phq9 = instrument_for(Category::Depression);
    assert_eq!(phq9.test_name(), "PHQ-9");
    let cases = [
        (0, "Minimal"),
        (4, "Minimal"),
        (5, "Mild"),
        (9, "Mild"),
        (10, "Moderate"),
        (14, "Moderate"),
        (15, "Moderately Severe"),
        (19, "Moderately Severe"),
        (20, "Severe"),
        (27, "Severe"),
    ];
    for (score, label) in cases {
        assert_eq!(phq9.severity_of(score), label, "score {score}");
    }
}

#[test]
fn gad7_has_no_moderately_severe_band() {
    let gad7 = instrument_for(Category::Anxiety);
    assert_eq!(gad7.severity_of(14), "Moderate");
    assert_eq!(gad7.severity_of(15), "Severe");
}

#[test]
fn stress_uses_low_moderate_high() {
    let pss = instrument_for(Category::Stress);
    assert_eq!(pss.severity_of(3), "Low");
    assert_eq!(pss.severity_of(6), "Moderate");
    assert_eq!(pss.severity_of(7), "High");
}

#[test]
fn every_category_has_an_instrument_with_ascending_bands() {
    let instruments = all_instruments();
    assert_eq!(instruments.len(), Category::ALL.len());
    for (instrument, category) in instruments.iter().zip(Category::ALL) {
        assert_eq!(instrument.category(), category);
        let bounds: Vec<u32> = instrument.bands().iter().map(|b| b.upper_bound).collect();
        assert!(bounds.windows(2).all(|w| w[0] < w[1]), "{category} bands not ascending");
    }
}

#[test]
fn step_first_match_wins() {
    let bands = [band(2, "a"), band(2, "b"), band(5, "c")];
    assert_eq!(step(&bands, "top", 2), "a");
    assert_eq!(step(&bands, "top", 3), "c");
    assert_eq!(step(&bands, "top", 6), "top");
    assert_eq!(step(&[], "top", 0), "top");
}
