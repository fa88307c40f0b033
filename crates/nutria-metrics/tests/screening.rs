use nutria_metrics::screening::{self, ScreeningBand};
use nutria_metrics::vocabulary::ScreeningFields;
use nutria_metrics::{DerivedMetrics, PatientRecord};

#[test]
fn bands() {
    assert_eq!(ScreeningBand::from_score(25.0), ScreeningBand::Normal);
    assert_eq!(ScreeningBand::from_score(24.0), ScreeningBand::Normal);
    assert_eq!(ScreeningBand::from_score(20.0), ScreeningBand::AtRisk);
    assert_eq!(ScreeningBand::from_score(17.0), ScreeningBand::AtRisk);
    assert_eq!(ScreeningBand::from_score(16.5), ScreeningBand::Malnourished);
    assert_eq!(ScreeningBand::from_score(10.0), ScreeningBand::Malnourished);
}

#[test]
fn at_risk_ceiling_follows_numeric_rule() {
    // The interpretation legend says 17–23.5; the cutoff used is 24.
    assert_eq!(ScreeningBand::from_score(23.5), ScreeningBand::AtRisk);
    assert_eq!(ScreeningBand::from_score(23.75), ScreeningBand::AtRisk);
    assert_eq!(ScreeningBand::from_score(23.99), ScreeningBand::AtRisk);
}

#[test]
fn interprets_recorded_score() {
    let record = PatientRecord::parse(
        "SCREENING\nTotal Score,\"22.5\"\nDiagnosis,\"Risk of malnutrition\"\n",
    );
    let result = screening::interpret(&record, &ScreeningFields::default()).unwrap();
    assert_eq!(result.score, 22.5);
    assert_eq!(result.band, ScreeningBand::AtRisk);
    assert_eq!(result.recorded_diagnosis.as_deref(), Some("Risk of malnutrition"));
}

#[test]
fn missing_score_is_absent() {
    let record = PatientRecord::parse("SCREENING\nDiagnosis,\"Normal\"\n");
    assert!(screening::interpret(&record, &ScreeningFields::default()).is_none());

    let metrics = DerivedMetrics::from_record(&record);
    assert_eq!(metrics.screening_score, None);
    assert_eq!(metrics.screening_band, None);
}

#[test]
fn profile_keeps_numeric_items_in_order() {
    let text = "\
SCREENING
C. Mobility,\"2\"
A. Food intake declined over the past 3 months,\"1\"
B. Weight loss during the last 3 months,\"unknown\"
F. Body Mass Index (BMI),\"3\"
";
    let record = PatientRecord::parse(text);
    let profile = screening::screening_profile(&record, &ScreeningFields::default());
    let categories: Vec<_> = profile.iter().map(|i| i.category.as_str()).collect();
    assert_eq!(categories, ["Food Intake", "Mobility", "BMI"]);
    assert_eq!(profile[1].score, 2.0);
}
