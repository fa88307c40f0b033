use nutria_metrics::vocabulary::{CURRENT_VERSION, RecordVocabulary};
use nutria_metrics::{DerivedMetrics, MetricsError, PatientRecord};

#[test]
fn partial_file_keeps_defaults() {
    let json = r#"{
        "config_version": 1,
        "anthropometry": { "section": "ANTROPOMETRIA", "weight": "Peso Atual (kg)", "height": "Altura (cm)" }
    }"#;
    let vocabulary = RecordVocabulary::from_json(json).unwrap();
    assert_eq!(vocabulary.anthropometry.section, "ANTROPOMETRIA");
    assert_eq!(vocabulary.anthropometry.usual_weight, "Usual Weight (kg)");
    assert_eq!(vocabulary.screening, RecordVocabulary::default().screening);
}

#[test]
fn custom_names_drive_the_engine() {
    let vocabulary = RecordVocabulary::from_json(
        r#"{ "anthropometry": { "section": "ANTROPOMETRIA", "weight": "Peso Atual (kg)", "height": "Altura (cm)" } }"#,
    )
    .unwrap();
    let record = PatientRecord::parse("ANTROPOMETRIA\nPeso Atual (kg),\"70\"\nAltura (cm),\"175\"\n");
    assert!(DerivedMetrics::compute(&record, &vocabulary).bmi.is_some());
    assert!(DerivedMetrics::from_record(&record).bmi.is_none());
}

#[test]
fn unversioned_file_is_migrated() {
    let vocabulary = RecordVocabulary::from_json("{}").unwrap();
    assert_eq!(vocabulary.config_version, CURRENT_VERSION);
    assert_eq!(vocabulary, RecordVocabulary::default());
}

#[test]
fn newer_version_is_rejected() {
    let err = RecordVocabulary::from_json(r#"{ "config_version": 99 }"#).unwrap_err();
    assert!(matches!(
        err,
        MetricsError::UnsupportedVersion { found: 99, supported: CURRENT_VERSION }
    ));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(
        RecordVocabulary::from_json("{ not json"),
        Err(MetricsError::Vocabulary(_))
    ));
    assert!(matches!(
        RecordVocabulary::from_json("[1, 2]"),
        Err(MetricsError::NotAnObject)
    ));
}

#[test]
fn version_beyond_u32_is_rejected() {
    let err = RecordVocabulary::from_json(r#"{ "config_version": 4294967297 }"#).unwrap_err();
    assert!(matches!(
        err,
        MetricsError::UnsupportedVersion { found: u32::MAX, supported: CURRENT_VERSION }
    ));
}
