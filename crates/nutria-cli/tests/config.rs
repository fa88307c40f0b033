use nutria_cli::config::{load_vocabulary, resolve_vocabulary, save_vocabulary};
use nutria_cli::load_record;
use nutria_metrics::RecordVocabulary;

#[test]
fn explicit_vocabulary_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.json");
    std::fs::write(&path, r#"{ "screening": { "total_score": "Score" } }"#).unwrap();

    let vocabulary = resolve_vocabulary(Some(&path)).unwrap();
    assert_eq!(vocabulary.screening.total_score, "Score");
    assert_eq!(vocabulary.screening.section, "SCREENING");
}

#[test]
fn missing_explicit_vocabulary_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(resolve_vocabulary(Some(&dir.path().join("absent.json"))).is_err());
}

#[test]
fn saved_vocabulary_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("vocabulary.json");
    let mut vocabulary = RecordVocabulary::default();
    vocabulary.anthropometry.section = "ANTROPOMETRIA".to_string();

    save_vocabulary(&path, &vocabulary).unwrap();
    assert!(!dir.path().join("nested").join("vocabulary.json.tmp").exists());
    assert_eq!(load_vocabulary(&path).unwrap(), vocabulary);
}

#[test]
fn record_file_is_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patient.csv");
    std::fs::write(&path, "ANTHROPOMETRY\nWeight (kg),\"70\"\nHeight (cm),\"175\"\n").unwrap();

    let record = load_record(&path).unwrap();
    assert_eq!(record.number("ANTHROPOMETRY", "Height (cm)"), Some(175.0));
}

#[test]
fn undecodable_record_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patient.csv");
    std::fs::write(&path, [0xc3, 0x28, b'\n']).unwrap();

    let err = load_record(&path).unwrap_err();
    assert!(err.to_string().contains("not valid UTF-8"));
}
