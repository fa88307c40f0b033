use nutria_metrics::bmi::{self, BmiClass, body_mass_index};
use nutria_metrics::vocabulary::AnthropometryFields;
use nutria_metrics::{DerivedMetrics, PatientRecord};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}

#[test]
fn computes_from_anthropometry_section() {
    let record = PatientRecord::parse("ANTHROPOMETRY\nWeight (kg),\"70\"\nHeight (cm),\"175\"\n");
    let value = bmi::bmi(&record, &AnthropometryFields::default()).unwrap();
    assert!(close(value, 22.86), "got {value}");
    assert_eq!(BmiClass::from_bmi(value), BmiClass::Normal);
}

#[test]
fn mixed_integer_and_float_inputs() {
    let record = PatientRecord::parse("ANTHROPOMETRY\nWeight (kg),\"82.4\"\nHeight (cm),\"168\"\n");
    let value = bmi::bmi(&record, &AnthropometryFields::default()).unwrap();
    assert!(close(value, 29.19), "got {value}");
}

#[test]
fn missing_weight_or_height_is_absent() {
    let fields = AnthropometryFields::default();
    let no_weight = PatientRecord::parse("ANTHROPOMETRY\nHeight (cm),\"175\"\n");
    let no_height = PatientRecord::parse("ANTHROPOMETRY\nWeight (kg),\"70\"\n");
    assert_eq!(bmi::bmi(&no_weight, &fields), None);
    assert_eq!(bmi::bmi(&no_height, &fields), None);

    let metrics = DerivedMetrics::from_record(&no_height);
    assert_eq!(metrics.bmi, None);
    assert_eq!(metrics.bmi_class, None);
}

#[test]
fn text_weight_is_absent() {
    let record = PatientRecord::parse("ANTHROPOMETRY\nWeight (kg),\"seventy\"\nHeight (cm),\"175\"\n");
    assert_eq!(bmi::bmi(&record, &AnthropometryFields::default()), None);
}

#[test]
fn implausible_values_are_not_rejected() {
    assert!(close(body_mass_index(-70.0, 175.0), -22.86));
    assert!(body_mass_index(70.0, 0.0).is_infinite());
}

#[test]
fn class_boundaries() {
    assert_eq!(BmiClass::from_bmi(18.49), BmiClass::Underweight);
    assert_eq!(BmiClass::from_bmi(18.5), BmiClass::Normal);
    assert_eq!(BmiClass::from_bmi(24.99), BmiClass::Normal);
    assert_eq!(BmiClass::from_bmi(25.0), BmiClass::Overweight);
    assert_eq!(BmiClass::from_bmi(29.99), BmiClass::Overweight);
    assert_eq!(BmiClass::from_bmi(30.0), BmiClass::Obese);
    assert_eq!(BmiClass::from_bmi(45.0), BmiClass::Obese);
}

#[test]
fn labels() {
    assert_eq!(BmiClass::Overweight.label(), "Overweight");
    assert_eq!(
        serde_json::to_string(&BmiClass::Underweight).unwrap(),
        "\"underweight\""
    );
}

#[test]
fn zero_height_has_no_bmi_or_class() {
    let record = PatientRecord::parse("ANTHROPOMETRY\nWeight (kg),\"70\"\nHeight (cm),\"0\"\n");
    assert_eq!(bmi::bmi(&record, &AnthropometryFields::default()), None);

    let metrics = DerivedMetrics::from_record(&record);
    assert_eq!(metrics.bmi, None);
    assert_eq!(metrics.bmi_class, None);
    let json = serde_json::to_value(&metrics).unwrap();
    assert!(json["bmi"].is_null());
    assert!(json["bmi_class"].is_null());
}
