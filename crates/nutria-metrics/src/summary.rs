use jiff::civil::Date;
use nutria_core::PatientRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::anthropometry::{self, AnthropometryPanel};
use crate::biochemistry::{self, LabValue, MarkerComparison};
use crate::derived::DerivedMetrics;
use crate::patient::{self, PatientSummary};
use crate::prescription::{self, PrescriptionSummary};
use crate::screening::{self, ScreeningItem};
use crate::vocabulary::RecordVocabulary;

/// Everything the dashboard and report collaborators read, in one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    pub patient: PatientSummary,
    pub metrics: DerivedMetrics,
    pub screening_diagnosis: Option<String>,
    pub screening_profile: Vec<ScreeningItem>,
    pub anthropometry: AnthropometryPanel,
    pub biochemistry: Vec<MarkerComparison>,
    pub lab_values: Vec<LabValue>,
    pub prescription: PrescriptionSummary,
}

impl AssessmentSummary {
    /// `as_of` is the date ages are computed against.
    pub fn build(record: &PatientRecord, vocabulary: &RecordVocabulary, as_of: Date) -> Self {
        let screening_fields = &vocabulary.screening;

        Self {
            patient: patient::patient_summary(record, &vocabulary.patient, as_of),
            metrics: DerivedMetrics::compute(record, vocabulary),
            screening_diagnosis: record.text(&screening_fields.section, &screening_fields.diagnosis),
            screening_profile: screening::screening_profile(record, screening_fields),
            anthropometry: anthropometry::anthropometry_panel(record, &vocabulary.anthropometry),
            biochemistry: biochemistry::marker_comparisons(record, &vocabulary.biochemistry),
            lab_values: biochemistry::lab_values(record, &vocabulary.biochemistry),
            prescription: prescription::prescription_summary(record, &vocabulary.prescription),
        }
    }
}
