use nutria_core::{PatientRecord, Value};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::vocabulary::BiochemistryFields;

/// A lab marker next to its reference value, both in the marker's own unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MarkerComparison {
    pub marker: String,
    pub unit: String,
    /// Zero when the record lacks the marker.
    pub value: f64,
    pub reference: f64,
}

impl MarkerComparison {
    /// `value / reference`, or `None` for a zero reference.
    pub fn ratio(&self) -> Option<f64> {
        (self.reference != 0.0).then(|| self.value / self.reference)
    }
}

pub fn marker_comparisons(record: &PatientRecord, fields: &BiochemistryFields) -> Vec<MarkerComparison> {
    fields
        .markers
        .iter()
        .map(|spec| MarkerComparison {
            marker: spec.marker.clone(),
            unit: spec.unit.clone(),
            value: record.number(&fields.section, &spec.field).unwrap_or(0.0),
            reference: spec.reference,
        })
        .collect()
}

/// A lab value shown as recorded. `None` when the record lacks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabValue {
    pub marker: String,
    pub unit: String,
    pub value: Option<Value>,
}

pub fn lab_values(record: &PatientRecord, fields: &BiochemistryFields) -> Vec<LabValue> {
    fields
        .extra_markers
        .iter()
        .map(|spec| LabValue {
            marker: spec.marker.clone(),
            unit: spec.unit.clone(),
            value: record.field(&fields.section, &spec.field).cloned(),
        })
        .collect()
}
