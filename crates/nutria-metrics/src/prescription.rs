use nutria_core::PatientRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::vocabulary::PrescriptionFields;

/// Shown when no restriction or supplement is recorded.
pub const NONE_RECORDED: &str = "None";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrescriptionSummary {
    pub diet_type: Option<String>,
    pub meal_plan: Option<String>,
    pub restrictions: String,
    pub supplements: String,
}

pub fn prescription_summary(record: &PatientRecord, fields: &PrescriptionFields) -> PrescriptionSummary {
    let or_none = |key: &str| {
        record
            .text(&fields.section, key)
            .unwrap_or_else(|| NONE_RECORDED.to_string())
    };
    PrescriptionSummary {
        diet_type: record.text(&fields.section, &fields.diet_type),
        meal_plan: record.text(&fields.section, &fields.meal_plan),
        restrictions: or_none(&fields.restrictions),
        supplements: or_none(&fields.supplements),
    }
}
