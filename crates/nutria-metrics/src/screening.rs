//! Nutritional screening questionnaire: total-score bands and item profile.
//!
//! The interpretation legend shown to clinicians reads "24–30 normal,
//! 17–23.5 at risk, < 17 malnourished", while the numeric rule treats every
//! score below 24 as at risk. The two agree on half-point totals, which is
//! all the questionnaire produces. For any other score the numeric rule
//! (`>= 24`) is authoritative here; the legend's 23.5 ceiling is not used.

use nutria_core::PatientRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::vocabulary::ScreeningFields;

/// Lowest total score read as normal nutritional status.
pub const NORMAL_MIN: f64 = 24.0;
/// Lowest total score read as at risk rather than malnourished.
pub const AT_RISK_MIN: f64 = 17.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScreeningBand {
    Normal,
    AtRisk,
    Malnourished,
}

impl ScreeningBand {
    pub fn from_score(score: f64) -> Self {
        if score >= NORMAL_MIN {
            ScreeningBand::Normal
        } else if score >= AT_RISK_MIN {
            ScreeningBand::AtRisk
        } else {
            ScreeningBand::Malnourished
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScreeningBand::Normal => "Normal nutritional status",
            ScreeningBand::AtRisk => "At risk of malnutrition",
            ScreeningBand::Malnourished => "Malnourished",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResult {
    pub score: f64,
    pub band: ScreeningBand,
    /// The diagnosis text written in the record, if any. Not reconciled
    /// with `band`.
    pub recorded_diagnosis: Option<String>,
}

/// One questionnaire item, for radar-style display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningItem {
    pub category: String,
    pub score: f64,
}

/// Total score, or `None` when missing or not numeric.
pub fn screening_score(record: &PatientRecord, fields: &ScreeningFields) -> Option<f64> {
    record.number(&fields.section, &fields.total_score)
}

pub fn interpret(record: &PatientRecord, fields: &ScreeningFields) -> Option<ScreeningResult> {
    let score = screening_score(record, fields)?;
    Some(ScreeningResult {
        score,
        band: ScreeningBand::from_score(score),
        recorded_diagnosis: record.text(&fields.section, &fields.diagnosis),
    })
}

/// Item scores present in the record, in vocabulary order. Items that are
/// missing or not numeric are left out.
pub fn screening_profile(record: &PatientRecord, fields: &ScreeningFields) -> Vec<ScreeningItem> {
    fields
        .items
        .iter()
        .filter_map(|item| {
            let score = record.number(&fields.section, &item.field)?;
            Some(ScreeningItem {
                category: item.category.clone(),
                score,
            })
        })
        .collect()
}
