use nutria_core::PatientRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::bmi::{self, BmiClass};
use crate::nutrients::{self, NutrientGoal};
use crate::screening::{self, ScreeningBand};
use crate::vocabulary::RecordVocabulary;

/// The clinical indices derived from one record.
///
/// Optional fields are `None` when their inputs are missing; presentation
/// layers show a "not available" placeholder for them. Nutrient pairs are
/// always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DerivedMetrics {
    pub bmi: Option<f64>,
    pub bmi_class: Option<BmiClass>,
    pub screening_score: Option<f64>,
    pub screening_band: Option<ScreeningBand>,
    pub nutrient_goals: Vec<NutrientGoal>,
}

impl DerivedMetrics {
    pub fn compute(record: &PatientRecord, vocabulary: &RecordVocabulary) -> Self {
        let bmi = bmi::bmi(record, &vocabulary.anthropometry);
        let screening_score = screening::screening_score(record, &vocabulary.screening);
        if bmi.is_none() {
            debug!(section = %vocabulary.anthropometry.section, "BMI unavailable");
        }
        if screening_score.is_none() {
            debug!(section = %vocabulary.screening.section, "screening score unavailable");
        }

        Self {
            bmi,
            bmi_class: bmi.map(BmiClass::from_bmi),
            screening_score,
            screening_band: screening_score.map(ScreeningBand::from_score),
            nutrient_goals: nutrients::nutrient_goals(record, &vocabulary.nutrients),
        }
    }

    /// [`compute`](Self::compute) with the default vocabulary.
    pub fn from_record(record: &PatientRecord) -> Self {
        Self::compute(record, &RecordVocabulary::default())
    }
}
