use nutria_core::PatientRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::vocabulary::AnthropometryFields;

/// Lower bound (inclusive) of each class above underweight.
pub const NORMAL_MIN: f64 = 18.5;
pub const OVERWEIGHT_MIN: f64 = 25.0;
pub const OBESE_MIN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiClass {
    /// Bucket a BMI value. Each band includes its lower bound, so 25.0 is
    /// overweight and 30.0 is obese. Anything that is not below a bound
    /// (including NaN) lands in the top band.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_MIN {
            BmiClass::Underweight
        } else if bmi < OVERWEIGHT_MIN {
            BmiClass::Normal
        } else if bmi < OBESE_MIN {
            BmiClass::Overweight
        } else {
            BmiClass::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiClass::Underweight => "Underweight",
            BmiClass::Normal => "Normal",
            BmiClass::Overweight => "Overweight",
            BmiClass::Obese => "Obese",
        }
    }
}

/// weight ÷ (height in meters)². Inputs are not checked for plausibility.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI from the anthropometry section, or `None` when weight or height is
/// missing or not numeric, or the result is not finite (zero height).
pub fn bmi(record: &PatientRecord, fields: &AnthropometryFields) -> Option<f64> {
    let weight = record.number(&fields.section, &fields.weight)?;
    let height = record.number(&fields.section, &fields.height)?;
    Some(body_mass_index(weight, height)).filter(|b| b.is_finite())
}
