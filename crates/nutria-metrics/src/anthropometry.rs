use nutria_core::PatientRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::vocabulary::AnthropometryFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Measure {
    CurrentWeight,
    UsualWeight,
    ArmCircumference,
    CalfCircumference,
    BodyFat,
}

impl Measure {
    pub const ALL: [Measure; 5] = [
        Measure::CurrentWeight,
        Measure::UsualWeight,
        Measure::ArmCircumference,
        Measure::CalfCircumference,
        Measure::BodyFat,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Measure::CurrentWeight => "Current Weight",
            Measure::UsualWeight => "Usual Weight",
            Measure::ArmCircumference => "Arm Circumference",
            Measure::CalfCircumference => "Calf Circumference",
            Measure::BodyFat => "Body Fat",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Measure::CurrentWeight | Measure::UsualWeight => "kg",
            Measure::ArmCircumference | Measure::CalfCircumference => "cm",
            Measure::BodyFat => "%",
        }
    }

    fn field(self, fields: &AnthropometryFields) -> &str {
        match self {
            Measure::CurrentWeight => &fields.weight,
            Measure::UsualWeight => &fields.usual_weight,
            Measure::ArmCircumference => &fields.arm_circumference,
            Measure::CalfCircumference => &fields.calf_circumference,
            Measure::BodyFat => &fields.body_fat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Measurement {
    pub measure: Measure,
    /// Zero when the record lacks the measurement.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnthropometryPanel {
    /// One entry per [`Measure`], in [`Measure::ALL`] order.
    pub measurements: Vec<Measurement>,
    pub muscle_mass: Option<f64>,
    pub waist_hip_ratio: Option<f64>,
}

impl AnthropometryPanel {
    pub fn value(&self, measure: Measure) -> f64 {
        self.measurements
            .iter()
            .find(|m| m.measure == measure)
            .map_or(0.0, |m| m.value)
    }
}

pub fn anthropometry_panel(record: &PatientRecord, fields: &AnthropometryFields) -> AnthropometryPanel {
    let read = |field: &str| record.number(&fields.section, field);
    AnthropometryPanel {
        measurements: Measure::ALL
            .iter()
            .map(|&measure| Measurement {
                measure,
                value: read(measure.field(fields)).unwrap_or(0.0),
            })
            .collect(),
        muscle_mass: read(fields.muscle_mass.as_str()),
        waist_hip_ratio: read(fields.waist_hip_ratio.as_str()),
    }
}
