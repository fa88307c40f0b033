//! Section and field names the metrics engine reads.
//!
//! Names are matched verbatim against the parsed record. Every field has a
//! default, so a vocabulary file only needs to list what differs.

use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// Current vocabulary version. Bump when the shape changes and add a step
/// to [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordVocabulary {
    /// Schema version. Missing or 0 = pre-versioned file.
    pub config_version: u32,
    pub patient: PatientFields,
    pub anthropometry: AnthropometryFields,
    pub biochemistry: BiochemistryFields,
    pub screening: ScreeningFields,
    pub nutrients: NutrientFields,
    pub prescription: PrescriptionFields,
}

impl Default for RecordVocabulary {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            patient: PatientFields::default(),
            anthropometry: AnthropometryFields::default(),
            biochemistry: BiochemistryFields::default(),
            screening: ScreeningFields::default(),
            nutrients: NutrientFields::default(),
            prescription: PrescriptionFields::default(),
        }
    }
}

impl RecordVocabulary {
    /// Load a vocabulary from JSON, migrating older versions.
    pub fn from_json(contents: &str) -> Result<Self, MetricsError> {
        // Parse as raw JSON first so migrations run before deserializing.
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX));

        let migrated = migrate(json, on_disk_version)?;
        Ok(serde_json::from_value(migrated)?)
    }
}

fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, MetricsError> {
    if from_version > CURRENT_VERSION {
        return Err(MetricsError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    let obj = json.as_object_mut().ok_or(MetricsError::NotAnObject)?;

    // v0 → v1: shape unchanged, stamp the version.
    if from_version < 1 {
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::debug!("migrated vocabulary v0 → v1");
    }

    Ok(json)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientFields {
    pub section: String,
    pub name: String,
    pub birth_date: String,
    pub sex: String,
    pub phone: String,
    pub record_number: String,
}

impl Default for PatientFields {
    fn default() -> Self {
        Self {
            section: "PATIENT DATA".to_string(),
            name: "Name".to_string(),
            birth_date: "Date of Birth".to_string(),
            sex: "Sex".to_string(),
            phone: "Phone".to_string(),
            record_number: "Record Number".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnthropometryFields {
    pub section: String,
    /// Current weight in kilograms.
    pub weight: String,
    /// Height in centimeters.
    pub height: String,
    pub usual_weight: String,
    pub arm_circumference: String,
    pub calf_circumference: String,
    pub body_fat: String,
    pub muscle_mass: String,
    pub waist_hip_ratio: String,
}

impl Default for AnthropometryFields {
    fn default() -> Self {
        Self {
            section: "ANTHROPOMETRY".to_string(),
            weight: "Weight (kg)".to_string(),
            height: "Height (cm)".to_string(),
            usual_weight: "Usual Weight (kg)".to_string(),
            arm_circumference: "Arm Circumference (cm)".to_string(),
            calf_circumference: "Calf Circumference (cm)".to_string(),
            body_fat: "Body Fat Percentage (%)".to_string(),
            muscle_mass: "Muscle Mass (kg)".to_string(),
            waist_hip_ratio: "Waist/Hip Ratio".to_string(),
        }
    }
}

/// A laboratory marker and the reference value it is compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub marker: String,
    pub field: String,
    pub unit: String,
    pub reference: f64,
}

impl MarkerSpec {
    fn new(marker: &str, field: &str, unit: &str, reference: f64) -> Self {
        Self {
            marker: marker.to_string(),
            field: field.to_string(),
            unit: unit.to_string(),
            reference,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiochemistryFields {
    pub section: String,
    pub markers: Vec<MarkerSpec>,
    /// Listed without a reference value.
    pub extra_markers: Vec<LabMarkerSpec>,
}

/// A laboratory value reported as recorded, with no reference line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabMarkerSpec {
    pub marker: String,
    pub field: String,
    pub unit: String,
}

impl LabMarkerSpec {
    fn new(marker: &str, field: &str, unit: &str) -> Self {
        Self {
            marker: marker.to_string(),
            field: field.to_string(),
            unit: unit.to_string(),
        }
    }
}

impl Default for BiochemistryFields {
    fn default() -> Self {
        Self {
            section: "BIOCHEMICAL EXAMS".to_string(),
            markers: vec![
                MarkerSpec::new("Glucose", "Glucose (mg/dL)", "mg/dL", 100.0),
                MarkerSpec::new("Total Cholesterol", "Total Cholesterol (mg/dL)", "mg/dL", 200.0),
                MarkerSpec::new("HDL", "HDL (mg/dL)", "mg/dL", 40.0),
                MarkerSpec::new("LDL", "LDL (mg/dL)", "mg/dL", 100.0),
                MarkerSpec::new("Albumin", "Albumin (g/dL)", "g/dL", 3.5),
                MarkerSpec::new("Hemoglobin", "Hemoglobin (g/dL)", "g/dL", 14.0),
            ],
            extra_markers: vec![
                LabMarkerSpec::new("Urea", "Urea (mg/dL)", "mg/dL"),
                LabMarkerSpec::new("Creatinine", "Creatinine (mg/dL)", "mg/dL"),
                LabMarkerSpec::new("Ferritin", "Ferritin (ng/mL)", "ng/mL"),
            ],
        }
    }
}

/// One questionnaire item and the short category it is charted under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningItemSpec {
    pub field: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningFields {
    pub section: String,
    pub total_score: String,
    /// Free-text diagnosis as recorded by the assessor.
    pub diagnosis: String,
    pub items: Vec<ScreeningItemSpec>,
}

impl Default for ScreeningFields {
    fn default() -> Self {
        let items = [
            ("A. Food intake declined over the past 3 months", "Food Intake"),
            ("B. Weight loss during the last 3 months", "Weight Loss"),
            ("C. Mobility", "Mobility"),
            (
                "D. Psychological stress or acute disease in the past 3 months",
                "Stress/Illness",
            ),
            ("E. Neuropsychological problems", "Neuropsychological"),
            ("F. Body Mass Index (BMI)", "BMI"),
        ];
        Self {
            section: "SCREENING".to_string(),
            total_score: "Total Score".to_string(),
            diagnosis: "Diagnosis".to_string(),
            items: items
                .iter()
                .map(|(field, category)| ScreeningItemSpec {
                    field: field.to_string(),
                    category: category.to_string(),
                })
                .collect(),
        }
    }
}

/// Field names for one nutrient: the prescribed goal and the recorded intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalFields {
    pub goal: String,
    pub actual: String,
}

impl GoalFields {
    fn new(goal: &str, actual: &str) -> Self {
        Self {
            goal: goal.to_string(),
            actual: actual.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientFields {
    pub prescription_section: String,
    pub intake_section: String,
    pub calories: GoalFields,
    pub protein: GoalFields,
    pub carbohydrate: GoalFields,
    pub fat: GoalFields,
}

impl Default for NutrientFields {
    fn default() -> Self {
        Self {
            prescription_section: "DIETARY PRESCRIPTION".to_string(),
            intake_section: "DIETARY HISTORY".to_string(),
            calories: GoalFields::new("Calorie Goal (kcal/day)", "Total Calories"),
            protein: GoalFields::new("Protein Goal (g/day)", "Total Protein"),
            carbohydrate: GoalFields::new("Carbohydrate Goal (g/day)", "Total Carbohydrates"),
            fat: GoalFields::new("Fat Goal (g/day)", "Total Fat"),
        }
    }
}

/// The free-text part of the dietary prescription. Goals live in
/// [`NutrientFields`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrescriptionFields {
    pub section: String,
    pub diet_type: String,
    pub meal_plan: String,
    pub restrictions: String,
    pub supplements: String,
}

impl Default for PrescriptionFields {
    fn default() -> Self {
        Self {
            section: "DIETARY PRESCRIPTION".to_string(),
            diet_type: "Diet Type".to_string(),
            meal_plan: "Detailed Meal Plan".to_string(),
            restrictions: "Food Restrictions".to_string(),
            supplements: "Nutritional Supplements".to_string(),
        }
    }
}
