use nutria_core::PatientRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::vocabulary::{GoalFields, NutrientFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbohydrate,
    Fat,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbohydrate,
        Nutrient::Fat,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbohydrate => "Carbohydrates",
            Nutrient::Fat => "Fat",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }

    fn fields(self, fields: &NutrientFields) -> &GoalFields {
        match self {
            Nutrient::Calories => &fields.calories,
            Nutrient::Protein => &fields.protein,
            Nutrient::Carbohydrate => &fields.carbohydrate,
            Nutrient::Fat => &fields.fat,
        }
    }
}

/// Prescribed daily goal against recorded intake. Both sides are zero when
/// the record lacks them, never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NutrientGoal {
    pub nutrient: Nutrient,
    pub goal: f64,
    pub actual: f64,
    /// `actual - goal`; negative means intake below the goal.
    pub delta: f64,
}

impl NutrientGoal {
    pub fn new(nutrient: Nutrient, goal: f64, actual: f64) -> Self {
        Self {
            nutrient,
            goal,
            actual,
            delta: actual - goal,
        }
    }

    /// Share of the goal reached, or `None` for a zero goal.
    pub fn attainment(&self) -> Option<f64> {
        (self.goal != 0.0).then(|| self.actual / self.goal)
    }
}

/// Goal/actual pairs for every [`Nutrient`], in [`Nutrient::ALL`] order.
/// Missing and non-numeric values read as zero.
pub fn nutrient_goals(record: &PatientRecord, fields: &NutrientFields) -> Vec<NutrientGoal> {
    Nutrient::ALL
        .iter()
        .map(|&nutrient| {
            let names = nutrient.fields(fields);
            let goal = record
                .number(&fields.prescription_section, &names.goal)
                .unwrap_or(0.0);
            let actual = record
                .number(&fields.intake_section, &names.actual)
                .unwrap_or(0.0);
            NutrientGoal::new(nutrient, goal, actual)
        })
        .collect()
}
