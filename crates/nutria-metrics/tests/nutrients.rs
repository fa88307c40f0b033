use nutria_metrics::nutrients::{self, Nutrient, NutrientGoal};
use nutria_metrics::vocabulary::NutrientFields;
use nutria_metrics::PatientRecord;

#[test]
fn goal_without_intake_defaults_actual_to_zero() {
    let record = PatientRecord::parse("DIETARY PRESCRIPTION\nCalorie Goal (kcal/day),\"1800\"\n");
    let goals = nutrients::nutrient_goals(&record, &NutrientFields::default());
    let calories = &goals[0];
    assert_eq!(calories.nutrient, Nutrient::Calories);
    assert_eq!((calories.goal, calories.actual), (1800.0, 0.0));
    assert_eq!(calories.delta, -1800.0);
}

#[test]
fn all_four_pairs_always_present() {
    let goals = nutrients::nutrient_goals(&PatientRecord::default(), &NutrientFields::default());
    let order: Vec<_> = goals.iter().map(|g| g.nutrient).collect();
    assert_eq!(order, Nutrient::ALL);
    assert!(goals.iter().all(|g| g.goal == 0.0 && g.actual == 0.0));
}

#[test]
fn reads_goal_and_intake_sections() {
    let text = "\
DIETARY PRESCRIPTION
Calorie Goal (kcal/day),\"2000\"
Protein Goal (g/day),\"80\"
Carbohydrate Goal (g/day),\"250\"
Fat Goal (g/day),\"65\"

DIETARY HISTORY
Total Calories,\"1650.5\"
Total Protein,\"62\"
Total Carbohydrates,\"210\"
Total Fat,\"not recorded\"
";
    let record = PatientRecord::parse(text);
    let goals = nutrients::nutrient_goals(&record, &NutrientFields::default());
    assert_eq!(goals[0], NutrientGoal::new(Nutrient::Calories, 2000.0, 1650.5));
    assert_eq!(goals[1], NutrientGoal::new(Nutrient::Protein, 80.0, 62.0));
    assert_eq!(goals[2], NutrientGoal::new(Nutrient::Carbohydrate, 250.0, 210.0));
    // Text intake reads as zero.
    assert_eq!(goals[3], NutrientGoal::new(Nutrient::Fat, 65.0, 0.0));
}

#[test]
fn attainment() {
    assert_eq!(NutrientGoal::new(Nutrient::Protein, 80.0, 60.0).attainment(), Some(0.75));
    assert_eq!(NutrientGoal::new(Nutrient::Fat, 0.0, 10.0).attainment(), None);
}
