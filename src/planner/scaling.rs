use tracing::{debug, warn};

use crate::models::MealPlan;
use crate::planner::nutrients::{running_totals, RunningTotals};

/// Which side of the calorie target the scaler corrects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDirection {
    /// Shrink portions while calories exceed the target.
    Reduce,
    /// Grow portions while calories fall short of the target.
    Grow,
}

impl ScaleDirection {
    fn needs_work(&self, calories: f64, target: f64) -> bool {
        match self {
            ScaleDirection::Reduce => calories > target,
            ScaleDirection::Grow => calories < target,
        }
    }
}

/// Multiply every portion by the same factor, clamping at zero.
pub fn scale_portions(plan: &mut MealPlan, factor: f64) {
    for entry in plan.entries_mut() {
        entry.grams = (entry.grams * factor).max(0.0);
    }
}

/// Proportionally rescale all portions toward the calorie target.
///
/// Each iteration applies one global factor `target / current` and then
/// recomputes the totals from scratch. A plan with no calories has no finite
/// factor and is left untouched.
pub fn scale_toward(
    plan: &mut MealPlan,
    totals: RunningTotals,
    target_calories: f64,
    max_iterations: usize,
    direction: ScaleDirection,
) -> RunningTotals {
    let mut totals = totals;
    let mut iterations = 0;

    while direction.needs_work(totals.calories, target_calories) && iterations < max_iterations {
        if totals.calories <= 0.0 {
            warn!(
                plan = %plan.name,
                calories = totals.calories,
                "baseline has no calories, skipping proportional scaling"
            );
            break;
        }

        let factor = target_calories / totals.calories;
        scale_portions(plan, factor);
        totals = running_totals(plan);
        iterations += 1;
    }

    debug!(
        ?direction,
        iterations,
        calories = totals.calories,
        protein = totals.protein,
        "portion scaling finished"
    );
    totals
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{FoodRecord, MealSlot};

    fn oats() -> Arc<FoodRecord> {
        Arc::new(FoodRecord {
            name: "Oats".to_string(),
            categories: ["grain".to_string()].into(),
            calories: 380,
            protein: 13.0,
            carbohydrates: 60.0,
            fats: 7.0,
            portion: 50.0,
        })
    }

    #[test]
    fn test_reduce_scales_to_target() {
        let mut plan = MealPlan::new("CuttingA");
        plan.push(MealSlot::Breakfast, oats(), 200.0);
        let start = running_totals(&plan);

        let end = scale_toward(&mut plan, start, 500.0, 1000, ScaleDirection::Reduce);

        let grams = plan.meal(MealSlot::Breakfast)[0].grams;
        assert!((grams - 500.0 / 380.0 * 100.0).abs() < 1e-6);
        assert!((end.calories - 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_reduce_leaves_plan_under_target_alone() {
        let mut plan = MealPlan::new("Light");
        plan.push(MealSlot::Lunch, oats(), 50.0);
        let start = running_totals(&plan);

        let end = scale_toward(&mut plan, start, 500.0, 1000, ScaleDirection::Reduce);

        assert_eq!(plan.meal(MealSlot::Lunch)[0].grams, 50.0);
        assert_eq!(end, start);
    }

    #[test]
    fn test_grow_scales_up() {
        let mut plan = MealPlan::new("Light");
        plan.push(MealSlot::Lunch, oats(), 50.0);
        let start = running_totals(&plan);

        let end = scale_toward(&mut plan, start, 760.0, 1000, ScaleDirection::Grow);

        assert!((plan.meal(MealSlot::Lunch)[0].grams - 200.0).abs() < 1e-6);
        assert!((end.calories - 760.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_calorie_baseline_is_skipped() {
        let mut plan = MealPlan::new("Empty");
        let end = scale_toward(
            &mut plan,
            RunningTotals::default(),
            2000.0,
            1000,
            ScaleDirection::Grow,
        );
        assert_eq!(end, RunningTotals::default());
    }
}
