use tracing::debug;

use crate::models::{MealPlan, PortionEntry};
use crate::planner::nutrients::RunningTotals;

/// Raise calories in fixed steps on entries accepted by `eligible`.
///
/// Sweeps meals in slot order and entries in stored order, updating the
/// running totals after every move and stopping the moment calories reach the
/// target. Returns the totals and the number of completed sweeps.
pub(crate) fn fill_with<F>(
    plan: &mut MealPlan,
    totals: RunningTotals,
    target_calories: f64,
    step_grams: f64,
    max_iterations: usize,
    eligible: F,
) -> (RunningTotals, usize)
where
    F: Fn(&PortionEntry) -> bool,
{
    let mut totals = totals;
    let mut iterations = 0;

    'sweeps: while totals.calories < target_calories && iterations < max_iterations {
        let mut moved = false;

        for entry in plan.entries_mut() {
            if !eligible(&*entry) {
                continue;
            }

            entry.grams += step_grams;
            totals.apply(&entry.food, step_grams);
            moved = true;

            if totals.calories >= target_calories {
                break 'sweeps;
            }
        }

        if !moved {
            break;
        }
        iterations += 1;
    }

    (totals, iterations)
}

/// Top up calories with foods outside the protein category.
///
/// Foods tagged with `protein_category` are left alone so protein intake does
/// not drift while calories are raised.
pub fn fill_calories(
    plan: &mut MealPlan,
    totals: RunningTotals,
    target_calories: f64,
    step_grams: f64,
    max_iterations: usize,
    protein_category: &str,
) -> RunningTotals {
    let (totals, iterations) = fill_with(
        plan,
        totals,
        target_calories,
        step_grams,
        max_iterations,
        |entry| !entry.food.has_category(protein_category),
    );

    debug!(
        iterations,
        calories = totals.calories,
        target = target_calories,
        protein = totals.protein,
        "calorie fill finished"
    );
    totals
}
