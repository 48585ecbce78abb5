use tracing::debug;

use crate::models::{MealPlan, TargetProfile};
use crate::planner::config::AdjustConfig;
use crate::planner::filler::fill_with;
use crate::planner::nutrients::RunningTotals;
use crate::planner::protein::{balance_protein, ProteinDirection};

/// Final tightening pass run once after the main phases.
///
/// 1. A single proportional scale-down if calories are over target, with the
///    running totals adjusted by the exact amount removed from each entry.
/// 2. A protein-decrease pass to undo any overshoot.
/// 3. A fine fill on low-protein foods until calories reach the target.
pub fn reconcile(
    plan: &mut MealPlan,
    totals: RunningTotals,
    targets: &TargetProfile,
    config: &AdjustConfig,
) -> RunningTotals {
    let mut totals = totals;

    if totals.calories > targets.calories {
        let factor = targets.calories / totals.calories;
        for entry in plan.entries_mut() {
            let previous = entry.grams;
            entry.grams = (entry.grams * factor).max(0.0);
            totals.apply(&entry.food, entry.grams - previous);
        }
        debug!(factor, calories = totals.calories, "reconcile scale-down applied");
    }

    totals = balance_protein(
        plan,
        totals,
        targets.protein,
        config,
        ProteinDirection::Decrease,
    );

    let threshold = config.protein_dense_threshold;
    let (totals, iterations) = fill_with(
        plan,
        totals,
        targets.calories,
        config.fine_step_grams,
        config.max_iterations,
        |entry| entry.food.protein < threshold,
    );

    debug!(
        iterations,
        calories = totals.calories,
        protein = totals.protein,
        "reconcile fine fill finished"
    );
    totals
}
