use tracing::debug;

use crate::models::MealPlan;
use crate::planner::config::AdjustConfig;
use crate::planner::nutrients::RunningTotals;

/// Which way the balancer moves protein.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProteinDirection {
    Increase,
    Decrease,
}

impl ProteinDirection {
    fn needs_work(&self, protein: f64, target: f64) -> bool {
        match self {
            ProteinDirection::Increase => protein < target,
            ProteinDirection::Decrease => protein > target,
        }
    }

    fn step(&self, grams: f64) -> f64 {
        match self {
            ProteinDirection::Increase => grams,
            ProteinDirection::Decrease => -grams,
        }
    }
}

/// Move protein toward its target in fixed steps on protein-dense foods.
///
/// Sweeps meals in slot order and entries in stored order. Running totals are
/// updated after every single move and the function returns as soon as the
/// target is reached, so the final move may overshoot by up to one step.
/// When decreasing, an entry whose reduced portion would be zero is skipped.
pub fn balance_protein(
    plan: &mut MealPlan,
    totals: RunningTotals,
    target_protein: f64,
    config: &AdjustConfig,
    direction: ProteinDirection,
) -> RunningTotals {
    let mut totals = totals;
    let delta = direction.step(config.protein_step_grams);
    let mut iterations = 0;

    while direction.needs_work(totals.protein, target_protein)
        && iterations < config.max_iterations
    {
        let mut moved = false;

        for entry in plan.entries_mut() {
            if entry.food.protein <= config.protein_dense_threshold {
                continue;
            }

            let new_grams = (entry.grams + delta).max(0.0);
            if new_grams == 0.0 && direction == ProteinDirection::Decrease {
                continue;
            }

            totals.apply(&entry.food, delta);
            entry.grams = new_grams;
            moved = true;

            if !direction.needs_work(totals.protein, target_protein) {
                debug!(
                    ?direction,
                    iterations,
                    protein = totals.protein,
                    calories = totals.calories,
                    "protein target reached"
                );
                return totals;
            }
        }

        // No eligible entry could move, so further sweeps would change nothing.
        if !moved {
            break;
        }
        iterations += 1;
    }

    debug!(
        ?direction,
        iterations,
        protein = totals.protein,
        target = target_protein,
        "protein balancing stopped short of target"
    );
    totals
}
