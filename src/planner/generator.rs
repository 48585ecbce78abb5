use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::error::{PlanError, Result};
use crate::models::{GeneratedPlan, MealPlan, TargetProfile};
use crate::planner::config::AdjustConfig;
use crate::planner::filler::fill_calories;
use crate::planner::nutrients::{plan_totals, running_totals};
use crate::planner::protein::{balance_protein, ProteinDirection};
use crate::planner::reconcile::reconcile;
use crate::planner::rotation::{PlanRotator, TemplateLibrary};
use crate::planner::scaling::{scale_toward, ScaleDirection};

/// Turns rotated templates into plans adjusted toward a target profile.
///
/// Holds the rotation state across calls; `generate` takes `&mut self`, so one
/// generator serves one session at a time.
#[derive(Debug)]
pub struct PlanGenerator<R = StdRng> {
    rotator: PlanRotator<R>,
    config: AdjustConfig,
}

impl<R: Rng> PlanGenerator<R> {
    pub fn new(rotator: PlanRotator<R>, config: AdjustConfig) -> Self {
        Self { rotator, config }
    }

    pub fn config(&self) -> &AdjustConfig {
        &self.config
    }

    /// Pick the next template in rotation and adjust a copy of it.
    pub fn generate(
        &mut self,
        library: &TemplateLibrary,
        targets: &TargetProfile,
    ) -> Result<GeneratedPlan> {
        if library.is_empty() {
            return Err(PlanError::EmptyLibrary);
        }

        let template = self.rotator.next(library)?;
        debug!(template = %template.name, "selected template");

        Ok(adjust_plan(template, targets, &self.config))
    }
}

/// Run every adjustment phase, in order, on a copy of `template`.
pub fn adjust_plan(
    template: &MealPlan,
    targets: &TargetProfile,
    config: &AdjustConfig,
) -> GeneratedPlan {
    let mut plan = template.clone();
    let cap = config.max_iterations;

    let totals = running_totals(&plan);
    debug!(
        calories = totals.calories,
        protein = totals.protein,
        "template baseline"
    );

    let totals = scale_toward(&mut plan, totals, targets.calories, cap, ScaleDirection::Reduce);
    let totals = balance_protein(
        &mut plan,
        totals,
        targets.protein,
        config,
        ProteinDirection::Increase,
    );
    let totals = balance_protein(
        &mut plan,
        totals,
        targets.protein,
        config,
        ProteinDirection::Decrease,
    );
    let totals = fill_calories(
        &mut plan,
        totals,
        targets.calories,
        config.filler_step_grams,
        cap,
        &config.protein_category,
    );
    let totals = reconcile(&mut plan, totals, targets, config);

    let snapshot = plan_totals(&plan);
    info!(
        template = %template.name,
        calories = snapshot.calories,
        protein = snapshot.protein,
        target_calories = targets.calories,
        target_protein = targets.protein,
        drift = (snapshot.calories - totals.calories).abs(),
        "generated plan"
    );

    GeneratedPlan {
        template_name: template.name.clone(),
        plan,
        targets: *targets,
        totals: snapshot,
    }
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
    fn test_empty_library_is_an_error() {
        let mut generator = PlanGenerator::new(PlanRotator::seeded(1), AdjustConfig::default());
        let targets = TargetProfile::new(2000.0, 150.0).unwrap();

        let result = generator.generate(&TemplateLibrary::new(), &targets);
        assert!(matches!(result, Err(PlanError::EmptyLibrary)));
    }

    #[test]
    fn test_oats_plan_is_calorie_bound() {
        let mut template = MealPlan::new("CuttingA");
        template.push(MealSlot::Breakfast, oats(), 200.0);
        let targets = TargetProfile::new(500.0, 20.0).unwrap();

        let generated = adjust_plan(&template, &targets, &AdjustConfig::default());

        // 500 / 380 * 100, plus at most one fine step if rounding left it short.
        let grams = generated.plan.meal(MealSlot::Breakfast)[0].grams;
        assert!(grams > 131.57 && grams < 131.58 + 1.0, "grams = {}", grams);
        assert!(generated.totals.protein > 17.1 && generated.totals.protein < 17.25);
        assert!(generated.totals.calories <= 500.0 + 3.8 + 1e-9);
        assert_eq!(generated.template_name, "CuttingA");
        assert_eq!(generated.name(), "CuttingA");

        // The template itself is untouched.
        assert_eq!(template.meal(MealSlot::Breakfast)[0].grams, 200.0);
    }
}
