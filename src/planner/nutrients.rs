use crate::models::{FoodRecord, MealPlan, NutrientTotals, PortionEntry};

/// Calorie and protein totals threaded through the adjustment phases.
///
/// Each phase takes the totals it starts from and returns the totals it ends
/// with. Phases that move single entries update these incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningTotals {
    pub calories: f64,
    pub protein: f64,
}

impl RunningTotals {
    /// Account for `grams` added to (or removed from, when negative) one food.
    #[inline]
    pub fn apply(&mut self, food: &FoodRecord, grams: f64) {
        self.calories += food.calories_for(grams);
        self.protein += food.protein_for(grams);
    }
}

impl From<NutrientTotals> for RunningTotals {
    fn from(totals: NutrientTotals) -> Self {
        Self {
            calories: totals.calories,
            protein: totals.protein,
        }
    }
}

/// Sum the macros of a sequence of portions.
pub fn sum_entries<'a, I>(entries: I) -> NutrientTotals
where
    I: IntoIterator<Item = &'a PortionEntry>,
{
    entries
        .into_iter()
        .fold(NutrientTotals::default(), |mut acc, entry| {
            acc.calories += entry.food.calories_for(entry.grams);
            acc.protein += entry.food.protein_for(entry.grams);
            acc.carbs += entry.food.carbohydrates_for(entry.grams);
            acc.fats += entry.food.fats_for(entry.grams);
            acc
        })
}

/// Totals over every entry in every meal of a plan.
pub fn plan_totals(plan: &MealPlan) -> NutrientTotals {
    sum_entries(plan.entries())
}

/// Totals for a single meal.
pub fn meal_totals(entries: &[PortionEntry]) -> NutrientTotals {
    sum_entries(entries)
}

/// Calorie and protein totals for a plan, recomputed from scratch.
pub fn running_totals(plan: &MealPlan) -> RunningTotals {
    plan_totals(plan).into()
}
