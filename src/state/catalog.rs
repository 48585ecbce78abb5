use std::collections::HashMap;
use std::sync::Arc;

use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{FoodRecord, MealPlan, PlanRecord};
use crate::planner::constants::SUGGESTION_THRESHOLD;
use crate::planner::TemplateLibrary;

/// Closest candidate to `input` by Jaro-Winkler similarity, if any is close enough.
pub fn closest_match<'a, I>(input: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = input.to_lowercase();
    candidates
        .into_iter()
        .map(|c| (c, jaro_winkler(&c.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c.to_string())
}

/// Food catalog keyed by lowercase name.
///
/// Records are shared with every plan built from the catalog and never change
/// after loading.
pub struct FoodCatalog {
    foods: HashMap<String, Arc<FoodRecord>>,
}

impl FoodCatalog {
    /// Build a catalog; later records replace earlier ones with the same name.
    pub fn new(foods: Vec<FoodRecord>) -> Self {
        let mut map = HashMap::new();
        for food in foods {
            map.insert(food.key(), Arc::new(food));
        }
        Self { foods: map }
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Arc<FoodRecord>> {
        self.foods.get(&name.to_lowercase())
    }

    /// Look up a food, failing with a suggestion when the name is unknown.
    pub fn resolve(&self, name: &str) -> Result<Arc<FoodRecord>> {
        self.get(name).cloned().ok_or_else(|| PlanError::FoodNotFound {
            name: name.to_string(),
            suggestion: closest_match(name, self.foods.values().map(|f| f.name.as_str())),
        })
    }

    /// Turn a stored plan into a plan referencing catalog records.
    pub fn build_plan(&self, record: &PlanRecord) -> Result<MealPlan> {
        let mut plan = MealPlan::new(record.name.clone());

        for (slot, portions) in &record.meals {
            // Keep empty slots so they still render.
            plan.meals.entry(*slot).or_default();

            for portion in portions {
                if !(portion.grams.is_finite() && portion.grams >= 0.0) {
                    return Err(PlanError::InvalidInput(format!(
                        "{}: {} has invalid portion {} g in {}",
                        record.name, portion.food, portion.grams, slot
                    )));
                }
                let food = self.resolve(&portion.food)?;
                plan.push(*slot, food, portion.grams);
            }
        }

        Ok(plan)
    }

    /// Build a template library; later records replace earlier ones with the same name.
    pub fn build_library(&self, records: &[PlanRecord]) -> Result<TemplateLibrary> {
        let mut library = TemplateLibrary::new();
        for record in records {
            let plan = self.build_plan(record)?;
            library.insert(plan.name.clone(), plan);
        }
        Ok(library)
    }

    /// All foods, sorted by name.
    pub fn all_foods(&self) -> Vec<&FoodRecord> {
        let mut foods: Vec<&FoodRecord> = self.foods.values().map(|f| f.as_ref()).collect();
        foods.sort_by(|a, b| a.name.cmp(&b.name));
        foods
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if the catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
