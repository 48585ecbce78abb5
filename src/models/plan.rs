use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::food::FoodRecord;
use crate::models::targets::TargetProfile;

/// Fixed daily meal slots.
///
/// The declaration order is the display order and the scan order of every
/// adjustment phase; `Ord` follows it, so a `BTreeMap` keyed by slot iterates
/// breakfast first and dinner last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Snack1,
    Lunch,
    Snack2,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::Snack1,
        MealSlot::Lunch,
        MealSlot::Snack2,
        MealSlot::Dinner,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Snack1 => "Snack1",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack2 => "Snack2",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A portion of one catalog food inside a meal.
///
/// The food is shared and immutable; only `grams` changes during adjustment.
#[derive(Debug, Clone)]
pub struct PortionEntry {
    pub food: Arc<FoodRecord>,
    pub grams: f64,
}

impl PortionEntry {
    pub fn new(food: Arc<FoodRecord>, grams: f64) -> Self {
        Self { food, grams }
    }
}

/// A named plan: meal slot to ordered portions.
///
/// Used both for templates and for the working copy of a generated plan.
/// `Clone` copies every entry, so a clone never aliases the grams of its source.
#[derive(Debug, Clone, Default)]
pub struct MealPlan {
    pub name: String,
    pub meals: BTreeMap<MealSlot, Vec<PortionEntry>>,
}

impl MealPlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meals: BTreeMap::new(),
        }
    }

    /// Append a portion to a meal slot.
    pub fn push(&mut self, slot: MealSlot, food: Arc<FoodRecord>, grams: f64) {
        self.meals
            .entry(slot)
            .or_default()
            .push(PortionEntry::new(food, grams));
    }

    /// Entries of a slot, empty if the slot is absent.
    pub fn meal(&self, slot: MealSlot) -> &[PortionEntry] {
        self.meals.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All entries in scan order.
    pub fn entries(&self) -> impl Iterator<Item = &PortionEntry> {
        self.meals.values().flatten()
    }

    /// All entries in scan order, mutably.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut PortionEntry> {
        self.meals.values_mut().flatten()
    }

    pub fn entry_count(&self) -> usize {
        self.meals.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Convert to the serializable record form.
    pub fn to_record(&self) -> PlanRecord {
        let meals = self
            .meals
            .iter()
            .map(|(slot, entries)| {
                let portions = entries
                    .iter()
                    .map(|e| PortionRecord {
                        food: e.food.name.clone(),
                        grams: e.grams,
                    })
                    .collect();
                (*slot, portions)
            })
            .collect();

        PlanRecord {
            name: self.name.clone(),
            meals,
        }
    }
}

/// Macro totals for a plan or a single meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// A plan produced by the adjustment heuristic.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    /// Name of the template the plan was derived from.
    pub template_name: String,

    /// The adjusted plan. Its name starts as the template's name.
    pub plan: MealPlan,

    /// Targets the plan was adjusted toward.
    pub targets: TargetProfile,

    /// Totals snapshot taken at the end of generation.
    pub totals: NutrientTotals,
}

impl GeneratedPlan {
    pub fn name(&self) -> &str {
        &self.plan.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.plan.name = name.into();
    }
}

/// One portion as stored on disk: a catalog food name and grams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortionRecord {
    pub food: String,
    pub grams: f64,
}

/// A plan as stored on disk. Meal keys must be valid [`MealSlot`] names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    pub name: String,

    #[serde(default)]
    pub meals: BTreeMap<MealSlot, Vec<PortionRecord>>,
}
