use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A catalog food with its macro profile per 100 grams.
///
/// Categories are free-form lowercase labels ("protein", "grain", ...). The
/// calorie filler uses them to keep protein sources out of the top-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,

    #[serde(default)]
    pub categories: BTreeSet<String>,

    /// Calories per 100 g.
    pub calories: u32,

    /// Protein per 100 g.
    pub protein: f64,

    /// Carbohydrates per 100 g.
    pub carbohydrates: f64,

    /// Fats per 100 g.
    pub fats: f64,

    /// Default portion size in grams. Informational only.
    #[serde(default)]
    pub portion: f64,
}

impl FoodRecord {
    /// Calories contributed by `grams` of this food.
    #[inline]
    pub fn calories_for(&self, grams: f64) -> f64 {
        self.calories as f64 * grams / 100.0
    }

    /// Protein contributed by `grams` of this food.
    #[inline]
    pub fn protein_for(&self, grams: f64) -> f64 {
        self.protein * grams / 100.0
    }

    #[inline]
    pub fn carbohydrates_for(&self, grams: f64) -> f64 {
        self.carbohydrates * grams / 100.0
    }

    #[inline]
    pub fn fats_for(&self, grams: f64) -> f64 {
        self.fats * grams / 100.0
    }

    /// Whether the food carries the given category label (case-insensitive).
    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }

    /// Basic validation: non-negative macros and portion.
    pub fn is_valid(&self) -> bool {
        self.protein >= 0.0 && self.carbohydrates >= 0.0 && self.fats >= 0.0 && self.portion >= 0.0
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for FoodRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodRecord {}
