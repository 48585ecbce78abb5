use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{PlanError, Result};
use crate::models::{FoodRecord, GeneratedPlan, PlanRecord};
use crate::planner::nutrients::meal_totals;

/// Load foods from a JSON file.
///
/// Deduplicates by lowercase name (last occurrence wins). A record with a
/// negative macro or portion is rejected.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRecord>> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<FoodRecord> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, FoodRecord> = HashMap::new();
    for food in foods {
        if !food.is_valid() {
            return Err(PlanError::InvalidInput(format!(
                "Food '{}' has negative nutrient values",
                food.name
            )));
        }
        seen.insert(food.key(), food);
    }

    Ok(seen.into_values().collect())
}

/// Load stored plans (templates or saved plans) from a JSON file.
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<PlanRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save plans to a JSON file, replacing its contents.
pub fn save_plans<P: AsRef<Path>>(path: P, plans: &[PlanRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(plans)?;
    fs::write(path, json)?;
    Ok(())
}

/// Add a generated plan to a plan file.
///
/// Existing plans are kept; one with the same name is replaced.
pub fn save_generated<P: AsRef<Path>>(path: P, generated: &GeneratedPlan) -> Result<()> {
    let path = path.as_ref();
    let mut plans = if path.exists() {
        load_plans(path)?
    } else {
        Vec::new()
    };

    plans.retain(|p| p.name != generated.name());
    plans.push(generated.plan.to_record());
    save_plans(path, &plans)
}

/// Write a generated plan as CSV, one row per portion.
pub fn export_csv<P: AsRef<Path>>(path: P, generated: &GeneratedPlan) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "plan", "meal", "food", "grams", "calories", "protein", "carbs", "fats",
    ])?;

    for (slot, entries) in &generated.plan.meals {
        for entry in entries {
            let totals = meal_totals(std::slice::from_ref(entry));
            wtr.write_record([
                generated.name().to_string(),
                slot.label().to_string(),
                entry.food.name.clone(),
                format!("{:.1}", entry.grams),
                format!("{:.1}", totals.calories),
                format!("{:.1}", totals.protein),
                format!("{:.1}", totals.carbs),
                format!("{:.1}", totals.fats),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
