use crate::models::{
    FoodRecord, GeneratedPlan, MealPlan, MealSlot, NutrientTotals, PortionEntry, TargetProfile,
};
use crate::planner::nutrients::{meal_totals, plan_totals};

/// One portion line: grams and the macros they contribute.
pub fn format_entry(entry: &PortionEntry) -> String {
    let food = &entry.food;
    format!(
        "  {} - {:.2}g (Calories: {:.2} kcal, Protein: {:.2} g, Carbohydrates: {:.2} g, Fats: {:.2} g, Portion: {:.0} g)",
        food.name,
        entry.grams,
        food.calories_for(entry.grams),
        food.protein_for(entry.grams),
        food.carbohydrates_for(entry.grams),
        food.fats_for(entry.grams),
        food.portion
    )
}

fn format_totals(totals: &NutrientTotals) -> String {
    format!(
        "{:.2} kcal (Protein: {:.2} g, Carbohydrates: {:.2} g, Fats: {:.2} g)",
        totals.calories, totals.protein, totals.carbs, totals.fats
    )
}

/// Display a plan with per-meal and whole-plan totals.
pub fn display_plan(plan: &MealPlan) {
    println!();
    println!("=== {} ===", plan.name);

    for slot in MealSlot::ALL {
        let entries = plan.meal(slot);
        println!();
        println!("{}:", slot);

        if entries.is_empty() {
            println!("  (empty)");
            continue;
        }

        for entry in entries {
            println!("{}", format_entry(entry));
        }
        println!("  Total for {}: {}", slot, format_totals(&meal_totals(entries)));
    }

    println!();
    println!("--- Summary ---");
    println!("Total for the plan: {}", format_totals(&plan_totals(plan)));
    println!();
}

/// Display a generated plan followed by how it compares to its targets.
pub fn display_generated(generated: &GeneratedPlan) {
    display_plan(&generated.plan);

    let TargetProfile { calories, protein } = generated.targets;
    println!("Based on template: {}", generated.template_name);
    println!(
        "Calories: {:.0} / {:.0} kcal ({:+.0})",
        generated.totals.calories,
        calories,
        generated.totals.calories - calories
    );
    println!(
        "Protein:  {:.1} / {:.1} g ({:+.1})",
        generated.totals.protein,
        protein,
        generated.totals.protein - protein
    );
    println!();
}

/// Display the derived daily targets.
pub fn display_targets(targets: &TargetProfile) {
    println!("Daily targets:");
    println!("  Calories: {:.0} kcal", targets.calories);
    println!("  Protein:  {:.1} g", targets.protein);
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodRecord], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        let categories: Vec<&str> = food.categories.iter().map(String::as_str).collect();
        println!(
            "  {} - {} kcal, P:{} C:{} F:{} per 100 g [{}]",
            food.name,
            food.calories,
            food.protein,
            food.carbohydrates,
            food.fats,
            categories.join(", ")
        );
    }

    println!();
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_format_entry_scales_macros() {
        let entry = PortionEntry::new(
            Arc::new(FoodRecord {
                name: "Oats".to_string(),
                categories: Default::default(),
                calories: 380,
                protein: 13.0,
                carbohydrates: 60.0,
                fats: 7.0,
                portion: 40.0,
            }),
            50.0,
        );

        assert_eq!(
            format_entry(&entry),
            "  Oats - 50.00g (Calories: 190.00 kcal, Protein: 6.50 g, Carbohydrates: 30.00 g, Fats: 3.50 g, Portion: 40 g)"
        );
    }
}
