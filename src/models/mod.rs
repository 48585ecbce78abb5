pub mod food;
pub mod plan;
pub mod targets;

pub use food::FoodRecord;
pub use plan::{
    GeneratedPlan, MealPlan, MealSlot, NutrientTotals, PlanRecord, PortionEntry, PortionRecord,
};
pub use targets::{ActivityLevel, BodyMetrics, FitnessGoal, Sex, TargetProfile};
