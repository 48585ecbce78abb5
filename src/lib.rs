pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlanError, Result};
pub use models::{FoodRecord, GeneratedPlan, MealPlan, MealSlot, TargetProfile};
pub use planner::{AdjustConfig, PlanGenerator, PlanRotator, TemplateLibrary};
