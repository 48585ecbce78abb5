pub mod config;
pub mod constants;
pub mod filler;
pub mod generator;
pub mod nutrients;
pub mod protein;
pub mod reconcile;
pub mod rotation;
pub mod scaling;

pub use config::AdjustConfig;
pub use constants::*;
pub use filler::fill_calories;
pub use generator::{adjust_plan, PlanGenerator};
pub use nutrients::{meal_totals, plan_totals, running_totals, RunningTotals};
pub use protein::{balance_protein, ProteinDirection};
pub use reconcile::reconcile;
pub use rotation::{PlanRotator, TemplateLibrary};
pub use scaling::{scale_portions, scale_toward, ScaleDirection};
