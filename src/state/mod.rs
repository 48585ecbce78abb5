mod catalog;
mod persistence;

pub use catalog::{closest_match, FoodCatalog};
pub use persistence::{export_csv, load_foods, load_plans, save_generated, save_plans};
