mod catalog;
mod usage;

pub use catalog::{import_recipes_csv, load_recipes, save_recipes};
pub use usage::UsageCounter;
