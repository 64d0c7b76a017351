mod plan;
mod recipe;

pub use plan::{Assignment, MealType, PlanRequest};
pub use recipe::Recipe;
