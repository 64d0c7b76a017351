use thiserror::Error;

use crate::models::MealType;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("no recipes match the requested dietary preferences")]
    NoEligibleRecipes,

    #[error("no candidate recipe for {meal} on day {day}")]
    DayExhausted { day: u32, meal: MealType },
}

pub type Result<T> = std::result::Result<T, PlanError>;
