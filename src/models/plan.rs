use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// The three meal slots of one day, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// All meal types in the order they are allocated.
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slot of a finished plan: which recipe is served when, for how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Zero-based day index within the horizon.
    pub day: u32,

    pub meal_type: MealType,

    pub recipe_id: u32,

    /// Echoed from the requested people count.
    pub servings: u32,
}

/// Parameters for one planning run.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Number of days in the horizon.
    pub days: u32,

    /// Calorie target per day.
    pub target_calories: u32,

    /// People served; copied into every assignment's `servings`.
    pub people_count: u32,

    /// Required dietary tags; empty means no restriction.
    pub dietary_preferences: HashSet<String>,
}

impl PlanRequest {
    pub fn validate(&self) -> Result<()> {
        if self.days == 0 {
            return Err(PlanError::InvalidInput(
                "plan must cover at least one day".to_string(),
            ));
        }
        if self.target_calories == 0 {
            return Err(PlanError::InvalidInput(
                "target calories must be positive".to_string(),
            ));
        }
        if self.people_count == 0 {
            return Err(PlanError::InvalidInput(
                "people count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
