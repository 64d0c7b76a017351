use crate::models::MealType;

/// Share of the daily calorie target assigned to breakfast.
pub const BREAKFAST_SHARE: f64 = 0.25;

/// Share of the daily calorie target assigned to lunch.
pub const LUNCH_SHARE: f64 = 0.35;

/// Share of the daily calorie target assigned to dinner.
///
/// Only the initial figure: dinner's effective target is recomputed from
/// whatever breakfast and lunch left over.
pub const DINNER_SHARE: f64 = 0.40;

/// Allowed calorie deviation around the breakfast and lunch sub-targets.
pub const MEAL_DEVIATION: f64 = 0.20;

/// Allowed calorie deviation for dinner (looser, it absorbs the remainder).
pub const DINNER_DEVIATION: f64 = 0.25;

/// A recipe used this many times is excluded for the rest of the run.
pub const MAX_RECIPE_USES: u32 = 2;

/// Static share of the daily target for a meal type.
pub fn meal_share(meal: MealType) -> f64 {
    match meal {
        MealType::Breakfast => BREAKFAST_SHARE,
        MealType::Lunch => LUNCH_SHARE,
        MealType::Dinner => DINNER_SHARE,
    }
}

/// Deviation tolerance for a meal type.
pub fn meal_deviation(meal: MealType) -> f64 {
    match meal {
        MealType::Breakfast | MealType::Lunch => MEAL_DEVIATION,
        MealType::Dinner => DINNER_DEVIATION,
    }
}
