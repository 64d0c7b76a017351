use rand::Rng;

use crate::error::{PlanError, Result};
use crate::models::{Assignment, PlanRequest, Recipe};
use crate::planner::allocate::allocate_day;
use crate::planner::filter::eligible;
use crate::state::UsageCounter;

/// Allocate a full multi-day plan.
///
/// Checks the dietary filter once up front and fails with
/// [`PlanError::NoEligibleRecipes`] before allocating anything if it
/// comes back empty. Days are then processed strictly in sequence,
/// threading one usage counter so each day sees every prior selection.
/// Any day failure aborts the run; no partial plan is returned.
///
/// On success the result holds exactly `days * 3` assignments, ordered
/// by day then breakfast/lunch/dinner, each carrying the requested
/// people count as its servings.
pub fn allocate_plan(
    recipes: &[Recipe],
    request: &PlanRequest,
    rng: &mut impl Rng,
) -> Result<Vec<Assignment>> {
    request.validate()?;

    // Tag filtering alone decides up-front viability; usage starts empty.
    let fresh = UsageCounter::new();
    if eligible(recipes, &request.dietary_preferences, &fresh).is_empty() {
        return Err(PlanError::NoEligibleRecipes);
    }

    let mut usage = UsageCounter::new();
    let mut assignments = Vec::with_capacity(request.days as usize * 3);

    for day in 0..request.days {
        let meals = allocate_day(
            recipes,
            &request.dietary_preferences,
            f64::from(request.target_calories),
            day,
            &mut usage,
            rng,
        )?;

        for (meal_type, recipe) in meals.iter() {
            assignments.push(Assignment {
                day,
                meal_type,
                recipe_id: recipe.id,
                servings: request.people_count,
            });
        }
    }

    Ok(assignments)
}
