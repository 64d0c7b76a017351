use std::collections::HashSet;

use rand::Rng;

use crate::error::{PlanError, Result};
use crate::models::{MealType, Recipe};
use crate::planner::constants::{meal_deviation, meal_share};
use crate::planner::filter::eligible;
use crate::state::UsageCounter;

/// The three recipes chosen for one day.
#[derive(Debug)]
pub struct DayMeals<'a> {
    pub breakfast: &'a Recipe,
    pub lunch: &'a Recipe,
    pub dinner: &'a Recipe,
}

impl<'a> DayMeals<'a> {
    /// Meals in serving order, paired with their slot.
    pub fn iter(&self) -> [(MealType, &'a Recipe); 3] {
        [
            (MealType::Breakfast, self.breakfast),
            (MealType::Lunch, self.lunch),
            (MealType::Dinner, self.dinner),
        ]
    }

    /// Total calories across the three meals.
    pub fn total_calories(&self) -> u32 {
        self.breakfast.calories + self.lunch.calories + self.dinner.calories
    }
}

/// Weighted random draw over a candidate pool.
///
/// Cumulative-weight plus uniform draw; weights are the candidates'
/// affinity for `meal`. Returns `None` when the pool is empty or all
/// weights sum to zero, in which case the caller falls back to
/// distance minimization.
fn weighted_draw<'a>(
    pool: &[&'a Recipe],
    meal: MealType,
    rng: &mut impl Rng,
) -> Option<&'a Recipe> {
    let total: f64 = pool.iter().map(|r| r.weight_for(meal)).sum();
    if pool.is_empty() || total <= 0.0 {
        return None;
    }

    let mut roll = rng.gen_range(0.0..total);
    for recipe in pool {
        let weight = recipe.weight_for(meal);
        if roll < weight {
            return Some(recipe);
        }
        roll -= weight;
    }

    // Float rounding can leave a sliver of roll after the last candidate.
    pool.last().copied()
}

/// Select one recipe for a meal slot.
///
/// Two-stage policy:
/// 1. Weighted random draw among candidates whose calories fall inside
///    `[target*(1-deviation), target*(1+deviation)]`.
/// 2. Otherwise, the candidate closest to `target` by absolute calorie
///    distance; on ties the first-encountered candidate wins.
///
/// A negative `target` (possible for dinner, see [`allocate_day`])
/// degenerates the window to an empty band and stage 2 resolves it.
fn select_recipe<'a>(
    candidates: &[&'a Recipe],
    meal: MealType,
    target: f64,
    deviation: f64,
    rng: &mut impl Rng,
) -> Option<&'a Recipe> {
    if candidates.is_empty() {
        return None;
    }

    let min_calories = target * (1.0 - deviation);
    let max_calories = target * (1.0 + deviation);

    let in_band: Vec<&Recipe> = candidates
        .iter()
        .copied()
        .filter(|r| {
            let calories = f64::from(r.calories);
            calories >= min_calories && calories <= max_calories
        })
        .collect();

    if let Some(recipe) = weighted_draw(&in_band, meal, rng) {
        return Some(recipe);
    }

    // No candidate in range: take the closest to target, first wins ties.
    let mut best = candidates[0];
    let mut best_distance = (f64::from(best.calories) - target).abs();
    for &recipe in &candidates[1..] {
        let distance = (f64::from(recipe.calories) - target).abs();
        if distance < best_distance {
            best = recipe;
            best_distance = distance;
        }
    }

    Some(best)
}

/// Candidates for one meal slot: dietary filter, usage cap, same-day
/// exclusion, and zero-affinity cutoff.
fn slot_candidates<'a>(
    recipes: &'a [Recipe],
    preferences: &HashSet<String>,
    usage: &UsageCounter,
    chosen_today: &HashSet<u32>,
    meal: MealType,
) -> Vec<&'a Recipe> {
    eligible(recipes, preferences, usage)
        .into_iter()
        .filter(|r| !chosen_today.contains(&r.id) && r.weight_for(meal) > 0.0)
        .collect()
}

/// Fill one slot: build its candidate pool, select, and record the pick
/// in both the usage counter and the day's exclusion set.
#[allow(clippy::too_many_arguments)]
fn pick_slot<'a, R: Rng>(
    recipes: &'a [Recipe],
    preferences: &HashSet<String>,
    usage: &mut UsageCounter,
    chosen_today: &mut HashSet<u32>,
    meal: MealType,
    target: f64,
    day: u32,
    rng: &mut R,
) -> Result<&'a Recipe> {
    let candidates = slot_candidates(recipes, preferences, usage, chosen_today, meal);
    let recipe = select_recipe(&candidates, meal, target, meal_deviation(meal), rng)
        .ok_or(PlanError::DayExhausted { day, meal })?;

    usage.record(recipe.id);
    chosen_today.insert(recipe.id);
    Ok(recipe)
}

/// Allocate breakfast, lunch, and dinner for one day.
///
/// Meals are chosen in fixed order. Each selection is recorded in
/// `usage` immediately so it is visible to the remaining meals of the
/// same day as well as to subsequent days. Dinner's target is not the
/// static 40% share but the day's remainder after breakfast and lunch,
/// so the last meal absorbs any surplus or deficit.
///
/// Fails with [`PlanError::DayExhausted`] as soon as any slot has no
/// candidate; no constraint is relaxed to recover and no partial day is
/// returned.
pub fn allocate_day<'a>(
    recipes: &'a [Recipe],
    preferences: &HashSet<String>,
    day_target: f64,
    day: u32,
    usage: &mut UsageCounter,
    rng: &mut impl Rng,
) -> Result<DayMeals<'a>> {
    let mut chosen_today: HashSet<u32> = HashSet::new();

    let breakfast = pick_slot(
        recipes,
        preferences,
        usage,
        &mut chosen_today,
        MealType::Breakfast,
        day_target * meal_share(MealType::Breakfast),
        day,
        rng,
    )?;
    let lunch = pick_slot(
        recipes,
        preferences,
        usage,
        &mut chosen_today,
        MealType::Lunch,
        day_target * meal_share(MealType::Lunch),
        day,
        rng,
    )?;

    // Dinner absorbs whatever the first two meals left of the day's
    // budget; this can go negative if they overshot.
    let dinner_target =
        day_target - f64::from(breakfast.calories) - f64::from(lunch.calories);
    let dinner = pick_slot(
        recipes,
        preferences,
        usage,
        &mut chosen_today,
        MealType::Dinner,
        dinner_target,
        day,
        rng,
    )?;

    Ok(DayMeals {
        breakfast,
        lunch,
        dinner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn recipe(id: u32, name: &str, calories: u32, weights: (f64, f64, f64)) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            calories,
            breakfast_weight: weights.0,
            lunch_weight: weights.1,
            dinner_weight: weights.2,
            dietary_tags: vec![],
        }
    }

    #[test]
    fn test_weighted_draw_skips_all_zero_pool() {
        let a = recipe(1, "A", 400, (0.0, 1.0, 0.0));
        let pool = vec![&a];
        let mut rng = StdRng::seed_from_u64(1);

        assert!(weighted_draw(&pool, MealType::Breakfast, &mut rng).is_none());
    }

    #[test]
    fn test_weighted_draw_respects_weights() {
        let a = recipe(1, "A", 400, (0.0, 0.0, 0.0));
        let b = recipe(2, "B", 400, (1.0, 0.0, 0.0));
        let pool = vec![&a, &b];
        let mut rng = StdRng::seed_from_u64(1);

        // A has zero weight, so B must win every draw.
        for _ in 0..50 {
            let chosen = weighted_draw(&pool, MealType::Breakfast, &mut rng).unwrap();
            assert_eq!(chosen.id, 2);
        }
    }

    #[test]
    fn test_select_recipe_prefers_in_band() {
        let near = recipe(1, "Near", 500, (1.0, 0.0, 0.0));
        let far = recipe(2, "Far", 900, (1.0, 0.0, 0.0));
        let candidates = vec![&far, &near];
        let mut rng = StdRng::seed_from_u64(1);

        let chosen = select_recipe(&candidates, MealType::Breakfast, 500.0, 0.2, &mut rng);
        assert_eq!(chosen.unwrap().id, 1);
    }

    #[test]
    fn test_select_recipe_falls_back_to_closest() {
        let closer = recipe(1, "Closer", 700, (1.0, 0.0, 0.0));
        let farther = recipe(2, "Farther", 900, (1.0, 0.0, 0.0));
        let candidates = vec![&farther, &closer];
        let mut rng = StdRng::seed_from_u64(1);

        // Target 400 with 20% deviation = band [320, 480]; nobody is in it.
        let chosen = select_recipe(&candidates, MealType::Breakfast, 400.0, 0.2, &mut rng);
        assert_eq!(chosen.unwrap().id, 1);
    }

    #[test]
    fn test_select_recipe_tie_breaks_by_order() {
        let first = recipe(1, "First", 300, (1.0, 0.0, 0.0));
        let second = recipe(2, "Second", 500, (1.0, 0.0, 0.0));
        let candidates = vec![&first, &second];
        let mut rng = StdRng::seed_from_u64(1);

        // Both are 100 away from 400 and out of band; first wins.
        let chosen = select_recipe(&candidates, MealType::Breakfast, 400.0, 0.1, &mut rng);
        assert_eq!(chosen.unwrap().id, 1);
    }

    #[test]
    fn test_select_recipe_handles_negative_target() {
        let small = recipe(1, "Small", 100, (0.0, 0.0, 1.0));
        let big = recipe(2, "Big", 800, (0.0, 0.0, 1.0));
        let candidates = vec![&big, &small];
        let mut rng = StdRng::seed_from_u64(1);

        // Negative target: the window is empty, closest-to-target still
        // picks the smallest meal.
        let chosen = select_recipe(&candidates, MealType::Dinner, -50.0, 0.25, &mut rng);
        assert_eq!(chosen.unwrap().id, 1);
    }

    #[test]
    fn test_allocate_day_distinct_recipes() {
        let recipes = vec![
            recipe(1, "Omelette", 400, (1.0, 0.5, 0.5)),
            recipe(2, "Sandwich", 600, (0.5, 1.0, 0.5)),
            recipe(3, "Stew", 700, (0.0, 0.5, 1.0)),
        ];
        let mut usage = UsageCounter::new();
        let mut rng = StdRng::seed_from_u64(1);

        let meals =
            allocate_day(&recipes, &HashSet::new(), 1700.0, 0, &mut usage, &mut rng).unwrap();

        let ids = [meals.breakfast.id, meals.lunch.id, meals.dinner.id];
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_allocate_day_records_usage_immediately() {
        let recipes = vec![
            recipe(1, "Omelette", 400, (1.0, 0.0, 0.0)),
            recipe(2, "Sandwich", 600, (0.0, 1.0, 0.0)),
            recipe(3, "Stew", 700, (0.0, 0.0, 1.0)),
        ];
        let mut usage = UsageCounter::new();
        let mut rng = StdRng::seed_from_u64(1);

        allocate_day(&recipes, &HashSet::new(), 1700.0, 0, &mut usage, &mut rng).unwrap();

        assert_eq!(usage.count(1), 1);
        assert_eq!(usage.count(2), 1);
        assert_eq!(usage.count(3), 1);
    }

    #[test]
    fn test_allocate_day_fails_when_slot_empty() {
        // Nothing has breakfast affinity.
        let recipes = vec![
            recipe(1, "Sandwich", 600, (0.0, 1.0, 0.0)),
            recipe(2, "Stew", 700, (0.0, 0.0, 1.0)),
        ];
        let mut usage = UsageCounter::new();
        let mut rng = StdRng::seed_from_u64(1);

        let result = allocate_day(&recipes, &HashSet::new(), 1700.0, 4, &mut usage, &mut rng);
        match result {
            Err(PlanError::DayExhausted { day, meal }) => {
                assert_eq!(day, 4);
                assert_eq!(meal, MealType::Breakfast);
            }
            other => panic!("expected DayExhausted, got {:?}", other),
        }
    }

    #[test]
    fn test_allocate_day_fails_when_recipe_used_out() {
        let recipes = vec![
            recipe(1, "Omelette", 400, (1.0, 0.0, 0.0)),
            recipe(2, "Sandwich", 600, (0.0, 1.0, 0.0)),
            recipe(3, "Stew", 700, (0.0, 0.0, 1.0)),
        ];
        let mut usage = UsageCounter::new();
        usage.record(1);
        usage.record(1);
        let mut rng = StdRng::seed_from_u64(1);

        let result = allocate_day(&recipes, &HashSet::new(), 1700.0, 2, &mut usage, &mut rng);
        assert!(matches!(
            result,
            Err(PlanError::DayExhausted {
                meal: MealType::Breakfast,
                ..
            })
        ));
    }

    #[test]
    fn test_dinner_target_uses_day_remainder() {
        // Static dinner share of 2000 would be 800, band [600, 1000].
        // Breakfast 600 and lunch 840 leave 560, band [420, 700].
        // InRemainder (450) is only in the recomputed band, InStatic
        // (1000) only in the static one.
        let recipes = vec![
            recipe(1, "Toast", 600, (1.0, 0.0, 0.0)),
            recipe(2, "Big Salad", 840, (0.0, 1.0, 0.0)),
            recipe(3, "InRemainder", 450, (0.0, 0.0, 1.0)),
            recipe(4, "InStatic", 1000, (0.0, 0.0, 1.0)),
        ];
        let mut usage = UsageCounter::new();
        let mut rng = StdRng::seed_from_u64(1);

        let meals =
            allocate_day(&recipes, &HashSet::new(), 2000.0, 0, &mut usage, &mut rng).unwrap();
        assert_eq!(meals.dinner.id, 3);
    }
}
