use std::collections::HashSet;

use crate::models::Recipe;
use crate::state::UsageCounter;

/// Narrow the catalog to recipes compatible with the dietary preferences
/// and not yet used out.
///
/// Output order follows catalog order; the caller decides how to rank.
/// An empty result is valid and must be handled by the caller.
pub fn eligible<'a>(
    recipes: &'a [Recipe],
    preferences: &HashSet<String>,
    usage: &UsageCounter,
) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|r| r.matches_preferences(preferences) && usage.under_cap(r.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipes() -> Vec<Recipe> {
        vec![
            Recipe {
                id: 1,
                name: "Oatmeal".to_string(),
                calories: 350,
                breakfast_weight: 0.9,
                lunch_weight: 0.0,
                dinner_weight: 0.0,
                dietary_tags: vec!["vegetarian".to_string(), "vegan".to_string()],
            },
            Recipe {
                id: 2,
                name: "Roast Chicken".to_string(),
                calories: 700,
                breakfast_weight: 0.0,
                lunch_weight: 0.4,
                dinner_weight: 0.9,
                dietary_tags: vec![],
            },
            Recipe {
                id: 3,
                name: "Lentil Soup".to_string(),
                calories: 500,
                breakfast_weight: 0.0,
                lunch_weight: 0.8,
                dinner_weight: 0.6,
                dietary_tags: vec!["vegetarian".to_string(), "vegan".to_string()],
            },
        ]
    }

    #[test]
    fn test_empty_preferences_pass_everything() {
        let recipes = sample_recipes();
        let usage = UsageCounter::new();
        let result = eligible(&recipes, &HashSet::new(), &usage);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_preferences_require_all_tags() {
        let recipes = sample_recipes();
        let usage = UsageCounter::new();
        let prefs: HashSet<String> = ["vegan".to_string()].into();

        let result = eligible(&recipes, &prefs, &usage);
        let ids: Vec<u32> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_used_out_recipes_are_excluded() {
        let recipes = sample_recipes();
        let mut usage = UsageCounter::new();
        usage.record(2);
        usage.record(2);

        let result = eligible(&recipes, &HashSet::new(), &usage);
        let ids: Vec<u32> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let recipes = sample_recipes();
        let usage = UsageCounter::new();
        let prefs: HashSet<String> = ["keto".to_string()].into();

        assert!(eligible(&recipes, &prefs, &usage).is_empty());
    }
}
