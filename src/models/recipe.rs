use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::MealType;

/// A recipe with nutritional data and meal-suitability weights.
///
/// Weights are in [0,1]; a weight of 0 means the recipe is never served
/// for that meal type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,

    pub name: String,

    pub calories: u32,

    #[serde(default)]
    pub breakfast_weight: f64,

    #[serde(default)]
    pub lunch_weight: f64,

    #[serde(default)]
    pub dinner_weight: f64,

    #[serde(default)]
    pub dietary_tags: Vec<String>,
}

impl Recipe {
    /// Suitability weight for a meal type.
    #[inline]
    pub fn weight_for(&self, meal: MealType) -> f64 {
        match meal {
            MealType::Breakfast => self.breakfast_weight,
            MealType::Lunch => self.lunch_weight,
            MealType::Dinner => self.dinner_weight,
        }
    }

    /// Check for a dietary tag (case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.dietary_tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// A recipe is suitable if it carries every required tag.
    ///
    /// Vacuously true when `preferences` is empty.
    pub fn matches_preferences(&self, preferences: &HashSet<String>) -> bool {
        preferences.iter().all(|p| self.has_tag(p))
    }

    /// Basic validation: weights within [0,1].
    pub fn is_valid(&self) -> bool {
        [self.breakfast_weight, self.lunch_weight, self.dinner_weight]
            .iter()
            .all(|w| (0.0..=1.0).contains(w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: 1,
            name: "Oatmeal".to_string(),
            calories: 350,
            breakfast_weight: 0.9,
            lunch_weight: 0.1,
            dinner_weight: 0.0,
            dietary_tags: vec!["vegetarian".to_string(), "vegan".to_string()],
        }
    }

    #[test]
    fn test_weight_for() {
        let recipe = sample_recipe();
        assert_eq!(recipe.weight_for(MealType::Breakfast), 0.9);
        assert_eq!(recipe.weight_for(MealType::Lunch), 0.1);
        assert_eq!(recipe.weight_for(MealType::Dinner), 0.0);
    }

    #[test]
    fn test_has_tag_case_insensitive() {
        let recipe = sample_recipe();
        assert!(recipe.has_tag("vegan"));
        assert!(recipe.has_tag("VEGAN"));
        assert!(!recipe.has_tag("gluten-free"));
    }

    #[test]
    fn test_matches_preferences() {
        let recipe = sample_recipe();

        let empty = HashSet::new();
        assert!(recipe.matches_preferences(&empty));

        let prefs: HashSet<String> = ["vegetarian".to_string()].into();
        assert!(recipe.matches_preferences(&prefs));

        let prefs: HashSet<String> =
            ["vegetarian".to_string(), "gluten-free".to_string()].into();
        assert!(!recipe.matches_preferences(&prefs));
    }

    #[test]
    fn test_is_valid() {
        let recipe = sample_recipe();
        assert!(recipe.is_valid());

        let mut invalid = sample_recipe();
        invalid.lunch_weight = 1.5;
        assert!(!invalid.is_valid());
    }
}
