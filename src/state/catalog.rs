use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::Recipe;

/// Load a recipe catalog from a JSON file.
///
/// Deduplicates by id (last occurrence wins) and returns recipes sorted
/// by id so downstream tie-breaks are stable across loads.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;

    let mut seen: BTreeMap<u32, Recipe> = BTreeMap::new();
    for recipe in recipes {
        seen.insert(recipe.id, recipe);
    }

    Ok(seen.into_values().collect())
}

/// Save a recipe catalog to a JSON file.
///
/// Deduplicates by id before saving.
pub fn save_recipes<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    let mut seen: BTreeMap<u32, &Recipe> = BTreeMap::new();
    for recipe in recipes {
        seen.insert(recipe.id, recipe);
    }

    let deduped: Vec<&Recipe> = seen.into_values().collect();
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// One row of a CSV recipe export.
///
/// `dietary_tags` is a single semicolon-separated column.
#[derive(Debug, Deserialize)]
struct CsvRecipeRow {
    id: u32,
    name: String,
    calories: u32,
    breakfast_weight: f64,
    lunch_weight: f64,
    dinner_weight: f64,
    #[serde(default)]
    dietary_tags: String,
}

impl CsvRecipeRow {
    fn into_recipe(self) -> Recipe {
        let tags = self
            .dietary_tags
            .split(';')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Recipe {
            id: self.id,
            name: self.name,
            calories: self.calories,
            breakfast_weight: self.breakfast_weight,
            lunch_weight: self.lunch_weight,
            dinner_weight: self.dinner_weight,
            dietary_tags: tags,
        }
    }
}

/// Import recipes from a CSV file with a header row.
///
/// Expected columns: id, name, calories, breakfast_weight, lunch_weight,
/// dinner_weight, dietary_tags (semicolon-separated).
pub fn import_recipes_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut recipes = Vec::new();

    for row in reader.deserialize() {
        let row: CsvRecipeRow = row?;
        recipes.push(row.into_recipe());
    }

    Ok(recipes)
}
