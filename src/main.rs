use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use menu_allocator_rs::cli::{Cli, Command};
use menu_allocator_rs::error::Result;
use menu_allocator_rs::interface::{collect_plan_request, display_plan, display_tag_counts, prompt_yes_no};
use menu_allocator_rs::models::Recipe;
use menu_allocator_rs::planner::allocate_plan;
use menu_allocator_rs::state::{import_recipes_csv, load_recipes, save_recipes};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            days,
            calories,
            people,
            prefs,
            seed,
            start_date,
        } => cmd_plan(&cli.file, days, calories, people, prefs, seed, start_date),
        Command::Import { csv } => cmd_import(&cli.file, &csv),
        Command::Tags => cmd_tags(&cli.file),
    }
}

/// Load the catalog, dropping recipes with out-of-range weights.
fn load_catalog(file_path: &str) -> Result<Option<Vec<Recipe>>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Recipe catalog not found: {}", file_path);
        eprintln!("Use 'import --csv <file>' to create one.");
        return Ok(None);
    }

    let recipes = load_recipes(path)?;
    let total = recipes.len();
    let valid: Vec<Recipe> = recipes.into_iter().filter(|r| r.is_valid()).collect();

    if valid.len() < total {
        println!(
            "Skipped {} recipes with weights outside [0,1]",
            total - valid.len()
        );
    }

    Ok(Some(valid))
}

/// Distinct lowercase tags across the catalog, sorted for stable prompts.
fn known_tags(recipes: &[Recipe]) -> Vec<String> {
    let tags: BTreeSet<String> = recipes
        .iter()
        .flat_map(|r| r.dietary_tags.iter())
        .map(|t| t.to_lowercase())
        .collect();
    tags.into_iter().collect()
}

/// Allocate and display a meal plan.
#[allow(clippy::too_many_arguments)]
fn cmd_plan(
    file_path: &str,
    days: Option<u32>,
    calories: Option<u32>,
    people: Option<u32>,
    prefs: Option<Vec<String>>,
    seed: Option<u64>,
    start_date: Option<String>,
) -> Result<()> {
    let Some(recipes) = load_catalog(file_path)? else {
        return Ok(());
    };

    if recipes.is_empty() {
        println!("The catalog has no usable recipes.");
        return Ok(());
    }

    println!("Loaded {} recipes", recipes.len());
    println!();

    let prefs: Option<HashSet<String>> =
        prefs.map(|p| p.into_iter().map(|t| t.to_lowercase()).collect());
    let request = collect_plan_request(days, calories, people, prefs, &known_tags(&recipes))?;

    println!();
    println!(
        "Planning {} days at {} cal/day for {} people...",
        request.days, request.target_calories, request.people_count
    );
    if !request.dietary_preferences.is_empty() {
        let mut tags: Vec<&String> = request.dietary_preferences.iter().collect();
        tags.sort();
        println!(
            "Dietary preferences: {}",
            tags.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
        );
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let assignments = allocate_plan(&recipes, &request, &mut rng)?;

    display_plan(&assignments, &recipes, &request, start_date.as_deref());

    let save = prompt_yes_no("Save plan to meal_plan.json?", false)?;
    if save {
        let json = serde_json::to_string_pretty(&assignments)?;
        std::fs::write("meal_plan.json", json)?;
        println!("Plan saved.");
    }

    Ok(())
}

/// Convert a CSV recipe export into the JSON catalog.
fn cmd_import(file_path: &str, csv_path: &str) -> Result<()> {
    let recipes = import_recipes_csv(csv_path)?;

    if recipes.is_empty() {
        println!("No recipes found in {}", csv_path);
        return Ok(());
    }

    let invalid = recipes.iter().filter(|r| !r.is_valid()).count();
    if invalid > 0 {
        println!("Warning: {} recipes have weights outside [0,1]", invalid);
    }

    save_recipes(file_path, &recipes)?;
    println!("Imported {} recipes into {}", recipes.len(), file_path);

    Ok(())
}

/// List dietary tags present in the catalog.
fn cmd_tags(file_path: &str) -> Result<()> {
    let Some(recipes) = load_catalog(file_path)? else {
        return Ok(());
    };

    display_tag_counts(&recipes);
    Ok(())
}
