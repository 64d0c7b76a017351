use std::collections::HashMap;

use crate::models::{Assignment, PlanRequest, Recipe};

/// Display an allocated plan day by day.
pub fn display_plan(
    assignments: &[Assignment],
    recipes: &[Recipe],
    request: &PlanRequest,
    start_date: Option<&str>,
) {
    if assignments.is_empty() {
        println!("No assignments to display.");
        return;
    }

    let by_id: HashMap<u32, &Recipe> = recipes.iter().map(|r| (r.id, r)).collect();

    println!();
    match start_date {
        Some(date) => println!("=== Meal Plan ({} days from {}) ===", request.days, date),
        None => println!("=== Meal Plan ({} days) ===", request.days),
    }
    println!();

    let max_name_len = assignments
        .iter()
        .filter_map(|a| by_id.get(&a.recipe_id))
        .map(|r| r.name.len())
        .max()
        .unwrap_or(10);

    let mut current_day = u32::MAX;
    let mut day_total: u32 = 0;

    for assignment in assignments {
        if assignment.day != current_day {
            if current_day != u32::MAX {
                print_day_total(day_total, request.target_calories);
            }
            current_day = assignment.day;
            day_total = 0;
            println!("Day {}:", current_day + 1);
        }

        match by_id.get(&assignment.recipe_id) {
            Some(recipe) => {
                day_total += recipe.calories;
                println!(
                    "  {:<9} {:<width$} - {:>4} cal x {} servings",
                    assignment.meal_type.as_str(),
                    recipe.name,
                    recipe.calories,
                    assignment.servings,
                    width = max_name_len
                );
            }
            None => {
                println!(
                    "  {:<9} (unknown recipe #{})",
                    assignment.meal_type.as_str(),
                    assignment.recipe_id
                );
            }
        }
    }
    print_day_total(day_total, request.target_calories);

    let distinct: std::collections::HashSet<u32> =
        assignments.iter().map(|a| a.recipe_id).collect();

    println!();
    println!("--- Summary ---");
    println!("Total meals: {}", assignments.len());
    println!("Distinct recipes: {}", distinct.len());
    println!();
}

fn print_day_total(day_total: u32, target: u32) {
    let delta = i64::from(day_total) - i64::from(target);
    let sign = if delta >= 0 { "+" } else { "" };
    println!("  total: {} cal (target {}, {}{})", day_total, target, sign, delta);
    println!();
}

/// Display the dietary tags present in a catalog with recipe counts.
pub fn display_tag_counts(recipes: &[Recipe]) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for recipe in recipes {
        for tag in &recipe.dietary_tags {
            *counts.entry(tag.to_lowercase()).or_insert(0) += 1;
        }
    }

    if counts.is_empty() {
        println!("No dietary tags in the catalog.");
        return;
    }

    let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    println!();
    println!("=== Dietary tags ({} recipes) ===", recipes.len());
    println!();
    for (tag, count) in sorted {
        println!("  {:<20} {} recipes", tag, count);
    }
    println!();
}
