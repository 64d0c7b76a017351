use std::collections::HashSet;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::PlanRequest;

/// Prompt for the number of days to plan.
pub fn prompt_days() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many days should the plan cover?")
        .default("7".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number of days".to_string()))
}

/// Prompt for the daily calorie target.
pub fn prompt_target_calories() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Daily calorie target per person?")
        .default("2000".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid calorie target".to_string()))
}

/// Prompt for how many people the plan serves.
pub fn prompt_people_count() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many people does the plan serve?")
        .default("1".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid people count".to_string()))
}

/// Prompt for dietary preference tags with fuzzy matching.
///
/// Typed tags are matched against the tags actually present in the
/// catalog so typos surface before the allocator rejects the whole run.
pub fn prompt_preferences(known_tags: &[String]) -> Result<HashSet<String>> {
    let mut preferences = HashSet::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a dietary tag (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Try exact match first (case-insensitive)
        let exact_match = known_tags
            .iter()
            .find(|t| t.eq_ignore_ascii_case(input));

        if let Some(tag) = exact_match {
            preferences.insert(tag.to_lowercase());
            println!("Added: {}", tag);
            continue;
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&String, f64)> = known_tags
            .iter()
            .map(|t| (t, jaro_winkler(&t.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No recipe in the catalog carries a tag like '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let tag = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", tag))
                .default(true)
                .interact()?;

            if confirm {
                preferences.insert(tag.to_lowercase());
                println!("Added: {}", tag);
            }
        } else {
            // Multiple matches - let user select
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(t, _)| t.to_string())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                preferences.insert(options[selection].to_lowercase());
                println!("Added: {}", options[selection]);
            }
        }
    }

    Ok(preferences)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full plan request, prompting only for what the CLI flags
/// left unset.
pub fn collect_plan_request(
    days: Option<u32>,
    calories: Option<u32>,
    people: Option<u32>,
    prefs: Option<HashSet<String>>,
    known_tags: &[String],
) -> Result<PlanRequest> {
    let days = match days {
        Some(d) => d,
        None => prompt_days()?,
    };
    let target_calories = match calories {
        Some(c) => c,
        None => prompt_target_calories()?,
    };
    let people_count = match people {
        Some(p) => p,
        None => prompt_people_count()?,
    };
    let dietary_preferences = match prefs {
        Some(p) => p,
        None => prompt_preferences(known_tags)?,
    };

    Ok(PlanRequest {
        days,
        target_calories,
        people_count,
        dietary_preferences,
    })
}
