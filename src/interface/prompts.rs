use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::catalog::{ConditionCatalog, FoodCatalog};
use crate::error::Result;
use crate::models::{FoodEntry, MealSlot};

/// Prompt for a food name, falling back to fuzzy suggestions.
///
/// Returns `None` when the user finishes with an empty line.
pub fn prompt_food(catalog: &FoodCatalog) -> Result<Option<&FoodEntry>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Food to add (or press Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Try id, then exact name (case-insensitive)
        if let Some(food) = catalog.resolve(input) {
            return Ok(Some(food));
        }

        // Fall back to fuzzy matching
        let candidates = catalog.suggest(input);

        if candidates.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        // Single candidate: just confirm it
        if candidates.len() == 1 {
            let food = candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(food));
            }
            continue;
        }

        // Several candidates: let the user pick, or none of them
        let mut options: Vec<String> = candidates.iter().map(|f| f.name.clone()).collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if let Some(food) = candidates.get(selection) {
            return Ok(Some(*food));
        }
    }
}

/// Prompt for the meal slot to log into.
pub fn prompt_meal_slot() -> Result<MealSlot> {
    let options: Vec<&str> = MealSlot::ALL.iter().map(|s| s.title()).collect();

    let selection = Select::new()
        .with_prompt("Add to which meal?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(MealSlot::ALL[selection.min(MealSlot::ALL.len() - 1)])
}

/// Prompt for any number of health conditions. Returns their ids.
pub fn prompt_conditions(catalog: &ConditionCatalog) -> Result<Vec<String>> {
    let options: Vec<&str> = catalog.all().iter().map(|c| c.name.as_str()).collect();

    let selected = MultiSelect::new()
        .with_prompt("Select your health conditions (space to toggle, enter to confirm)")
        .items(&options)
        .interact()?;

    // Map selected rows back to condition ids
    Ok(selected
        .into_iter()
        .filter_map(|i| catalog.all().get(i))
        .map(|c| c.id.clone())
        .collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
