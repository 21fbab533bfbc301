use clap::Parser;
use std::path::Path;
use tracing::{info, warn};

use nutrition_advisor_rs::advisor::{
    ConditionMatcher, DailyProgress, RecommendationEngine, sample_day,
};
use nutrition_advisor_rs::catalog::{ConditionCatalog, FoodCatalog, ReferenceTable};
use nutrition_advisor_rs::cli::{Cli, Command};
use nutrition_advisor_rs::error::{AdvisorError, Result};
use nutrition_advisor_rs::interface::{
    display_condition_advice, display_conditions, display_food_list, display_meals,
    display_recommendations, display_summary, prompt_conditions, prompt_food, prompt_meal_slot,
    prompt_yes_no,
};
use nutrition_advisor_rs::logging;
use nutrition_advisor_rs::models::{DailyTotals, FoodCategory, MealSlot};
use nutrition_advisor_rs::state::{DayTracker, export_csv, load_day, save_day};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();
    let path = Path::new(&cli.file);

    match command {
        Command::Summary { json } => cmd_summary(path, json),
        Command::Add { food, meal } => cmd_add(path, food.as_deref(), meal.as_deref()),
        Command::Foods { search, category } => cmd_foods(&search, category.as_deref()),
        Command::Conditions => {
            display_conditions(ConditionCatalog::builtin().all());
            Ok(())
        }
        Command::Advise { ids, json } => cmd_advise(path, ids, json),
        Command::NewDay { date } => cmd_new_day(path, date),
        Command::Export { path: out } => cmd_export(path, Path::new(&out)),
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Load the day log, or the sample day when no log exists yet.
fn load_or_sample(path: &Path) -> Result<DailyTotals> {
    if path.exists() {
        load_day(path)
    } else {
        info!(path = %path.display(), "no day log found, using the sample day");
        sample_day(FoodCatalog::builtin(), today())
    }
}

/// Show totals, progress bars and recommendations.
fn cmd_summary(path: &Path, json: bool) -> Result<()> {
    // Load the day and evaluate it
    let day = load_or_sample(path)?;
    let reference = ReferenceTable::builtin();
    let recommendations = RecommendationEngine::new(reference).evaluate(day.totals());
    let progress = DailyProgress::from_totals(day.totals(), reference);

    if json {
        let out = serde_json::json!({
            "day": day,
            "progress": progress,
            "recommendations": recommendations,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    // Display
    display_meals(&day);
    display_summary(&day, &progress);
    display_recommendations(&recommendations);
    Ok(())
}

/// Add a food to a meal and save the day log.
fn cmd_add(path: &Path, food: Option<&str>, meal: Option<&str>) -> Result<()> {
    let catalog = FoodCatalog::builtin();

    // Pick the food interactively when none was given
    let food = match food {
        Some(name) => name.to_string(),
        None => match prompt_food(catalog)? {
            Some(f) => f.id.clone(),
            None => {
                println!("Nothing added.");
                return Ok(());
            }
        },
    };

    let slot = match meal {
        Some(m) => m.parse::<MealSlot>()?,
        None => prompt_meal_slot()?,
    };

    // Load the day and log the food
    let mut tracker = DayTracker::new(catalog, load_or_sample(path)?);
    let added = match tracker.add(&food, slot) {
        Ok(f) => f,
        Err(AdvisorError::FoodNotFound(name)) => {
            let suggestions = catalog.suggest(&name);
            if !suggestions.is_empty() {
                let names: Vec<&str> = suggestions.iter().map(|f| f.name.as_str()).collect();
                eprintln!("Did you mean: {}?", names.join(", "));
            }
            return Err(AdvisorError::FoodNotFound(name));
        }
        Err(e) => return Err(e),
    };
    println!("{} added to your {}", added.name, slot);

    // Save
    let day = tracker.into_day();
    save_day(path, &day)?;
    println!(
        "Day log saved ({:.0} kcal across {} foods).",
        day.totals().calories,
        day.meals().len()
    );
    Ok(())
}

/// List catalog foods matching a search and category.
fn cmd_foods(search: &str, category: Option<&str>) -> Result<()> {
    let category = category.map(str::parse::<FoodCategory>).transpose()?;
    let foods = FoodCatalog::builtin().search(search, category);

    if foods.is_empty() {
        println!("No foods found matching your search");
        return Ok(());
    }

    let title = match category {
        Some(c) => format!("Foods: {}", c),
        None => "Foods".to_string(),
    };
    display_food_list(&foods, &title);
    Ok(())
}

/// Diet advice for the selected conditions against today's foods.
fn cmd_advise(path: &Path, ids: Vec<String>, json: bool) -> Result<()> {
    let day = load_or_sample(path)?;
    let conditions = ConditionCatalog::builtin();

    // Ask for conditions when none were given on the command line
    let ids = if ids.is_empty() {
        prompt_conditions(conditions)?
    } else {
        ids
    };

    if ids.is_empty() {
        display_condition_advice(&[]);
        return Ok(());
    }

    let advice = ConditionMatcher::new(conditions).advise(&ids, &day.diet())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
    } else {
        display_condition_advice(&advice);
    }
    Ok(())
}

/// Replace the day log with an empty day.
fn cmd_new_day(path: &Path, date: Option<String>) -> Result<()> {
    if path.exists() && !prompt_yes_no("Discard the current day log?", false)? {
        println!("Kept the current day log.");
        return Ok(());
    }

    let day = DailyTotals::new(date.unwrap_or_else(today));
    save_day(path, &day)?;
    println!("Started a new day: {}", day.date());
    Ok(())
}

/// Export the day's foods to CSV.
fn cmd_export(path: &Path, out: &Path) -> Result<()> {
    let day = load_or_sample(path)?;
    let rows = export_csv(out, &day)?;

    if rows == 0 {
        warn!(date = day.date(), "exported an empty day");
    }
    println!("Wrote {} foods to {}", rows, out.display());
    Ok(())
}
