use crate::advisor::{Band, DailyProgress, NutrientProgress};
use crate::models::{
    ConditionAdvice, DailyTotals, FoodEntry, HealthCondition, MealSlot, Recommendation,
};

const BAR_WIDTH: usize = 20;

fn bar(percent: u32) -> String {
    let filled = (percent as usize * BAR_WIDTH) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn band_marker(band: Band) -> &'static str {
    match band {
        Band::Low => "!!",
        Band::Fair => "~ ",
        Band::Good => "ok",
    }
}

fn display_progress_row(row: &NutrientProgress, width: usize) {
    println!(
        "  {:<width$} {} {:>3}% {}  {:.1} / {:.0}{}",
        row.label,
        bar(row.percent),
        row.percent,
        band_marker(row.band),
        row.consumed,
        row.target,
        row.unit,
        width = width
    );
}

/// Display totals as progress bars against the daily reference.
pub fn display_summary(day: &DailyTotals, progress: &DailyProgress) {
    println!();
    println!("=== Daily Nutrition Summary ({}) ===", day.date());
    println!();

    let width = progress
        .macros
        .iter()
        .chain(progress.micros.iter())
        .map(|p| p.label.len())
        .max()
        .unwrap_or(10);

    println!("Macronutrients");
    for row in &progress.macros {
        display_progress_row(row, width);
    }

    println!();
    println!("Micronutrients");
    for row in &progress.micros {
        display_progress_row(row, width);
    }

    println!();
    println!("Sodium: {:.0} mg", day.totals().sodium);
}

/// Display the nutrient recommendations.
pub fn display_recommendations(recommendations: &[Recommendation]) {
    println!();
    println!("=== Nutrition Recommendations ===");

    for rec in recommendations {
        println!();
        println!(
            "{} - {} ({:.0}%)",
            rec.nutrient,
            rec.status,
            rec.percentage.round()
        );
        for line in rec.recommendations {
            println!("  * {}", line);
        }
    }

    println!();
}

/// Display the foods of every meal slot.
pub fn display_meals(day: &DailyTotals) {
    for slot in MealSlot::ALL {
        let foods: Vec<&FoodEntry> = day.meals().slot(slot).iter().collect();
        display_food_list(&foods, slot.title());
    }
}

/// Display a list of foods with serving and macro details.
pub fn display_food_list(foods: &[&FoodEntry], title: &str) {
    if foods.is_empty() {
        println!("{}: No foods added yet", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());

    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in foods {
        println!(
            "  [{:>2}] {:<width$}  {:<20} {:>4} kcal | P: {}g | C: {}g | F: {}g",
            food.id,
            food.name,
            food.serving_size,
            food.calories,
            food.macros.protein,
            food.macros.carbs,
            food.macros.fat,
            width = max_name_len
        );
    }

    println!();
}

/// Display the condition catalog.
pub fn display_conditions(conditions: &[HealthCondition]) {
    println!();
    println!("=== Health Conditions ===");

    for condition in conditions {
        println!();
        println!("{} ({})", condition.name, condition.id);
        println!("  {}", condition.description);
    }

    println!();
}

fn display_section(heading: &str, items: &[&str], empty: &str) {
    println!("  {}", heading);
    if items.is_empty() {
        println!("    {}", empty);
    }
    for item in items {
        println!("    - {}", item);
    }
}

/// Display per-condition diet advice.
pub fn display_condition_advice(advice: &[ConditionAdvice]) {
    if advice.is_empty() {
        println!(
            "Please select at least one health condition to see personalized recommendations."
        );
        return;
    }

    for rec in advice {
        println!();
        println!("=== {} Recommendations ===", rec.condition.name);
        println!();
        display_section(
            "Already eating (good job!)",
            &rec.already_eating,
            "None of the recommended foods yet",
        );
        display_section("Consider adding", &rec.should_add, "Nothing to add");
        display_section(
            "Currently consuming (consider reducing)",
            &rec.currently_consuming,
            "None - nice work",
        );
        display_section("Foods to avoid", &rec.should_avoid, "Nothing else to avoid");
    }

    println!();
}
