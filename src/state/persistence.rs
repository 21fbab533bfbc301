use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::{DailyTotals, MealSlot};

/// Load a day log from a JSON file.
///
/// Stored totals are ignored and recomputed from the logged foods. Foods with
/// negative nutrient values are rejected.
pub fn load_day<P: AsRef<Path>>(path: P) -> Result<DailyTotals> {
    let content = fs::read_to_string(path.as_ref())?;
    let day: DailyTotals = serde_json::from_str(&content)?;
    debug!(path = %path.as_ref().display(), date = day.date(), "loaded day log");
    Ok(day)
}

/// Save a day log to a JSON file.
pub fn save_day<P: AsRef<Path>>(path: P, day: &DailyTotals) -> Result<()> {
    let json = serde_json::to_string_pretty(day)?;
    fs::write(path.as_ref(), json)?;
    debug!(path = %path.as_ref().display(), date = day.date(), "saved day log");
    Ok(())
}

/// Write one CSV row per logged food.
pub fn export_csv<P: AsRef<Path>>(path: P, day: &DailyTotals) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    wtr.write_record([
        "date",
        "meal",
        "id",
        "name",
        "serving_size",
        "calories",
        "protein_g",
        "carbs_g",
        "fat_g",
    ])?;

    let mut rows = 0;
    for slot in MealSlot::ALL {
        for food in day.meals().slot(slot) {
            wtr.write_record([
                day.date().to_string(),
                slot.to_string(),
                food.id.clone(),
                food.name.clone(),
                food.serving_size.clone(),
                format!("{}", food.calories),
                format!("{}", food.macros.protein),
                format!("{}", food.macros.carbs),
                format!("{}", food.macros.fat),
            ])?;
            rows += 1;
        }
    }

    wtr.flush()?;
    Ok(rows)
}
