use tracing::debug;

use crate::catalog::FoodCatalog;
use crate::error::{AdvisorError, Result};
use crate::models::{DailyTotals, FoodEntry, MealSlot, Meals, NutrientTotals};

/// Sum every nutrient field independently across the given entries.
pub fn aggregate<'a, I>(foods: I) -> NutrientTotals
where
    I: IntoIterator<Item = &'a FoodEntry>,
{
    foods
        .into_iter()
        .fold(NutrientTotals::default(), |mut totals, food| {
            totals.add_food(food);
            totals
        })
}

/// The demo day: a full set of meals built from the catalog.
pub fn sample_day(catalog: &FoodCatalog, date: impl Into<String>) -> Result<DailyTotals> {
    const PLAN: [(MealSlot, &[&str]); 4] = [
        (MealSlot::Breakfast, &["1", "4"]),
        (MealSlot::Lunch, &["3", "5", "7"]),
        (MealSlot::Dinner, &["6", "5"]),
        (MealSlot::Snacks, &["2", "8"]),
    ];

    let mut meals = Meals::default();
    for (slot, ids) in PLAN {
        let entries = ids
            .iter()
            .map(|id| {
                catalog
                    .get(id)
                    .cloned()
                    .ok_or_else(|| AdvisorError::FoodNotFound(id.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        match slot {
            MealSlot::Breakfast => meals.breakfast = entries,
            MealSlot::Lunch => meals.lunch = entries,
            MealSlot::Dinner => meals.dinner = entries,
            MealSlot::Snacks => meals.snacks = entries,
        }
    }

    let day = DailyTotals::from_meals(date, meals);
    debug!(
        date = day.date(),
        foods = day.meals().len(),
        calories = day.totals().calories,
        "built sample day"
    );
    Ok(day)
}
