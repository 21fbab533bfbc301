use tracing::info;

use crate::catalog::FoodCatalog;
use crate::error::{AdvisorError, Result};
use crate::models::{DailyTotals, FoodEntry, MealSlot};

/// Owns one day's log and resolves foods against a catalog before logging them.
pub struct DayTracker<'c> {
    catalog: &'c FoodCatalog,
    day: DailyTotals,
}

impl<'c> DayTracker<'c> {
    pub fn new(catalog: &'c FoodCatalog, day: DailyTotals) -> Self {
        Self { catalog, day }
    }

    pub fn catalog(&self) -> &'c FoodCatalog {
        self.catalog
    }

    pub fn day(&self) -> &DailyTotals {
        &self.day
    }

    pub fn into_day(self) -> DailyTotals {
        self.day
    }

    /// Log a catalog food by id.
    pub fn add_by_id(&mut self, id: &str, slot: MealSlot) -> Result<&'c FoodEntry> {
        let food = self
            .catalog
            .get(id)
            .ok_or_else(|| AdvisorError::FoodNotFound(id.to_string()))?;
        self.log(food, slot);
        Ok(food)
    }

    /// Log a catalog food by name (case-insensitive).
    pub fn add_by_name(&mut self, name: &str, slot: MealSlot) -> Result<&'c FoodEntry> {
        let food = self
            .catalog
            .find_by_name(name)
            .ok_or_else(|| AdvisorError::FoodNotFound(name.to_string()))?;
        self.log(food, slot);
        Ok(food)
    }

    /// Log by id first, then by name.
    pub fn add(&mut self, id_or_name: &str, slot: MealSlot) -> Result<&'c FoodEntry> {
        let food = self
            .catalog
            .resolve(id_or_name)
            .ok_or_else(|| AdvisorError::FoodNotFound(id_or_name.trim().to_string()))?;
        self.log(food, slot);
        Ok(food)
    }

    fn log(&mut self, food: &FoodEntry, slot: MealSlot) {
        info!(
            food = %food.name,
            meal = %slot,
            calories = food.calories,
            "food added"
        );
        self.day.add_food(slot, food.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> DayTracker<'static> {
        DayTracker::new(FoodCatalog::builtin(), DailyTotals::new("2024-01-01"))
    }

    #[test]
    fn test_add_by_id() {
        let mut tracker = tracker();
        let added = tracker.add_by_id("3", MealSlot::Lunch).unwrap();
        assert_eq!(added.name, "Chicken Breast");
        assert!((tracker.day().totals().macros.protein - 31.0).abs() < 0.001);
    }

    #[test]
    fn test_add_by_name_case_insensitive() {
        let mut tracker = tracker();
        tracker.add_by_name("brown rice", MealSlot::Dinner).unwrap();
        assert_eq!(tracker.day().meals().dinner[0].id, "7");
    }

    #[test]
    fn test_add_prefers_id_then_name() {
        let mut tracker = tracker();
        tracker.add("1", MealSlot::Breakfast).unwrap();
        tracker.add("Banana", MealSlot::Snacks).unwrap();
        assert_eq!(tracker.day().diet(), vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_add_unknown_name_reports_input() {
        let mut tracker = tracker();
        let err = tracker.add("salmn", MealSlot::Dinner).unwrap_err();
        assert!(matches!(err, AdvisorError::FoodNotFound(name) if name == "salmn"));
        assert!(tracker.day().meals().is_empty());
    }

    #[test]
    fn test_unknown_food_leaves_day_unchanged() {
        let mut tracker = tracker();
        let before = tracker.day().clone();

        assert!(matches!(
            tracker.add_by_id("999", MealSlot::Lunch),
            Err(AdvisorError::FoodNotFound(_))
        ));
        assert_eq!(tracker.day(), &before);
    }
}
