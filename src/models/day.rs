use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::advisor::aggregation::aggregate;
use crate::error::AdvisorError;
use crate::models::food::{FoodEntry, Macros, Micros};

/// One of the four meal slots of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "snack" | "snacks" => Ok(MealSlot::Snacks),
            _ => Err(AdvisorError::InvalidInput(format!(
                "unknown meal '{}' (expected breakfast, lunch, dinner or snacks)",
                s
            ))),
        }
    }
}

/// Summed nutrients of any number of food entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    #[serde(rename = "totalCalories")]
    pub calories: f64,

    #[serde(rename = "totalMacros")]
    pub macros: Macros,

    #[serde(rename = "totalMicros")]
    pub micros: Micros,

    #[serde(rename = "totalSugar")]
    pub sugar: f64,

    #[serde(rename = "totalSodium")]
    pub sodium: f64,
}

impl NutrientTotals {
    /// Add a single entry's values to every total.
    pub fn add_food(&mut self, food: &FoodEntry) {
        self.calories += food.calories;
        self.macros += &food.macros;
        self.micros += &food.micros;
        self.sugar += food.sugar;
        self.sodium += food.sodium;
    }
}

/// Foods logged per meal slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meals {
    #[serde(default)]
    pub breakfast: Vec<FoodEntry>,
    #[serde(default)]
    pub lunch: Vec<FoodEntry>,
    #[serde(default)]
    pub dinner: Vec<FoodEntry>,
    #[serde(default)]
    pub snacks: Vec<FoodEntry>,
}

impl Meals {
    pub fn slot(&self, slot: MealSlot) -> &[FoodEntry] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<FoodEntry> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snacks => &mut self.snacks,
        }
    }

    /// Every entry, breakfast through snacks.
    pub fn iter(&self) -> impl Iterator<Item = &FoodEntry> {
        MealSlot::ALL.into_iter().flat_map(move |s| self.slot(s).iter())
    }

    pub fn len(&self) -> usize {
        MealSlot::ALL.iter().map(|s| self.slot(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stored form of a day: totals are never trusted from disk.
#[derive(Deserialize)]
struct DayRecord {
    date: String,
    #[serde(default)]
    foods: Meals,
}

impl TryFrom<DayRecord> for DailyTotals {
    type Error = AdvisorError;

    fn try_from(record: DayRecord) -> Result<Self, Self::Error> {
        // Every logged entry must carry non-negative nutrients
        if let Some(bad) = record.foods.iter().find(|f| !f.is_valid()) {
            return Err(AdvisorError::InvalidInput(format!(
                "food '{}' has negative nutrient values",
                bad.name
            )));
        }
        Ok(DailyTotals::from_meals(record.date, record.foods))
    }
}

/// A day's logged foods and their running totals.
///
/// Totals only change through [`DailyTotals::add_food`], which appends and
/// increments together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DayRecord")]
pub struct DailyTotals {
    date: String,

    #[serde(flatten)]
    totals: NutrientTotals,

    foods: Meals,
}

impl DailyTotals {
    /// An empty day.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            totals: NutrientTotals::default(),
            foods: Meals::default(),
        }
    }

    /// Build a day from pre-filled meal slots, summing every entry.
    pub fn from_meals(date: impl Into<String>, foods: Meals) -> Self {
        let totals = aggregate(foods.iter());
        Self {
            date: date.into(),
            totals,
            foods,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn totals(&self) -> &NutrientTotals {
        &self.totals
    }

    pub fn meals(&self) -> &Meals {
        &self.foods
    }

    /// Append a food to one slot and add its values to the totals.
    pub fn add_food(&mut self, slot: MealSlot, food: FoodEntry) {
        self.totals.add_food(&food);
        self.foods.slot_mut(slot).push(food);
    }

    /// Names of every logged food, breakfast through snacks.
    pub fn diet(&self) -> Vec<String> {
        self.foods.iter().map(|f| f.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::food::FoodCategory;

    fn food(name: &str, calories: f64, protein: f64, vitamin_c: f64) -> FoodEntry {
        FoodEntry {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: FoodCategory::Other,
            serving_size: "1 serving".to_string(),
            calories,
            macros: Macros {
                protein,
                ..Default::default()
            },
            micros: Micros {
                vitamin_c,
                ..Default::default()
            },
            sugar: 1.0,
            sodium: 10.0,
        }
    }

    #[test]
    fn test_meal_slot_parse() {
        assert_eq!("Breakfast".parse::<MealSlot>().unwrap(), MealSlot::Breakfast);
        assert_eq!("snack".parse::<MealSlot>().unwrap(), MealSlot::Snacks);
        assert!("brunch".parse::<MealSlot>().is_err());
    }

    #[test]
    fn test_add_food_updates_slot_and_totals() {
        let mut day = DailyTotals::new("2024-01-01");
        day.add_food(MealSlot::Lunch, food("Soup", 120.0, 6.0, 10.0));

        assert_eq!(day.meals().lunch.len(), 1);
        assert!(day.meals().breakfast.is_empty());
        assert!((day.totals().calories - 120.0).abs() < 0.001);
        assert!((day.totals().macros.protein - 6.0).abs() < 0.001);
        assert!((day.totals().micros.vitamin_c - 10.0).abs() < 0.001);
        assert!((day.totals().sodium - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_diet_lists_names_in_slot_order() {
        let mut day = DailyTotals::new("2024-01-01");
        day.add_food(MealSlot::Snacks, food("Cookie", 78.0, 1.0, 0.0));
        day.add_food(MealSlot::Breakfast, food("Oats", 150.0, 5.0, 0.0));
        day.add_food(MealSlot::Dinner, food("Fish", 177.0, 19.0, 0.0));

        assert_eq!(day.diet(), vec!["Oats", "Fish", "Cookie"]);
        assert_eq!(day.meals().len(), 3);
    }

    #[test]
    fn test_deserialize_recomputes_totals() {
        let json = r#"{
            "date": "2024-01-01",
            "totalCalories": 99999,
            "foods": {
                "breakfast": [{
                    "id": "1", "name": "Apple", "category": "fruits",
                    "servingSize": "1 medium", "calories": 95,
                    "macros": {"protein": 0.5, "carbs": 25, "fat": 0.3, "fiber": 4},
                    "micros": {"vitaminA": 2, "vitaminC": 14, "calcium": 1,
                               "iron": 1, "vitaminD": 0, "potassium": 4},
                    "sugar": 19, "sodium": 2
                }]
            }
        }"#;

        let day: DailyTotals = serde_json::from_str(json).unwrap();
        assert_eq!(day.date(), "2024-01-01");
        assert!((day.totals().calories - 95.0).abs() < 0.001);
        assert!((day.totals().macros.fiber - 4.0).abs() < 0.001);
        assert!(day.meals().lunch.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_negative_nutrients() {
        let json = r#"{
            "date": "2024-01-01",
            "foods": {
                "lunch": [{
                    "id": "x", "name": "Mystery", "category": "other",
                    "servingSize": "1", "calories": -5000,
                    "macros": {"protein": 0, "carbs": 0, "fat": 0, "fiber": 0},
                    "micros": {"vitaminA": 0, "vitaminC": 0, "calcium": 0,
                               "iron": 0, "vitaminD": 0, "potassium": 0},
                    "sugar": 0, "sodium": 0
                }]
            }
        }"#;

        let err = serde_json::from_str::<DailyTotals>(json).unwrap_err();
        assert!(err.to_string().contains("Mystery"));
    }

    #[test]
    fn test_serialize_flattens_totals() {
        let mut day = DailyTotals::new("2024-01-01");
        day.add_food(MealSlot::Dinner, food("Fish", 177.0, 19.0, 0.0));

        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["totalCalories"], 177.0);
        assert_eq!(json["totalMacros"]["protein"], 19.0);
        assert_eq!(json["foods"]["dinner"][0]["name"], "Fish");
    }
}
