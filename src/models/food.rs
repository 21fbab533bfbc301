use std::fmt;
use std::ops::AddAssign;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Food group used for browsing and filtering the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodCategory {
    #[serde(rename = "fruits")]
    Fruit,
    #[serde(rename = "vegetables")]
    Vegetable,
    #[serde(rename = "meats")]
    Meat,
    #[serde(rename = "dairy")]
    Dairy,
    #[serde(rename = "grains")]
    Grain,
    #[serde(rename = "sweets")]
    Sweet,
    #[serde(rename = "other")]
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 7] = [
        FoodCategory::Fruit,
        FoodCategory::Vegetable,
        FoodCategory::Meat,
        FoodCategory::Dairy,
        FoodCategory::Grain,
        FoodCategory::Sweet,
        FoodCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Fruit => "fruits",
            FoodCategory::Vegetable => "vegetables",
            FoodCategory::Meat => "meats",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Grain => "grains",
            FoodCategory::Sweet => "sweets",
            FoodCategory::Other => "other",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodCategory {
    type Err = AdvisorError;

    /// Accepts both singular and plural names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        FoodCategory::ALL
            .into_iter()
            .find(|c| {
                let plural = c.as_str();
                needle == plural || Some(needle.as_str()) == plural.strip_suffix('s')
            })
            .ok_or_else(|| AdvisorError::InvalidInput(format!("unknown food category '{}'", s)))
    }
}

/// Macronutrients in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl AddAssign<&Macros> for Macros {
    fn add_assign(&mut self, rhs: &Macros) {
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
        self.fiber += rhs.fiber;
    }
}

/// Micronutrients as percent of the reference daily value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Micros {
    pub vitamin_a: f64,
    pub vitamin_c: f64,
    pub calcium: f64,
    pub iron: f64,
    pub vitamin_d: f64,
    pub potassium: f64,
}

impl Micros {
    /// Display labels paired with values, in a fixed order.
    pub fn labelled(&self) -> [(&'static str, f64); 6] {
        [
            ("Vitamin A", self.vitamin_a),
            ("Vitamin C", self.vitamin_c),
            ("Calcium", self.calcium),
            ("Iron", self.iron),
            ("Vitamin D", self.vitamin_d),
            ("Potassium", self.potassium),
        ]
    }
}

impl AddAssign<&Micros> for Micros {
    fn add_assign(&mut self, rhs: &Micros) {
        self.vitamin_a += rhs.vitamin_a;
        self.vitamin_c += rhs.vitamin_c;
        self.calcium += rhs.calcium;
        self.iron += rhs.iron;
        self.vitamin_d += rhs.vitamin_d;
        self.potassium += rhs.potassium;
    }
}

/// A catalog food with nutritional data for one serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    pub serving_size: String,
    pub calories: f64,
    pub macros: Macros,
    pub micros: Micros,
    pub sugar: f64,
    pub sodium: f64,
}

impl FoodEntry {
    /// Non-negative values across every nutrient field.
    pub fn is_valid(&self) -> bool {
        let m = &self.macros;
        let u = &self.micros;
        [
            self.calories,
            m.protein,
            m.carbs,
            m.fat,
            m.fiber,
            u.vitamin_a,
            u.vitamin_c,
            u.calcium,
            u.iron,
            u.vitamin_d,
            u.potassium,
            self.sugar,
            self.sodium,
        ]
        .into_iter()
        .all(|v| v >= 0.0)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodEntry {
        FoodEntry {
            id: "1".to_string(),
            name: "Apple".to_string(),
            category: FoodCategory::Fruit,
            serving_size: "1 medium (182g)".to_string(),
            calories: 95.0,
            macros: Macros {
                protein: 0.5,
                carbs: 25.0,
                fat: 0.3,
                fiber: 4.0,
            },
            micros: Micros {
                vitamin_a: 2.0,
                vitamin_c: 14.0,
                calcium: 1.0,
                iron: 1.0,
                vitamin_d: 0.0,
                potassium: 4.0,
            },
            sugar: 19.0,
            sodium: 2.0,
        }
    }

    #[test]
    fn test_is_valid() {
        let food = sample_food();
        assert!(food.is_valid());

        let mut invalid = sample_food();
        invalid.macros.fiber = -1.0;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_category_parse_singular_and_plural() {
        assert_eq!("fruit".parse::<FoodCategory>().unwrap(), FoodCategory::Fruit);
        assert_eq!("Meats".parse::<FoodCategory>().unwrap(), FoodCategory::Meat);
        assert_eq!("dairy".parse::<FoodCategory>().unwrap(), FoodCategory::Dairy);
        assert!("candy".parse::<FoodCategory>().is_err());
    }

    #[test]
    fn test_json_uses_camel_case_and_plural_category() {
        let json = serde_json::to_value(sample_food()).unwrap();
        assert_eq!(json["servingSize"], "1 medium (182g)");
        assert_eq!(json["category"], "fruits");
        assert_eq!(json["micros"]["vitaminC"], 14.0);
    }

    #[test]
    fn test_macros_add_assign() {
        let mut total = Macros::default();
        total += &sample_food().macros;
        total += &sample_food().macros;
        assert!((total.carbs - 50.0).abs() < 0.001);
        assert!((total.fiber - 8.0).abs() < 0.001);
    }
}
