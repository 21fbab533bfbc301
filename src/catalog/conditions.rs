use std::sync::LazyLock;

use crate::error::{AdvisorError, Result};
use crate::models::HealthCondition;

/// Read-only list of selectable health conditions.
#[derive(Debug, Clone, Default)]
pub struct ConditionCatalog {
    conditions: Vec<HealthCondition>,
}

impl ConditionCatalog {
    pub fn new(conditions: Vec<HealthCondition>) -> Self {
        Self { conditions }
    }

    /// The process-wide builtin catalog.
    pub fn builtin() -> &'static ConditionCatalog {
        &BUILTIN_CONDITIONS
    }

    pub fn all(&self) -> &[HealthCondition] {
        &self.conditions
    }

    pub fn get(&self, id: &str) -> Option<&HealthCondition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    /// Like [`ConditionCatalog::get`], but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<&HealthCondition> {
        self.get(id)
            .ok_or_else(|| AdvisorError::UnknownCondition(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

fn condition(
    id: &str,
    name: &str,
    description: &str,
    recommended: &[&str],
    avoid: &[&str],
) -> HealthCondition {
    HealthCondition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        recommended_foods: recommended.iter().map(|s| s.to_string()).collect(),
        foods_to_avoid: avoid.iter().map(|s| s.to_string()).collect(),
    }
}

static BUILTIN_CONDITIONS: LazyLock<ConditionCatalog> = LazyLock::new(|| {
    ConditionCatalog::new(vec![
        condition(
            "diabetes",
            "Diabetes",
            "A disorder where the body does not produce enough insulin or respond properly \
             to insulin, leading to high blood sugar levels.",
            &[
                "Non-starchy vegetables (spinach, broccoli, green beans)",
                "Whole grains (brown rice, quinoa, barley)",
                "Lean proteins (chicken breast, fish, tofu)",
                "Healthy fats (avocados, nuts, olive oil)",
                "Low-glycemic fruits (berries, apples, pears)",
                "Legumes (chickpeas, lentils, beans)",
            ],
            &[
                "Sugary beverages (soda, fruit juice)",
                "Refined grains (white bread, white rice)",
                "Processed sweets (cookies, cakes, candies)",
                "Fried foods and fast food",
                "High-glycemic fruits (watermelon, pineapple)",
                "Alcohol (especially beer and sweet wines)",
            ],
        ),
        condition(
            "hypertension",
            "High Blood Pressure",
            "A condition in which the force of blood against artery walls is consistently \
             too high, which can lead to heart disease.",
            &[
                "Leafy green vegetables (spinach, kale)",
                "Low-fat dairy products",
                "Berries (blueberries, strawberries)",
                "Potassium-rich foods (bananas, sweet potatoes)",
                "Oily fish (salmon, mackerel)",
                "Garlic and herbs instead of salt",
            ],
            &[
                "High-sodium processed foods",
                "Canned soups and vegetables with added salt",
                "Pickled foods",
                "Fatty meats",
                "Fried foods",
                "Caffeine and alcohol",
            ],
        ),
        condition(
            "kidney",
            "Kidney Issues",
            "Problems with kidney function, including chronic kidney disease, which affects \
             the kidneys' ability to filter waste and excess fluid from the blood.",
            &[
                "Lower protein options (depending on kidney function)",
                "Low-sodium foods",
                "Water and clear fluids",
                "Cranberry juice (for urinary tract health)",
                "Apple (low in potassium and phosphorus)",
                "Rice and rice products",
            ],
            &[
                "High-phosphorus foods (dairy, nuts, whole grains)",
                "High-potassium foods (bananas, oranges, potatoes)",
                "High-sodium foods (processed foods, canned soups)",
                "High-protein foods (if recommended by doctor)",
                "Chocolate",
                "Dark-colored colas",
            ],
        ),
        condition(
            "ulcer",
            "Stomach Ulcer",
            "Painful sores that develop in the lining of the stomach or small intestine, \
             often due to bacterial infection or long-term use of certain medications.",
            &[
                "Fiber-rich foods (oats, apples)",
                "Probiotic foods (yogurt, kefir)",
                "Non-acidic fruits (bananas, apples)",
                "Vegetables (especially leafy greens)",
                "Lean proteins (chicken, fish)",
                "Healthy fats (olive oil, avocados)",
            ],
            &[
                "Spicy foods",
                "Acidic foods (citrus, tomatoes)",
                "Coffee and caffeinated beverages",
                "Alcohol",
                "Chocolate",
                "Fatty and fried foods",
            ],
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_conditions() {
        let catalog = ConditionCatalog::builtin();
        let ids: Vec<&str> = catalog.all().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["diabetes", "hypertension", "kidney", "ulcer"]);
        assert!(catalog
            .all()
            .iter()
            .all(|c| c.recommended_foods.len() == 6 && c.foods_to_avoid.len() == 6));
    }

    #[test]
    fn test_require_unknown_condition() {
        let catalog = ConditionCatalog::builtin();
        assert_eq!(catalog.require("ulcer").unwrap().name, "Stomach Ulcer");
        assert!(matches!(
            catalog.require("scurvy"),
            Err(AdvisorError::UnknownCondition(id)) if id == "scurvy"
        ));
    }
}
