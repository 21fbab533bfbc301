use std::sync::LazyLock;

use strsim::jaro_winkler;

use crate::advisor::constants::{MAX_SUGGESTIONS, SUGGESTION_THRESHOLD};
use crate::models::{FoodCategory, FoodEntry, Macros, Micros};

/// Read-only list of foods the user can log.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodEntry>,
}

impl FoodCatalog {
    pub fn new(foods: Vec<FoodEntry>) -> Self {
        Self { foods }
    }

    /// The process-wide builtin catalog.
    pub fn builtin() -> &'static FoodCatalog {
        &BUILTIN_FOODS
    }

    pub fn all(&self) -> &[FoodEntry] {
        &self.foods
    }

    pub fn get(&self, id: &str) -> Option<&FoodEntry> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn by_category(&self, category: FoodCategory) -> Vec<&FoodEntry> {
        self.foods.iter().filter(|f| f.category == category).collect()
    }

    /// Case-insensitive name substring search with an optional category filter.
    ///
    /// An empty term matches every food.
    pub fn search(&self, term: &str, category: Option<FoodCategory>) -> Vec<&FoodEntry> {
        let term = term.to_lowercase();
        self.foods
            .iter()
            .filter(|f| f.key().contains(&term))
            .filter(|f| category.is_none_or(|c| f.category == c))
            .collect()
    }

    /// Exact name match, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&FoodEntry> {
        let key = name.trim().to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    /// Lookup by id first, then by exact name.
    pub fn resolve(&self, id_or_name: &str) -> Option<&FoodEntry> {
        self.get(id_or_name).or_else(|| self.find_by_name(id_or_name))
    }

    /// Fuzzy name candidates, best first.
    pub fn suggest(&self, name: &str) -> Vec<&FoodEntry> {
        let input = name.trim().to_lowercase();
        let mut candidates: Vec<(&FoodEntry, f64)> = self
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &input)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        candidates
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(f, _)| f)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    category: FoodCategory,
    serving_size: &str,
    calories: f64,
    [protein, carbs, fat, fiber]: [f64; 4],
    [vitamin_a, vitamin_c, calcium, iron, vitamin_d, potassium]: [f64; 6],
    sugar: f64,
    sodium: f64,
) -> FoodEntry {
    FoodEntry {
        id: id.to_string(),
        name: name.to_string(),
        category,
        serving_size: serving_size.to_string(),
        calories,
        macros: Macros {
            protein,
            carbs,
            fat,
            fiber,
        },
        micros: Micros {
            vitamin_a,
            vitamin_c,
            calcium,
            iron,
            vitamin_d,
            potassium,
        },
        sugar,
        sodium,
    }
}

// Macros: [protein, carbs, fat, fiber] in g.
// Micros: [vitamin A, vitamin C, calcium, iron, vitamin D, potassium] in % of reference.
#[rustfmt::skip]
static BUILTIN_FOODS: LazyLock<FoodCatalog> = LazyLock::new(|| {
    use FoodCategory::*;
    FoodCatalog::new(vec![
        entry("1", "Apple", Fruit, "1 medium (182g)", 95.0,
            [0.5, 25.0, 0.3, 4.0], [2.0, 14.0, 1.0, 1.0, 0.0, 4.0], 19.0, 2.0),
        entry("2", "Banana", Fruit, "1 medium (118g)", 105.0,
            [1.3, 27.0, 0.4, 3.1], [1.0, 10.0, 0.0, 1.0, 0.0, 9.0], 14.0, 1.0),
        entry("3", "Chicken Breast", Meat, "3 oz (85g)", 165.0,
            [31.0, 0.0, 3.6, 0.0], [0.0, 0.0, 1.0, 5.0, 0.0, 5.0], 0.0, 74.0),
        entry("4", "Greek Yogurt", Dairy, "6 oz (170g)", 100.0,
            [17.0, 6.0, 0.0, 0.0], [0.0, 0.0, 15.0, 0.0, 0.0, 6.0], 6.0, 65.0),
        entry("5", "Spinach", Vegetable, "1 cup (30g)", 7.0,
            [0.9, 1.1, 0.1, 0.7], [56.0, 14.0, 3.0, 5.0, 0.0, 5.0], 0.1, 24.0),
        entry("6", "Salmon", Meat, "3 oz (85g)", 177.0,
            [19.0, 0.0, 11.0, 0.0], [1.0, 0.0, 0.0, 3.0, 25.0, 8.0], 0.0, 50.0),
        entry("7", "Brown Rice", Grain, "1 cup cooked (195g)", 216.0,
            [5.0, 45.0, 1.8, 3.5], [0.0, 0.0, 1.0, 5.0, 0.0, 3.0], 0.7, 10.0),
        entry("8", "Chocolate Chip Cookie", Sweet, "1 cookie (16g)", 78.0,
            [1.0, 10.0, 3.8, 0.4], [0.0, 0.0, 1.0, 2.0, 0.0, 1.0], 6.0, 60.0),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_foods_are_valid() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.all().iter().all(|f| f.is_valid()));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.get("6").unwrap().name, "Salmon");
        assert!(catalog.get("99").is_none());
    }

    #[test]
    fn test_by_category() {
        let catalog = FoodCatalog::builtin();
        let names: Vec<&str> = catalog
            .by_category(FoodCategory::Meat)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Chicken Breast", "Salmon"]);
        assert!(catalog.by_category(FoodCategory::Other).is_empty());
    }

    #[test]
    fn test_search_with_category_filter() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.search("APPLE", None).len(), 1);
        assert_eq!(catalog.search("", None).len(), 8);
        assert_eq!(catalog.search("", Some(FoodCategory::Fruit)).len(), 2);
        assert!(catalog.search("rice", Some(FoodCategory::Fruit)).is_empty());
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let catalog = FoodCatalog::builtin();
        assert!(catalog.find_by_name("greek yogurt").is_some());
        assert!(catalog.find_by_name("  BANANA ").is_some());
        assert!(catalog.find_by_name("yogurt").is_none());
    }

    #[test]
    fn test_resolve_id_then_name() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.resolve("4").unwrap().name, "Greek Yogurt");
        assert_eq!(catalog.resolve("salmon").unwrap().id, "6");
        assert!(catalog.resolve("salmn").is_none());
    }

    #[test]
    fn test_suggest_close_names() {
        let catalog = FoodCatalog::builtin();
        let suggestions = catalog.suggest("salmn");
        assert_eq!(suggestions.first().map(|f| f.name.as_str()), Some("Salmon"));
        assert!(catalog.suggest("zzzzzz").is_empty());
    }
}
