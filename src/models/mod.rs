pub mod condition;
pub mod day;
pub mod food;
pub mod recommendation;

pub use condition::{ConditionAdvice, HealthCondition};
pub use day::{DailyTotals, MealSlot, Meals, NutrientTotals};
pub use food::{FoodCategory, FoodEntry, Macros, Micros};
pub use recommendation::{Nutrient, NutrientStatus, Recommendation};
