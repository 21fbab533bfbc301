pub mod aggregation;
pub mod conditions;
pub mod constants;
pub mod progress;
pub mod recommendations;

pub use aggregation::{aggregate, sample_day};
pub use conditions::ConditionMatcher;
pub use progress::{Band, DailyProgress, NutrientProgress};
pub use recommendations::{RecommendationEngine, advice, classify};
