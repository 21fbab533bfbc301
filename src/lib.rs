pub mod advisor;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use error::{AdvisorError, Result};
pub use models::{ConditionAdvice, DailyTotals, FoodEntry, HealthCondition, Recommendation};
