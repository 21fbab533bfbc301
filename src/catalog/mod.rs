mod conditions;
mod foods;
mod reference;

pub use conditions::ConditionCatalog;
pub use foods::FoodCatalog;
pub use reference::{RDA_REFERENCE, ReferenceTable};
