use serde::Serialize;

use crate::models::{Macros, Micros};

/// Recommended daily values used as comparison denominators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceTable {
    /// kcal
    pub calories: f64,
    /// g
    pub macros: Macros,
    /// % of reference
    pub micros: Micros,
    /// g
    pub sugar: f64,
    /// mg
    pub sodium: f64,
}

impl ReferenceTable {
    /// The process-wide RDA table.
    pub fn builtin() -> &'static ReferenceTable {
        &RDA_REFERENCE
    }
}

pub static RDA_REFERENCE: ReferenceTable = ReferenceTable {
    calories: 2000.0,
    macros: Macros {
        protein: 50.0,
        carbs: 275.0,
        fat: 78.0,
        fiber: 28.0,
    },
    micros: Micros {
        vitamin_a: 100.0,
        vitamin_c: 100.0,
        calcium: 100.0,
        iron: 100.0,
        vitamin_d: 100.0,
        potassium: 100.0,
    },
    sugar: 36.0,
    sodium: 2300.0,
};
