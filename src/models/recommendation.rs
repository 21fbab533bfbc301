use std::fmt;

use serde::Serialize;

/// Nutrients the recommendation engine evaluates, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nutrient {
    Protein,
    Fiber,
    #[serde(rename = "Vitamin C")]
    VitaminC,
    #[serde(rename = "Vitamin D")]
    VitaminD,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Protein,
        Nutrient::Fiber,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Nutrient::Protein => "Protein",
            Nutrient::Fiber => "Fiber",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::VitaminD => "Vitamin D",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    Deficient,
    Adequate,
    Excess,
}

impl fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NutrientStatus::Deficient => "Deficient",
            NutrientStatus::Adequate => "Adequate",
            NutrientStatus::Excess => "Excess",
        })
    }
}

/// Evaluation of one nutrient against its daily reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub nutrient: Nutrient,
    pub status: NutrientStatus,
    /// Percent of reference; not capped.
    pub percentage: f64,
    pub recommendations: &'static [&'static str],
}
