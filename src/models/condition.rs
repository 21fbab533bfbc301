use serde::{Deserialize, Serialize};

/// A health condition with the foods it favors and the foods it rules out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCondition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub recommended_foods: Vec<String>,
    pub foods_to_avoid: Vec<String>,
}

/// Diet advice for one condition, split against what the user already eats.
///
/// Each recommended descriptor lands in exactly one of `already_eating` /
/// `should_add`; each avoid descriptor in exactly one of
/// `currently_consuming` / `should_avoid`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionAdvice<'a> {
    pub condition: &'a HealthCondition,
    pub already_eating: Vec<&'a str>,
    pub should_add: Vec<&'a str>,
    pub currently_consuming: Vec<&'a str>,
    pub should_avoid: Vec<&'a str>,
}
