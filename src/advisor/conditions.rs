use tracing::debug;

use crate::catalog::ConditionCatalog;
use crate::error::Result;
use crate::models::{ConditionAdvice, HealthCondition};

/// Splits each condition's food lists against what the user currently eats.
///
/// A descriptor counts as eaten when some diet entry, lowercased, contains the
/// whole lowercased descriptor. Parenthetical examples are part of the
/// descriptor, so recall is low.
#[derive(Debug, Clone, Copy)]
pub struct ConditionMatcher<'a> {
    catalog: &'a ConditionCatalog,
}

impl<'a> ConditionMatcher<'a> {
    pub fn new(catalog: &'a ConditionCatalog) -> Self {
        Self { catalog }
    }

    /// Matcher bound to the builtin condition catalog.
    pub fn builtin() -> ConditionMatcher<'static> {
        ConditionMatcher::new(ConditionCatalog::builtin())
    }

    /// One advice record per id, in input order.
    ///
    /// Fails on the first unknown id without returning any advice.
    pub fn advise<I, D>(
        &self,
        condition_ids: &[I],
        diet: &[D],
    ) -> Result<Vec<ConditionAdvice<'a>>>
    where
        I: AsRef<str>,
        D: AsRef<str>,
    {
        let diet: Vec<String> = diet.iter().map(|f| f.as_ref().to_lowercase()).collect();

        condition_ids
            .iter()
            .map(|id| {
                let condition = self.catalog.require(id.as_ref())?;
                Ok(split_condition(condition, &diet))
            })
            .collect()
    }
}

/// `diet` must already be lowercased.
fn split_condition<'a>(condition: &'a HealthCondition, diet: &[String]) -> ConditionAdvice<'a> {
    let (already_eating, should_add) = partition(&condition.recommended_foods, diet);
    let (currently_consuming, should_avoid) = partition(&condition.foods_to_avoid, diet);

    debug!(
        condition = %condition.id,
        already_eating = already_eating.len(),
        currently_consuming = currently_consuming.len(),
        "matched condition against diet"
    );

    ConditionAdvice {
        condition,
        already_eating,
        should_add,
        currently_consuming,
        should_avoid,
    }
}

/// (eaten, not eaten), each in catalog order.
fn partition<'a>(descriptors: &'a [String], diet: &[String]) -> (Vec<&'a str>, Vec<&'a str>) {
    descriptors
        .iter()
        .map(String::as_str)
        .partition(|descriptor| is_eaten(descriptor, diet))
}

fn is_eaten(descriptor: &str, diet: &[String]) -> bool {
    let descriptor = descriptor.to_lowercase();
    diet.iter().any(|food| food.contains(&descriptor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;

    #[test]
    fn test_exact_phrase_matches() {
        let matcher = ConditionMatcher::builtin();
        let diet = ["Green apple (low in potassium and phosphorus) slices", "Chocolate"];
        let advice = matcher.advise(&["kidney"], &diet).unwrap();

        let kidney = &advice[0];
        assert_eq!(kidney.already_eating, vec!["Apple (low in potassium and phosphorus)"]);
        assert_eq!(kidney.currently_consuming, vec!["Chocolate"]);
        assert_eq!(kidney.should_add.len(), 5);
        assert_eq!(kidney.should_avoid.len(), 5);
    }

    #[test]
    fn test_partial_phrase_does_not_match() {
        let matcher = ConditionMatcher::builtin();
        let advice = matcher.advise(&["hypertension"], &["Spinach", "Kale"]).unwrap();
        assert!(advice[0].already_eating.is_empty());
        assert_eq!(advice[0].should_add.len(), 6);
    }

    #[test]
    fn test_preserves_input_order() {
        let matcher = ConditionMatcher::builtin();
        let advice = matcher
            .advise(&["ulcer", "diabetes", "ulcer"], &[] as &[&str])
            .unwrap();
        let ids: Vec<&str> = advice.iter().map(|a| a.condition.id.as_str()).collect();
        assert_eq!(ids, vec!["ulcer", "diabetes", "ulcer"]);
    }

    #[test]
    fn test_unknown_condition_fails_whole_call() {
        let matcher = ConditionMatcher::builtin();
        let result = matcher.advise(&["diabetes", "scurvy"], &["Apple"]);
        assert!(matches!(result, Err(AdvisorError::UnknownCondition(id)) if id == "scurvy"));
    }
}
