use tracing::debug;

use crate::advisor::constants::*;
use crate::catalog::ReferenceTable;
use crate::models::{Nutrient, NutrientStatus, NutrientTotals, Recommendation};

/// Grades protein, fiber, vitamin C and vitamin D against a reference table.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'a> {
    reference: &'a ReferenceTable,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(reference: &'a ReferenceTable) -> Self {
        Self { reference }
    }

    /// Engine bound to the builtin RDA table.
    pub fn builtin() -> RecommendationEngine<'static> {
        RecommendationEngine::new(ReferenceTable::builtin())
    }

    /// One recommendation per nutrient, always in [`Nutrient::ALL`] order.
    pub fn evaluate(&self, totals: &NutrientTotals) -> [Recommendation; 4] {
        let recs = Nutrient::ALL.map(|nutrient| self.evaluate_nutrient(nutrient, totals));
        for rec in &recs {
            debug!(
                nutrient = rec.nutrient.name(),
                status = %rec.status,
                percentage = rec.percentage,
                "evaluated nutrient"
            );
        }
        recs
    }

    fn evaluate_nutrient(&self, nutrient: Nutrient, totals: &NutrientTotals) -> Recommendation {
        let percentage = self.percentage(nutrient, totals);
        let status = classify(nutrient, percentage);
        Recommendation {
            nutrient,
            status,
            percentage,
            recommendations: advice(nutrient, status),
        }
    }

    /// Macros are divided by their gram reference; micros are already percent.
    pub fn percentage(&self, nutrient: Nutrient, totals: &NutrientTotals) -> f64 {
        match nutrient {
            Nutrient::Protein => totals.macros.protein / self.reference.macros.protein * 100.0,
            Nutrient::Fiber => totals.macros.fiber / self.reference.macros.fiber * 100.0,
            Nutrient::VitaminC => totals.micros.vitamin_c,
            Nutrient::VitaminD => totals.micros.vitamin_d,
        }
    }
}

/// Map a percentage to a status. Every bound is strict.
pub fn classify(nutrient: Nutrient, percentage: f64) -> NutrientStatus {
    let (deficient_below, excess_above) = match nutrient {
        Nutrient::Protein => (PROTEIN_DEFICIENT_BELOW, Some(PROTEIN_EXCESS_ABOVE)),
        Nutrient::Fiber => (FIBER_DEFICIENT_BELOW, None),
        Nutrient::VitaminC => (VITAMIN_C_DEFICIENT_BELOW, None),
        Nutrient::VitaminD => (VITAMIN_D_DEFICIENT_BELOW, None),
    };

    if percentage < deficient_below {
        NutrientStatus::Deficient
    } else if excess_above.is_some_and(|limit| percentage > limit) {
        NutrientStatus::Excess
    } else {
        NutrientStatus::Adequate
    }
}

/// Fixed advisory text for a nutrient and status.
///
/// Nutrients without an excess state fall back to their adequate text.
pub fn advice(nutrient: Nutrient, status: NutrientStatus) -> &'static [&'static str] {
    match (nutrient, status) {
        (Nutrient::Protein, NutrientStatus::Deficient) => PROTEIN_DEFICIENT_ADVICE,
        (Nutrient::Protein, NutrientStatus::Excess) => PROTEIN_EXCESS_ADVICE,
        (Nutrient::Protein, NutrientStatus::Adequate) => PROTEIN_ADEQUATE_ADVICE,
        (Nutrient::Fiber, NutrientStatus::Deficient) => FIBER_DEFICIENT_ADVICE,
        (Nutrient::Fiber, _) => FIBER_ADEQUATE_ADVICE,
        (Nutrient::VitaminC, NutrientStatus::Deficient) => VITAMIN_C_DEFICIENT_ADVICE,
        (Nutrient::VitaminC, _) => VITAMIN_C_ADEQUATE_ADVICE,
        (Nutrient::VitaminD, NutrientStatus::Deficient) => VITAMIN_D_DEFICIENT_ADVICE,
        (Nutrient::VitaminD, _) => VITAMIN_D_ADEQUATE_ADVICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_bounds_are_strict() {
        assert_eq!(classify(Nutrient::Protein, 79.99), NutrientStatus::Deficient);
        assert_eq!(classify(Nutrient::Protein, 80.0), NutrientStatus::Adequate);
        assert_eq!(classify(Nutrient::Protein, 150.0), NutrientStatus::Adequate);
        assert_eq!(classify(Nutrient::Protein, 150.01), NutrientStatus::Excess);
    }

    #[test]
    fn test_only_protein_has_excess() {
        assert_eq!(classify(Nutrient::Fiber, 500.0), NutrientStatus::Adequate);
        assert_eq!(classify(Nutrient::VitaminC, 500.0), NutrientStatus::Adequate);
        assert_eq!(classify(Nutrient::VitaminD, 500.0), NutrientStatus::Adequate);
    }

    #[test]
    fn test_vitamin_d_threshold_is_fifty() {
        assert_eq!(classify(Nutrient::VitaminD, 49.9), NutrientStatus::Deficient);
        assert_eq!(classify(Nutrient::VitaminD, 50.0), NutrientStatus::Adequate);
        assert_eq!(classify(Nutrient::VitaminC, 50.0), NutrientStatus::Deficient);
    }

    #[test]
    fn test_micros_are_not_divided_again() {
        let engine = RecommendationEngine::builtin();
        let mut totals = NutrientTotals::default();
        totals.micros.vitamin_c = 42.0;
        totals.macros.fiber = 14.0;

        assert_eq!(engine.percentage(Nutrient::VitaminC, &totals), 42.0);
        assert!((engine.percentage(Nutrient::Fiber, &totals) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_advice_lists_have_two_or_three_lines() {
        for nutrient in Nutrient::ALL {
            for status in [
                NutrientStatus::Deficient,
                NutrientStatus::Adequate,
                NutrientStatus::Excess,
            ] {
                let lines = advice(nutrient, status);
                assert!((2..=3).contains(&lines.len()));
            }
        }
    }
}
