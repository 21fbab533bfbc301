use std::fmt;

use serde::Serialize;

use crate::advisor::constants::*;
use crate::catalog::ReferenceTable;
use crate::models::NutrientTotals;

/// Three-level grading of a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Fair,
    Good,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Band::Low => "low",
            Band::Fair => "fair",
            Band::Good => "good",
        })
    }
}

/// One progress bar of the daily summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientProgress {
    pub label: &'static str,
    pub consumed: f64,
    pub target: f64,
    pub unit: &'static str,
    /// Rounded and capped at 100.
    pub percent: u32,
    pub band: Band,
}

/// Progress bars for the summary: energy and macros, then micros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyProgress {
    pub macros: Vec<NutrientProgress>,
    pub micros: Vec<NutrientProgress>,
}

impl DailyProgress {
    pub fn from_totals(totals: &NutrientTotals, reference: &ReferenceTable) -> Self {
        let m = &totals.macros;
        let r = &reference.macros;

        let macros = vec![
            against("Calories", totals.calories, reference.calories, "kcal", false),
            against("Protein", m.protein, r.protein, "g", false),
            against("Carbs", m.carbs, r.carbs, "g", false),
            against("Fat", m.fat, r.fat, "g", false),
            against("Fiber", m.fiber, r.fiber, "g", false),
            against("Sugar", totals.sugar, reference.sugar, "g", true),
        ];

        let micros = totals
            .micros
            .labelled()
            .into_iter()
            .map(|(label, value)| NutrientProgress {
                label,
                consumed: value,
                target: 100.0,
                unit: "%",
                percent: cap(value),
                // Micros are graded on the unrounded value.
                band: band(value.min(f64::from(PROGRESS_CAP)), false),
            })
            .collect();

        Self { macros, micros }
    }
}

fn against(
    label: &'static str,
    consumed: f64,
    target: f64,
    unit: &'static str,
    reverse: bool,
) -> NutrientProgress {
    let percent = cap(consumed / target * 100.0);
    NutrientProgress {
        label,
        consumed,
        target,
        unit,
        percent,
        band: band(f64::from(percent), reverse),
    }
}

fn cap(percent: f64) -> u32 {
    (percent.round().max(0.0) as u32).min(PROGRESS_CAP)
}

/// `reverse` grades lower-is-better nutrients such as sugar.
pub fn band(percent: f64, reverse: bool) -> Band {
    if reverse {
        if percent > REVERSE_BAND_LOW_ABOVE {
            Band::Low
        } else if percent > REVERSE_BAND_FAIR_ABOVE {
            Band::Fair
        } else {
            Band::Good
        }
    } else if percent < BAND_LOW_BELOW {
        Band::Low
    } else if percent < BAND_FAIR_BELOW {
        Band::Fair
    } else {
        Band::Good
    }
}
