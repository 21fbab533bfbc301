// ─────────────────────────────────────────────────────────────────────────────
// Recommendation thresholds (percent of reference, strict comparisons)
// ─────────────────────────────────────────────────────────────────────────────

/// Protein below this percent is deficient.
pub const PROTEIN_DEFICIENT_BELOW: f64 = 80.0;

/// Protein above this percent is excess.
pub const PROTEIN_EXCESS_ABOVE: f64 = 150.0;

/// Fiber below this percent is deficient.
pub const FIBER_DEFICIENT_BELOW: f64 = 80.0;

/// Vitamin C below this percent is deficient.
pub const VITAMIN_C_DEFICIENT_BELOW: f64 = 80.0;

/// Vitamin D below this percent is deficient.
pub const VITAMIN_D_DEFICIENT_BELOW: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// Progress bands
// ─────────────────────────────────────────────────────────────────────────────

/// Display percent is capped here.
pub const PROGRESS_CAP: u32 = 100;

/// Higher-is-better nutrients: below this is Low.
pub const BAND_LOW_BELOW: f64 = 50.0;

/// Higher-is-better nutrients: below this is Fair.
pub const BAND_FAIR_BELOW: f64 = 80.0;

/// Lower-is-better nutrients: above this is Low.
pub const REVERSE_BAND_LOW_ABOVE: f64 = 100.0;

/// Lower-is-better nutrients: above this is Fair.
pub const REVERSE_BAND_FAIR_ABOVE: f64 = 80.0;

// ─────────────────────────────────────────────────────────────────────────────
// Food name suggestions
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler similarity for a fuzzy match.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates offered.
pub const MAX_SUGGESTIONS: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Advisory text
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_DEFICIENT_ADVICE: &[&str] = &[
    "Add more lean meats like chicken or turkey",
    "Consider plant-based proteins like lentils or beans",
    "Greek yogurt is a great high-protein snack",
];

pub const PROTEIN_EXCESS_ADVICE: &[&str] = &[
    "Consider reducing portion sizes of high-protein foods",
    "Balance your diet with more fruits and vegetables",
    "Spread protein intake throughout the day",
];

pub const PROTEIN_ADEQUATE_ADVICE: &[&str] = &[
    "Maintaining good protein intake",
    "Continue with balanced portions",
];

pub const FIBER_DEFICIENT_ADVICE: &[&str] = &[
    "Add more whole grains to your diet",
    "Increase fruit and vegetable consumption",
    "Consider beans and legumes for fiber boost",
];

pub const FIBER_ADEQUATE_ADVICE: &[&str] = &[
    "Good fiber intake",
    "Continue eating plenty of fruits and vegetables",
];

pub const VITAMIN_C_DEFICIENT_ADVICE: &[&str] = &[
    "Add more citrus fruits like oranges and grapefruits",
    "Bell peppers are high in vitamin C",
    "Consider strawberries or kiwi as snacks",
];

pub const VITAMIN_C_ADEQUATE_ADVICE: &[&str] = &[
    "Good vitamin C levels",
    "Continue your current fruit and vegetable intake",
];

pub const VITAMIN_D_DEFICIENT_ADVICE: &[&str] = &[
    "Include more fatty fish like salmon or mackerel",
    "Consider vitamin D fortified foods",
    "Moderate sun exposure can help vitamin D production",
];

pub const VITAMIN_D_ADEQUATE_ADVICE: &[&str] = &[
    "Good vitamin D levels",
    "Continue including vitamin D rich foods in your diet",
];
