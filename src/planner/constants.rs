// ─────────────────────────────────────────────────────────────────────────────
// Adjustment policy defaults (overridable through AdjustConfig)
// ─────────────────────────────────────────────────────────────────────────────

/// Foods with more protein than this per 100 g are protein-dense.
pub const PROTEIN_DENSE_THRESHOLD: f64 = 15.0;

/// Grams added or removed per move while balancing protein.
pub const PROTEIN_STEP_GRAMS: f64 = 10.0;

/// Grams added per move while topping up calories.
pub const FILLER_STEP_GRAMS: f64 = 10.0;

/// Grams added per move in the final fine fill.
pub const FINE_STEP_GRAMS: f64 = 1.0;

/// Iteration cap for every adjustment phase.
pub const MAX_ITERATIONS: usize = 1000;

/// Category label excluded from the calorie top-up.
pub const PROTEIN_CATEGORY: &str = "protein";

// ─────────────────────────────────────────────────────────────────────────────
// Target derivation
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie deficit (weight loss) or surplus (muscle gain) per day.
pub const GOAL_CALORIE_OFFSET: f64 = 500.0;

/// Protein per kg of body weight when building muscle.
pub const BULK_PROTEIN_PER_KG: f64 = 2.2;

/// Protein per kg of body weight for every other goal.
pub const DEFAULT_PROTEIN_PER_KG: f64 = 1.6;

// ─────────────────────────────────────────────────────────────────────────────
// Lookups
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;
