//! Metric normalizers — pure total functions mapping raw or categorical
//! inputs onto comparable 0-100 scores.
//!
//! Every function here is stateless, defined for all inputs, and returns
//! a value in [0, 100]. Categorical inputs are closed enums, so there is
//! no out-of-enum case to fail on; numeric inputs clamp at the band edges.

use crate::types::{CompetitionDensity, Difficulty};

/// Reference ceiling for setup-cost normalization, in currency units.
/// A setup cost at or above this scores 0 on capital favorability.
pub const CAPITAL_REFERENCE_CEILING: f64 = 10_000_000.0;

/// Model horizon for break-even normalization, in months. Also the
/// sentinel value [`crate::finance::FinancialProjection::break_even_months`]
/// is capped at when a projection never turns profitable.
pub const BREAK_EVEN_HORIZON_MONTHS: f64 = 36.0;

/// How favorable the competitive landscape is. Fixed bands, no partial
/// credit between them.
pub fn competition_favorability(density: CompetitionDensity) -> f64 {
    match density {
        CompetitionDensity::Low => 90.0,
        CompetitionDensity::Balanced => 70.0,
        CompetitionDensity::High => 40.0,
        CompetitionDensity::Oversaturated => 20.0,
    }
}

/// How favorable a category's operational difficulty is. This is the
/// decision-matrix criterion; the category ease score used by the
/// composite score is the separate mapping in
/// [`crate::category::ease_score_for_difficulty`].
pub fn difficulty_favorability(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Low => 90.0,
        Difficulty::Medium => 70.0,
        Difficulty::High => 40.0,
        Difficulty::VeryHigh => 20.0,
    }
}

/// Growth ratio (e.g. 1.15 = +15% annually) onto 0-100.
pub fn growth_score(forecast_growth: f64) -> f64 {
    ((forecast_growth - 1.0) * 200.0).clamp(0.0, 100.0)
}

/// Faster break-even scores higher. 36 months (the unprofitable sentinel)
/// scores 0.
pub fn break_even_speed(months: u32) -> f64 {
    (100.0 - (months as f64 / BREAK_EVEN_HORIZON_MONTHS) * 100.0).max(0.0)
}

/// Lower capital requirement scores higher, measured against
/// [`CAPITAL_REFERENCE_CEILING`].
pub fn capital_burden(setup_cost_max: i64) -> f64 {
    (100.0 - (setup_cost_max as f64 / CAPITAL_REFERENCE_CEILING) * 100.0).max(0.0)
}
