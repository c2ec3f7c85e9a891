//! Metric normalizer tests — every normalizer is total and lands in [0, 100].

use bizradar_core::normalize::{
    break_even_speed, capital_burden, competition_favorability, difficulty_favorability,
    growth_score, CAPITAL_REFERENCE_CEILING,
};
use bizradar_core::types::{CompetitionDensity, Difficulty};

/// The competition favorability map is exact: no other values exist.
#[test]
fn competition_favorability_exact_map() {
    assert_eq!(competition_favorability(CompetitionDensity::Low), 90.0);
    assert_eq!(competition_favorability(CompetitionDensity::Balanced), 70.0);
    assert_eq!(competition_favorability(CompetitionDensity::High), 40.0);
    assert_eq!(
        competition_favorability(CompetitionDensity::Oversaturated),
        20.0
    );
}

/// Difficulty favorability bands for the decision-matrix criterion.
#[test]
fn difficulty_favorability_exact_map() {
    assert_eq!(difficulty_favorability(Difficulty::Low), 90.0);
    assert_eq!(difficulty_favorability(Difficulty::Medium), 70.0);
    assert_eq!(difficulty_favorability(Difficulty::High), 40.0);
    assert_eq!(difficulty_favorability(Difficulty::VeryHigh), 20.0);
}

/// Growth score is (ratio - 1) * 200, clamped into [0, 100].
#[test]
fn growth_score_bands_and_clamps() {
    assert_eq!(growth_score(1.15), 30.0);
    assert_eq!(growth_score(1.5), 100.0);
    assert_eq!(growth_score(2.0), 100.0, "cap at 100");
    assert_eq!(growth_score(0.8), 0.0, "shrinking markets floor at 0");
    assert_eq!(growth_score(1.0), 0.0);
}

/// Break-even speed: instant is 100, the 36-month sentinel is 0.
#[test]
fn break_even_speed_bounds() {
    assert_eq!(break_even_speed(0), 100.0);
    assert_eq!(break_even_speed(18), 50.0);
    assert_eq!(break_even_speed(36), 0.0);
    assert_eq!(break_even_speed(48), 0.0, "beyond horizon floors at 0");
}

/// Capital burden measured against the documented reference ceiling.
#[test]
fn capital_burden_against_reference_ceiling() {
    assert_eq!(capital_burden(0), 100.0);
    assert_eq!(capital_burden(2_500_000), 75.0);
    assert_eq!(capital_burden(CAPITAL_REFERENCE_CEILING as i64), 0.0);
    assert_eq!(
        capital_burden(20_000_000),
        0.0,
        "costs above the ceiling floor at 0"
    );
}

/// Every normalizer output stays in [0, 100] across a wide input sweep.
#[test]
fn normalizers_stay_in_range() {
    for months in 0..=120 {
        let v = break_even_speed(months);
        assert!((0.0..=100.0).contains(&v), "break_even_speed({months}) = {v}");
    }
    for cost in (0..=30_000_000).step_by(500_000) {
        let v = capital_burden(cost);
        assert!((0.0..=100.0).contains(&v), "capital_burden({cost}) = {v}");
    }
    for growth in [0.0, 0.5, 0.95, 1.0, 1.1, 1.3, 2.0, 5.0] {
        let v = growth_score(growth);
        assert!((0.0..=100.0).contains(&v), "growth_score({growth}) = {v}");
    }
}
