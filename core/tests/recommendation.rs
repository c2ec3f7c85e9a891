//! Recommendation engine tests.

use bizradar_core::finance::{FinancialProjection, YearProjection};
use bizradar_core::recommend::{recommend, RecommendationInputs};
use bizradar_core::swot::SwotAnalysis;
use bizradar_core::types::{
    CashRange, CompetitionDensity, Difficulty, PercentRange, RecommendationType, RiskLevel,
};

fn swot(strengths: usize, weaknesses: usize, opportunities: usize, threats: usize) -> SwotAnalysis {
    let fill = |n: usize, text: &str| (0..n).map(|i| format!("{text} {i}")).collect();
    SwotAnalysis {
        strengths: fill(strengths.max(1), "strength"),
        weaknesses: fill(weaknesses.max(1), "weakness"),
        opportunities: fill(opportunities.max(1), "opportunity"),
        threats: fill(threats.max(1), "threat"),
    }
}

fn financials(break_even_months: u32, margin_min: f64, margin_max: f64) -> FinancialProjection {
    let year = YearProjection {
        revenue: CashRange::new(600_000, 900_000),
        profit: CashRange::new(100_000, 300_000),
    };
    FinancialProjection {
        setup_cost: CashRange::new(500_000, 1_200_000),
        monthly_operating_cost: CashRange::new(60_000, 120_000),
        expected_monthly_revenue: CashRange::new(150_000, 250_000),
        break_even_months,
        profit_margin: PercentRange {
            min: margin_min,
            max: margin_max,
        },
        year1: year,
        year3: year,
    }
}

/// All five factors maxed out land in the Start Now tier with the
/// 95-point confidence ceiling.
#[test]
fn start_now_tier() {
    let strong_swot = swot(4, 1, 3, 1);
    let strong_financials = financials(10, 18.0, 30.0);
    let rec = recommend(&RecommendationInputs {
        biz_score_today: 85.0,
        biz_score_12m: 97.0,
        competition_density: CompetitionDensity::Low,
        category_difficulty: Difficulty::Medium,
        swot: &strong_swot,
        financials: &strong_financials,
        forecast_growth: 1.3,
    });
    assert_eq!(rec.recommendation, RecommendationType::StartNow);
    assert_eq!(rec.risk_level, RiskLevel::Low);
    assert_eq!(rec.confidence, 95.0, "confidence never exceeds 95");
    assert_eq!(rec.timeframe, "Launch within 2-3 months");
    assert!(rec
        .action_steps
        .iter()
        .any(|s| s.contains("Secure location")));
}

/// A middling market lands in Start with Caution; high competition
/// appends the unique-value-proposition step.
#[test]
fn start_caution_with_high_competition() {
    let balanced_swot = swot(2, 2, 2, 2);
    let fin = financials(15, 12.0, 20.0);
    let rec = recommend(&RecommendationInputs {
        biz_score_today: 70.0,
        biz_score_12m: 75.0,
        competition_density: CompetitionDensity::High,
        category_difficulty: Difficulty::Medium,
        swot: &balanced_swot,
        financials: &fin,
        forecast_growth: 1.1,
    });
    // 20 + 18 + 12 + 10 + 0 = 60
    assert_eq!(rec.recommendation, RecommendationType::StartCaution);
    assert_eq!(rec.risk_level, RiskLevel::Moderate);
    assert!(rec
        .action_steps
        .iter()
        .any(|s| s.contains("unique value proposition")));
}

/// Very difficult categories raise the caution tier's risk level.
#[test]
fn start_caution_very_difficult_risk() {
    let balanced_swot = swot(3, 1, 3, 1);
    let fin = financials(15, 12.0, 20.0);
    let rec = recommend(&RecommendationInputs {
        biz_score_today: 70.0,
        biz_score_12m: 76.0,
        competition_density: CompetitionDensity::Balanced,
        category_difficulty: Difficulty::VeryHigh,
        swot: &balanced_swot,
        financials: &fin,
        forecast_growth: 1.1,
    });
    assert_eq!(rec.recommendation, RecommendationType::StartCaution);
    assert_eq!(rec.risk_level, RiskLevel::High);
    assert!(rec
        .action_steps
        .iter()
        .any(|s| s.contains("expert consultation")));
}

/// Wait & Monitor: positive trajectory appends the re-evaluate step.
#[test]
fn wait_monitor_tier() {
    let fair_swot = swot(2, 2, 2, 2);
    let fin = financials(22, 8.0, 12.0);
    let rec = recommend(&RecommendationInputs {
        biz_score_today: 55.0,
        biz_score_12m: 58.0,
        competition_density: CompetitionDensity::High,
        category_difficulty: Difficulty::Medium,
        swot: &fair_swot,
        financials: &fin,
        forecast_growth: 1.05,
    });
    // 10 + 10 + 12 + 5 + 0 = 37
    assert_eq!(rec.recommendation, RecommendationType::WaitMonitor);
    assert_eq!(rec.risk_level, RiskLevel::High);
    assert!(rec.confidence <= 75.0, "tier ceiling is 75");
    assert!(rec
        .action_steps
        .iter()
        .any(|s| s.contains("Re-evaluate in 6 months")));
}

/// The bottom tier is Avoid, with the remodel step for sentinel
/// break-evens.
#[test]
fn avoid_tier() {
    let bad_swot = swot(1, 4, 1, 4);
    let fin = financials(36, 5.0, 8.0);
    let rec = recommend(&RecommendationInputs {
        biz_score_today: 30.0,
        biz_score_12m: 22.0,
        competition_density: CompetitionDensity::Oversaturated,
        category_difficulty: Difficulty::VeryHigh,
        swot: &bad_swot,
        financials: &fin,
        forecast_growth: 0.9,
    });
    assert_eq!(rec.recommendation, RecommendationType::Avoid);
    assert_eq!(rec.risk_level, RiskLevel::VeryHigh);
    assert_eq!(rec.confidence, 90.0);
    assert_eq!(rec.timeframe, "Consider different location or category");
    assert!(rec
        .action_steps
        .iter()
        .any(|s| s.contains("better financial efficiency")));
    assert!(rec
        .reasoning
        .iter()
        .any(|r| r.contains("Highly saturated market")));
}

/// Confidence never exceeds 95 in any tier.
#[test]
fn confidence_ceiling() {
    for (today, future) in [(90.0, 100.0), (70.0, 80.0), (50.0, 55.0), (20.0, 15.0)] {
        let s = swot(3, 1, 3, 1);
        let fin = financials(12, 16.0, 30.0);
        let rec = recommend(&RecommendationInputs {
            biz_score_today: today,
            biz_score_12m: future,
            competition_density: CompetitionDensity::Balanced,
            category_difficulty: Difficulty::Medium,
            swot: &s,
            financials: &fin,
            forecast_growth: 1.1,
        });
        assert!(
            rec.confidence <= 95.0,
            "confidence {} above ceiling",
            rec.confidence
        );
    }
}
