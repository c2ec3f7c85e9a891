//! End-to-end pipeline and determinism tests.

use bizradar_core::market::MarketSignal;
use bizradar_core::matrix::rank;
use bizradar_core::report::{analyze, analyze_forecasted, summary, ReportIdentity};
use bizradar_core::types::{
    CompetitionDensity, OpportunityType, RecommendationType, TrendDirection,
};
use chrono::{TimeZone, Utc};

fn identity(id: &str) -> ReportIdentity {
    ReportIdentity::fixed(id, Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
}

fn cafe_market() -> MarketSignal {
    MarketSignal {
        demand_index: 75.0,
        competition_density: CompetitionDensity::Balanced,
        competition_index: 50.0,
        competition_count: 140,
        population_density: 6000.0,
        avg_income: 6.2,
        internet_penetration: 82.0,
        literacy_rate: 89.0,
    }
}

/// The calibrated Cafe scenario: a solid mid-band opportunity that is
/// worth starting carefully, and nowhere near the avoid zone.
#[test]
fn cafe_scenario_end_to_end() {
    let (report, breakdown) = analyze(
        identity("cafe-e2e"),
        "Indiranagar, Bangalore",
        "Cafe",
        cafe_market(),
        Some(1.15),
    );

    assert!(
        (60.0..=79.0).contains(&breakdown.overall),
        "overall {} should land in the 60s-70s band",
        breakdown.overall
    );
    assert_ne!(breakdown.opportunity_type, OpportunityType::AvoidZone);
    assert!(
        matches!(
            report.recommendation.recommendation,
            RecommendationType::StartNow | RecommendationType::StartCaution
        ),
        "expected start-caution or better, got {:?}",
        report.recommendation.recommendation
    );

    assert_eq!(report.biz_score_today, breakdown.overall);
    assert!(report.biz_score_12m > report.biz_score_today);
    assert_eq!(report.trend_direction, TrendDirection::Growing);
    assert_eq!(report.forecast_growth, 1.15);

    // SWOT non-emptiness holds through the full pipeline.
    assert!(!report.swot.strengths.is_empty());
    assert!(!report.swot.weaknesses.is_empty());
    assert!(!report.swot.opportunities.is_empty());
    assert!(!report.swot.threats.is_empty());

    assert!(report.recommendation.confidence <= 95.0);
}

/// Without an explicit forecast, growth derives from today's score.
#[test]
fn derived_forecast_growth() {
    let (report, breakdown) = analyze(
        identity("derived"),
        "Indiranagar, Bangalore",
        "Cafe",
        cafe_market(),
        None,
    );
    // Score-derived tiers: >=70 -> 1.2, >=50 -> 1.1, else 1.05.
    let expected = if breakdown.overall >= 70.0 {
        1.2
    } else if breakdown.overall >= 50.0 {
        1.1
    } else {
        1.05
    };
    assert_eq!(report.forecast_growth, expected);
    assert_eq!(
        report.biz_score_12m,
        (breakdown.overall * expected).round().min(100.0)
    );
}

/// The forecast-engine path projects 6/12-month scores forward and
/// carries the category's annual rate as growth.
#[test]
fn forecasted_analysis() {
    let (report, breakdown) = analyze_forecasted(
        identity("forecasted"),
        "Indiranagar, Bangalore",
        "food-beverage",
        cafe_market(),
    );
    // food-beverage grows at 15%/year
    assert_eq!(report.forecast_growth, 1.15);
    assert_eq!(report.biz_score_today, breakdown.overall);
    assert!((0.0..=100.0).contains(&report.biz_score_6m));
    assert!((0.0..=100.0).contains(&report.biz_score_12m));
    assert!(!report.swot.threats.is_empty());
}

/// Identical inputs produce bit-identical reports, rankings included.
#[test]
fn pipeline_is_deterministic() {
    let run = || {
        let (a, _) = analyze(
            identity("det-a"),
            "Indiranagar",
            "Cafe",
            cafe_market(),
            Some(1.15),
        );
        let (b, _) = analyze(
            identity("det-b"),
            "Whitefield",
            "Tutoring Center",
            MarketSignal {
                demand_index: 62.0,
                competition_density: CompetitionDensity::Low,
                competition_index: 25.0,
                competition_count: 18,
                population_density: 4200.0,
                avg_income: 5.1,
                internet_penetration: 78.0,
                literacy_rate: 91.0,
            },
            Some(1.2),
        );
        let ranking = rank(&[a.clone(), b.clone()]).unwrap();
        (a, b, ranking)
    };

    let (a1, b1, rank1) = run();
    let (a2, b2, rank2) = run();

    assert_eq!(
        serde_json::to_string(&a1).unwrap(),
        serde_json::to_string(&a2).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&b1).unwrap(),
        serde_json::to_string(&b2).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&rank1).unwrap(),
        serde_json::to_string(&rank2).unwrap()
    );
}

/// Out-of-domain market fields are coerced, not rejected.
#[test]
fn sanitization_clamps_inputs() {
    let (report, breakdown) = analyze(
        identity("dirty"),
        "Nowhere",
        "Cafe",
        MarketSignal {
            demand_index: 180.0,
            competition_density: CompetitionDensity::Balanced,
            competition_index: -20.0,
            competition_count: 0,
            population_density: -5.0,
            avg_income: -1.0,
            internet_penetration: 140.0,
            literacy_rate: 101.0,
        },
        Some(1.1),
    );
    assert_eq!(report.market.demand_index, 100.0);
    assert_eq!(report.market.competition_index, 0.0);
    assert_eq!(report.market.population_density, 0.0);
    assert!((0.0..=100.0).contains(&breakdown.overall));
}

/// The plain-text summary carries the headline fields.
#[test]
fn summary_contains_headlines() {
    let (report, _) = analyze(
        identity("summary"),
        "Indiranagar, Bangalore",
        "Cafe",
        cafe_market(),
        Some(1.15),
    );
    let text = summary(&report);
    assert!(text.contains("Location: Indiranagar, Bangalore"));
    assert!(text.contains("Category: Cafe"));
    assert!(text.contains("BizScore:"));
    assert!(text.contains("Recommendation:"));
    assert!(text.contains("Break-even: 36 months"));
    assert!(text.contains("Action Steps:"));
}
