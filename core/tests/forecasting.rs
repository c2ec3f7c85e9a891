//! Forecast engine tests.

use bizradar_core::category::CategoryId;
use bizradar_core::forecast::generate_forecast;
use bizradar_core::market::MarketSignal;
use bizradar_core::types::{CompetitionDensity, TrendDirection};

fn market(demand: f64, competition_index: f64) -> MarketSignal {
    MarketSignal {
        demand_index: demand,
        competition_density: CompetitionDensity::Balanced,
        competition_index,
        competition_count: 100,
        population_density: 8000.0,
        avg_income: 5.0,
        internet_penetration: 70.0,
        literacy_rate: 85.0,
    }
}

/// Demand grows at the category rate; competition follows at a
/// discount.
#[test]
fn projections_use_category_rate() {
    let forecast = generate_forecast(&market(60.0, 50.0), CategoryId::parse("technology"), 60.0);
    assert_eq!(forecast.growth_rate, 0.25);
    // 60 x (1 + 0.25 * 0.5) and 60 x 1.25
    assert_eq!(forecast.demand_index_6m, 68.0);
    assert_eq!(forecast.demand_index_12m, 75.0);
    // 50 x (1 + 0.25 * 0.3) and 50 x (1 + 0.25 * 0.6)
    assert_eq!(forecast.competition_index_6m, 54.0);
    assert_eq!(forecast.competition_index_12m, 58.0);
}

/// Projections saturate at 100.
#[test]
fn projections_cap_at_100() {
    let forecast = generate_forecast(&market(95.0, 98.0), CategoryId::parse("technology"), 80.0);
    assert_eq!(forecast.demand_index_12m, 100.0);
    assert!(forecast.competition_index_12m <= 100.0);
    assert!((0.0..=100.0).contains(&forecast.biz_score_6m));
    assert!((0.0..=100.0).contains(&forecast.biz_score_12m));
}

/// Trend direction reflects the 12-month score delta at +/-5 points.
#[test]
fn trend_direction_bands() {
    let growing = generate_forecast(&market(70.0, 40.0), CategoryId::parse("technology"), 40.0);
    assert_eq!(growing.trend_direction, TrendDirection::Growing);

    let declining = generate_forecast(&market(20.0, 90.0), CategoryId::parse("retail"), 95.0);
    assert_eq!(declining.trend_direction, TrendDirection::Declining);

    let stable_score = generate_forecast(&market(70.0, 40.0), CategoryId::parse("technology"), 40.0);
    let stable = generate_forecast(
        &market(70.0, 40.0),
        CategoryId::parse("technology"),
        stable_score.biz_score_12m,
    );
    assert_eq!(stable.trend_direction, TrendDirection::Stable);
}

/// Unknown categories forecast on the default 12% rate.
#[test]
fn unknown_category_default_rate() {
    let forecast = generate_forecast(&market(60.0, 50.0), None, 60.0);
    assert_eq!(forecast.growth_rate, 0.12);
}
