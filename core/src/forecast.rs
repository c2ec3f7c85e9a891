//! Forecast engine — projects demand, competition and the composite
//! score 6 and 12 months out.
//!
//! Demand grows at the category's annual rate; competition follows at
//! a discount (entrants lag demand). Future scores use a reduced
//! four-component formula since category ease and strategic opportunity
//! are not re-estimated forward.

use crate::bizscore::DENSITY_REFERENCE_PER_KM2;
use crate::category::{self, CategoryId};
use crate::market::MarketSignal;
use crate::types::TrendDirection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Forecast {
    pub demand_index_6m: f64,
    pub demand_index_12m: f64,
    pub competition_index_6m: f64,
    pub competition_index_12m: f64,
    pub biz_score_6m: f64,
    pub biz_score_12m: f64,
    /// Annual growth rate used, as a fraction.
    pub growth_rate: f64,
    pub trend_direction: TrendDirection,
}

pub fn generate_forecast(
    market: &MarketSignal,
    category: Option<CategoryId>,
    current_biz_score: f64,
) -> Forecast {
    let rate = category::annual_growth_rate(category);

    let growth_6m = 1.0 + rate * 0.5;
    let growth_12m = 1.0 + rate;
    // Competition typically grows slower than demand.
    let competition_growth_6m = 1.0 + rate * 0.3;
    let competition_growth_12m = 1.0 + rate * 0.6;

    let demand_index_6m = (market.demand_index * growth_6m).round().min(100.0);
    let demand_index_12m = (market.demand_index * growth_12m).round().min(100.0);
    let competition_index_6m = (market.competition_index * competition_growth_6m)
        .round()
        .min(100.0);
    let competition_index_12m = (market.competition_index * competition_growth_12m)
        .round()
        .min(100.0);

    let biz_score_6m = future_biz_score(
        demand_index_6m,
        competition_index_6m,
        market.population_density,
        rate,
    );
    let biz_score_12m = future_biz_score(
        demand_index_12m,
        competition_index_12m,
        market.population_density,
        rate,
    );

    let score_diff = biz_score_12m - current_biz_score;
    let trend_direction = if score_diff > 5.0 {
        TrendDirection::Growing
    } else if score_diff < -5.0 {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    Forecast {
        demand_index_6m,
        demand_index_12m,
        competition_index_6m,
        competition_index_12m,
        biz_score_6m,
        biz_score_12m,
        growth_rate: rate,
        trend_direction,
    }
}

fn future_biz_score(demand: f64, competition: f64, population_density: f64, rate: f64) -> f64 {
    let normalized_density = ((population_density / DENSITY_REFERENCE_PER_KM2) * 100.0).min(100.0);
    let competition_penalty = 100.0 - competition * 0.1;

    (0.4 * demand + 0.2 * rate * 100.0 + 0.2 * normalized_density + 0.2 * competition_penalty)
        .clamp(0.0, 100.0)
        .round()
}
