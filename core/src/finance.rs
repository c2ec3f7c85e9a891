//! Financial projection engine — setup cost, operating cost, revenue,
//! break-even and multi-year projections.
//!
//! Derived deterministically from category + location + demand inputs.
//! Never fails: unknown categories resolve to documented default cost
//! tables, and zero demand yields degenerate near-zero revenue bands
//! instead of an error.

use crate::category::CategoryId;
use crate::types::{CashRange, CompetitionDensity, PercentRange, Viability};
use serde::{Deserialize, Serialize};

/// Currency all cash figures are denominated in.
pub const CURRENCY: &str = "INR";

/// Break-even sentinel: "not profitable within the model horizon".
/// Downstream consumers treat this as a strong negative signal, not as
/// a measured 36-month break-even.
pub const BREAK_EVEN_CAP_MONTHS: u32 = 36;

/// Profit margins are clamped into this band regardless of what the raw
/// revenue/cost arithmetic produces (degenerate ratios included).
pub const MARGIN_FLOOR_PCT: f64 = 5.0;
pub const MARGIN_CEILING_PCT: f64 = 45.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct YearProjection {
    pub revenue: CashRange,
    pub profit: CashRange,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialProjection {
    pub setup_cost: CashRange,
    pub monthly_operating_cost: CashRange,
    pub expected_monthly_revenue: CashRange,
    /// 1..=36; see [`BREAK_EVEN_CAP_MONTHS`].
    pub break_even_months: u32,
    pub profit_margin: PercentRange,
    pub year1: YearProjection,
    pub year3: YearProjection,
}

impl FinancialProjection {
    /// Whether the projection hit the unprofitable sentinel.
    pub fn is_profitable(&self) -> bool {
        self.break_even_months < BREAK_EVEN_CAP_MONTHS
    }

    /// Coarse viability grade for the failure predictor, using the same
    /// break-even/margin bands the recommendation engine scores on.
    pub fn viability(&self) -> Viability {
        if self.break_even_months <= 12 && self.profit_margin.min >= 15.0 {
            Viability::Excellent
        } else if self.break_even_months <= 18 && self.profit_margin.min >= 10.0 {
            Viability::Good
        } else if self.break_even_months <= 24 {
            Viability::Fair
        } else {
            Viability::Poor
        }
    }
}

/// Base setup-cost band for a category, before the location multiplier.
fn base_setup_cost(category: Option<CategoryId>) -> CashRange {
    match category {
        Some(CategoryId::Cafe) => CashRange::new(800_000, 2_000_000),
        Some(CategoryId::Restaurant) => CashRange::new(1_500_000, 5_000_000),
        Some(CategoryId::Gym) => CashRange::new(1_000_000, 3_000_000),
        Some(CategoryId::Salon) => CashRange::new(500_000, 1_500_000),
        Some(CategoryId::GroceryStore) => CashRange::new(1_000_000, 2_500_000),
        Some(CategoryId::Pharmacy) => CashRange::new(800_000, 2_000_000),
        Some(CategoryId::TechSupport) => CashRange::new(300_000, 800_000),
        Some(CategoryId::TutoringCenter) => CashRange::new(400_000, 1_000_000),
        _ => CashRange::new(500_000, 1_500_000),
    }
}

/// Monthly revenue per demand point for a category.
fn revenue_multiplier(category: Option<CategoryId>) -> f64 {
    match category {
        Some(CategoryId::Cafe) => 1200.0,
        Some(CategoryId::Restaurant) => 2000.0,
        Some(CategoryId::Gym) => 1500.0,
        Some(CategoryId::Salon) => 1000.0,
        Some(CategoryId::GroceryStore) => 1800.0,
        Some(CategoryId::Pharmacy) => 1600.0,
        Some(CategoryId::TechSupport) => 800.0,
        Some(CategoryId::TutoringCenter) => 1000.0,
        _ => 1000.0,
    }
}

/// Setup-cost multiplier from population density. Fixed breakpoints.
fn location_multiplier(population_density: f64) -> f64 {
    if population_density >= 5000.0 {
        1.3
    } else if population_density >= 3000.0 {
        1.15
    } else if population_density >= 1000.0 {
        1.0
    } else {
        0.85
    }
}

/// Revenue multiplier from competitor saturation.
fn competition_penalty(density: CompetitionDensity) -> f64 {
    match density {
        CompetitionDensity::Oversaturated => 0.5,
        CompetitionDensity::High => 0.7,
        CompetitionDensity::Balanced => 0.85,
        CompetitionDensity::Low => 1.0,
    }
}

/// Project setup cost, operating cost, revenue, break-even and year-1/3
/// outcomes for one location/category pairing.
pub fn project(
    category: Option<CategoryId>,
    demand_index: f64,
    competition_density: CompetitionDensity,
    population_density: f64,
    forecast_growth: f64,
) -> FinancialProjection {
    let demand_index = demand_index.clamp(0.0, 100.0);
    let base = base_setup_cost(category);
    let loc = location_multiplier(population_density);

    let setup_min = (base.min as f64 * loc).round() as i64;
    let setup_max = (base.max as f64 * loc).round() as i64;

    // Operating costs run 12-16% of setup cost per month.
    let opex_min = (setup_min as f64 * 0.12).round() as i64;
    let opex_max = (setup_max as f64 * 0.16).round() as i64;

    let penalty = competition_penalty(competition_density);
    let per_point = revenue_multiplier(category);
    let revenue_mid = demand_index * per_point * penalty;
    // ±20% spread around the midpoint.
    let revenue_min = (revenue_mid * 0.8).round() as i64;
    let revenue_max = (revenue_mid * 1.2).round() as i64;

    let avg_setup = CashRange::new(setup_min, setup_max).mid();
    let avg_revenue = CashRange::new(revenue_min, revenue_max).mid();
    let avg_opex = CashRange::new(opex_min, opex_max).mid();
    let monthly_profit = avg_revenue - avg_opex;

    let break_even_months = if monthly_profit > 0.0 {
        let months = (avg_setup / monthly_profit).ceil() as u32;
        months.clamp(1, BREAK_EVEN_CAP_MONTHS)
    } else {
        BREAK_EVEN_CAP_MONTHS
    };

    let profit_margin = margin_band(revenue_min, revenue_max, opex_min, opex_max);

    // Year 1: growth applied with a 1.3x realism cap.
    let y1_growth = forecast_growth.min(1.3);
    let y1_cost = avg_opex * 12.0;
    let y1_rev_min = (revenue_min as f64 * 12.0 * y1_growth).round() as i64;
    let y1_rev_max = (revenue_max as f64 * 12.0 * y1_growth).round() as i64;

    // Year 3: compounded growth, operating cost assumed up 15%.
    let y3_growth = forecast_growth.powi(3);
    let y3_cost = y1_cost * 1.15;
    let y3_rev_min = (revenue_min as f64 * 12.0 * y3_growth).round() as i64;
    let y3_rev_max = (revenue_max as f64 * 12.0 * y3_growth).round() as i64;

    let projection = FinancialProjection {
        setup_cost: CashRange::new(setup_min, setup_max),
        monthly_operating_cost: CashRange::new(opex_min, opex_max),
        expected_monthly_revenue: CashRange::new(revenue_min, revenue_max),
        break_even_months,
        profit_margin,
        year1: YearProjection {
            revenue: CashRange::new(y1_rev_min, y1_rev_max),
            profit: CashRange::new(
                (y1_rev_min as f64 - y1_cost).round() as i64,
                (y1_rev_max as f64 - y1_cost).round() as i64,
            ),
        },
        year3: YearProjection {
            revenue: CashRange::new(y3_rev_min, y3_rev_max),
            profit: CashRange::new(
                (y3_rev_min as f64 - y3_cost).round() as i64,
                (y3_rev_max as f64 - y3_cost).round() as i64,
            ),
        },
    };

    if monthly_profit <= 0.0 {
        log::debug!(
            "projection unprofitable: category={category:?} demand={demand_index:.0} \
             avg_revenue={avg_revenue:.0} avg_opex={avg_opex:.0}"
        );
    }

    projection
}

/// Margin band from the revenue/cost extremes. Near-zero revenue makes
/// the raw ratio meaningless; the clamp absorbs it.
fn margin_band(revenue_min: i64, revenue_max: i64, opex_min: i64, opex_max: i64) -> PercentRange {
    let raw_min = if revenue_min > 0 {
        ((revenue_min - opex_max) as f64 / revenue_min as f64 * 100.0).round()
    } else {
        0.0
    };
    let raw_max = if revenue_max > 0 {
        ((revenue_max - opex_min) as f64 / revenue_max as f64 * 100.0).round()
    } else {
        0.0
    };

    let max = raw_max.clamp(MARGIN_FLOOR_PCT, MARGIN_CEILING_PCT);
    let min = raw_min.clamp(MARGIN_FLOOR_PCT, max);
    PercentRange { min, max }
}

/// Human-readable amount in Indian units: Cr (crore), L (lakh), K.
pub fn format_amount(amount: i64) -> String {
    if amount >= 10_000_000 {
        format!("{CURRENCY} {:.2}Cr", amount as f64 / 10_000_000.0)
    } else if amount >= 100_000 {
        format!("{CURRENCY} {:.2}L", amount as f64 / 100_000.0)
    } else if amount >= 1000 {
        format!("{CURRENCY} {:.0}K", amount as f64 / 1000.0)
    } else {
        format!("{CURRENCY} {amount}")
    }
}
