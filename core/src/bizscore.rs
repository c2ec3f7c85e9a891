//! Composite opportunity scoring — the BizScore.
//!
//! Combines demand, growth, population density, competition penalty,
//! category ease and strategic opportunity into one weighted 0-100
//! score, classifies the opportunity type, and lists the impact
//! factors behind the number.
//!
//! Weights live in [`BizScoreWeights`] rather than inline literals so
//! tests can assert the sum and exercise alternative weightings.

use crate::category::{self, CategoryId};
use crate::market::MarketSignal;
use crate::types::{Impact, OpportunityType};
use serde::{Deserialize, Serialize};

/// Population density at or above this saturates the location sub-score.
pub const DENSITY_REFERENCE_PER_KM2: f64 = 20_000.0;

/// Component weights of the composite score. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BizScoreWeights {
    pub demand: f64,
    pub growth: f64,
    pub density: f64,
    pub competition: f64,
    pub category_ease: f64,
    pub strategic: f64,
}

impl Default for BizScoreWeights {
    fn default() -> Self {
        Self {
            demand: 0.35,
            growth: 0.20,
            density: 0.15,
            competition: 0.10,
            category_ease: 0.10,
            strategic: 0.10,
        }
    }
}

impl BizScoreWeights {
    pub fn sum(&self) -> f64 {
        self.demand
            + self.growth
            + self.density
            + self.competition
            + self.category_ease
            + self.strategic
    }
}

/// One named driver behind the composite score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImpactFactor {
    pub name: String,
    pub impact: Impact,
    pub description: String,
}

/// Verbal rating band for a composite score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Excellent,
    Good,
    Moderate,
    Challenging,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BizScoreBreakdown {
    /// Weighted composite, clamped into [0, 100].
    pub overall: f64,
    pub demand_score: f64,
    pub competition_score: f64,
    pub location_score: f64,
    pub economic_score: f64,
    pub category_ease_score: f64,
    pub strategic_opportunity_score: f64,
    pub opportunity_type: OpportunityType,
    pub factors: Vec<ImpactFactor>,
}

/// Compute the composite score for one market/category pairing.
///
/// `competition_density_score` is the 0-100 saturation index (higher =
/// more saturated). `forecast_growth` is the annual growth ratio; when
/// absent the category's default annual rate stands in.
pub fn score(
    market: &MarketSignal,
    category: Option<CategoryId>,
    forecast_growth: Option<f64>,
    competition_density_score: f64,
    category_ease_score: f64,
) -> BizScoreBreakdown {
    score_with_weights(
        market,
        category,
        forecast_growth,
        competition_density_score,
        category_ease_score,
        &BizScoreWeights::default(),
    )
}

pub fn score_with_weights(
    market: &MarketSignal,
    category: Option<CategoryId>,
    forecast_growth: Option<f64>,
    competition_density_score: f64,
    category_ease_score: f64,
    weights: &BizScoreWeights,
) -> BizScoreBreakdown {
    let density_score = competition_density_score.clamp(0.0, 100.0);

    let normalized_density =
        ((market.population_density / DENSITY_REFERENCE_PER_KM2) * 100.0).min(100.0);

    let growth_input = forecast_growth.unwrap_or_else(|| category::annual_growth_rate(category));
    let growth_percentage = growth_input * 100.0;

    // Inverse of saturation: low density leaves room to enter.
    let competition_penalty = (100.0 - density_score).max(0.0);

    // Underserved demand: demand left over after competition eats its share.
    let strategic_opportunity = (market.demand_index - density_score).max(0.0);

    let raw = market.demand_index * weights.demand
        + growth_percentage * weights.growth
        + normalized_density * weights.density
        + competition_penalty * weights.competition
        + category_ease_score * weights.category_ease
        + strategic_opportunity * weights.strategic;
    let overall = raw.clamp(0.0, 100.0).round();

    let economic_score = ((market.avg_income / 10.0) * 33.0
        + market.internet_penetration * 0.33
        + market.literacy_rate * 0.33)
        .clamp(0.0, 100.0)
        .round();

    let opportunity_type =
        classify_opportunity(overall, density_score, market.demand_index);

    let factors = impact_factors(
        market,
        density_score,
        category_ease_score,
        strategic_opportunity,
    );

    log::debug!(
        "bizscore: category={category:?} overall={overall:.0} type={opportunity_type}"
    );

    BizScoreBreakdown {
        overall,
        demand_score: market.demand_index.round(),
        competition_score: competition_penalty.round(),
        location_score: normalized_density.round(),
        economic_score,
        category_ease_score: category_ease_score.round(),
        strategic_opportunity_score: strategic_opportunity.round(),
        opportunity_type,
        factors,
    }
}

/// Ordered classification rules, evaluated top to bottom; first match
/// wins. A market qualifying as both Blue Ocean and Competitive-but-
/// Doable is Blue Ocean.
pub fn classify_opportunity(
    overall: f64,
    competition_density_score: f64,
    demand_index: f64,
) -> OpportunityType {
    type Rule = (fn(f64, f64, f64) -> bool, OpportunityType);
    let rules: [Rule; 3] = [
        (
            |overall, density, demand| demand > 65.0 && density < 40.0 && overall > 70.0,
            OpportunityType::BlueOcean,
        ),
        (
            |overall, density, demand| overall < 45.0 || (density > 75.0 && demand < 60.0),
            OpportunityType::AvoidZone,
        ),
        (
            |overall, density, _| density > 60.0 && overall >= 55.0,
            OpportunityType::CompetitiveButDoable,
        ),
    ];

    rules
        .iter()
        .find(|(matches, _)| matches(overall, competition_density_score, demand_index))
        .map(|(_, ty)| *ty)
        .unwrap_or(OpportunityType::ModerateOpportunity)
}

/// Verbal rating from the composite score.
pub fn rating_for(overall: f64) -> ScoreRating {
    if overall >= 80.0 {
        ScoreRating::Excellent
    } else if overall >= 65.0 {
        ScoreRating::Good
    } else if overall >= 50.0 {
        ScoreRating::Moderate
    } else {
        ScoreRating::Challenging
    }
}

fn impact_factors(
    market: &MarketSignal,
    competition_density_score: f64,
    category_ease_score: f64,
    strategic_opportunity: f64,
) -> Vec<ImpactFactor> {
    let mut factors = Vec::new();
    let mut push = |name: &str, impact: Impact, description: &str| {
        factors.push(ImpactFactor {
            name: name.to_string(),
            impact,
            description: description.to_string(),
        });
    };

    if market.demand_index > 70.0 {
        push(
            "High Market Demand",
            Impact::Positive,
            "Strong consumer interest in this business category",
        );
    } else if market.demand_index < 40.0 {
        push(
            "Low Market Demand",
            Impact::Negative,
            "Limited consumer interest may affect revenue",
        );
    }

    if competition_density_score < 30.0 {
        push(
            "Low Competition",
            Impact::Positive,
            "Excellent market entry opportunity with minimal competitive pressure",
        );
    } else if competition_density_score > 70.0 {
        push(
            "High Competition",
            Impact::Negative,
            "Saturated market requires strong differentiation strategy",
        );
    }

    if strategic_opportunity > 40.0 {
        push(
            "Strategic Opportunity",
            Impact::Positive,
            "Demand significantly exceeds competition - ideal market conditions",
        );
    }

    if category_ease_score > 70.0 {
        push(
            "Business-Friendly Category",
            Impact::Positive,
            "Category has lower barriers to entry and operational complexity",
        );
    } else if category_ease_score < 50.0 {
        push(
            "Complex Category",
            Impact::Negative,
            "High barriers to entry and operational challenges",
        );
    }

    if market.population_density > 10_000.0 {
        push(
            "High Population Density",
            Impact::Positive,
            "Dense population provides larger customer base",
        );
    }

    if market.avg_income > 6.0 {
        push(
            "High Income Area",
            Impact::Positive,
            "Above-average income supports premium pricing",
        );
    }

    if market.internet_penetration > 75.0 {
        push(
            "Strong Digital Infrastructure",
            Impact::Positive,
            "High internet penetration enables online channels",
        );
    }

    factors
}
