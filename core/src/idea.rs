//! Parsed-idea estimators — deterministic derivations over the fixed
//! JSON shape the idea-parsing collaborator returns.
//!
//! The natural-language parsing itself is external; this module only
//! consumes the structured result. Every field is a closed enum, so a
//! collaborator emitting an undocumented value fails at deserialization
//! instead of leaking into the scoring math.

use crate::category::CategoryId;
use crate::types::{CashRange, CompetitionDensity, Difficulty, Staffing};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PricingLevel {
    Affordable,
    MidRange,
    Premium,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpaceSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InventoryLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TechLevel {
    Basic,
    Moderate,
    Advanced,
}

/// The idea-parsing collaborator's fixed output shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedIdea {
    pub category: String,
    pub niche: String,
    pub pricing_level: PricingLevel,
    pub target_audience: Vec<String>,
    pub capital_intensity: Difficulty,
    pub operational_complexity: Difficulty,
    pub keywords: Vec<String>,
    pub unique_selling_points: Vec<String>,
    pub required_space: SpaceSize,
    pub staffing_needs: Staffing,
    pub inventory_needs: InventoryLevel,
    pub technology_requirements: TechLevel,
}

/// Full deterministic estimate derived from one parsed idea.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdeaEstimate {
    pub category_difficulty: Difficulty,
    pub estimated_capital: CashRange,
    pub demand_estimate: f64,
    pub competition_estimate: CompetitionDensity,
}

/// Overall difficulty from operational complexity and capital
/// intensity; the harsher of the two dominates.
pub fn category_difficulty_for(idea: &ParsedIdea) -> Difficulty {
    if idea.operational_complexity == Difficulty::VeryHigh {
        Difficulty::VeryHigh
    } else if idea.operational_complexity == Difficulty::High {
        Difficulty::High
    } else if idea.capital_intensity == Difficulty::VeryHigh {
        Difficulty::VeryHigh
    } else if idea.capital_intensity == Difficulty::High {
        Difficulty::High
    } else if idea.operational_complexity == Difficulty::Medium {
        Difficulty::Medium
    } else {
        Difficulty::Low
    }
}

/// Capital band from intensity, space and inventory multipliers.
pub fn estimate_capital(idea: &ParsedIdea) -> CashRange {
    let mut min: f64 = 300_000.0;
    let mut max: f64 = 1_000_000.0;

    match idea.capital_intensity {
        Difficulty::VeryHigh => {
            min *= 5.0;
            max *= 8.0;
        }
        Difficulty::High => {
            min *= 3.0;
            max *= 5.0;
        }
        Difficulty::Medium => {
            min *= 1.5;
            max *= 2.5;
        }
        Difficulty::Low => {
            min *= 0.5;
        }
    }

    match idea.required_space {
        SpaceSize::Large => {
            min *= 1.5;
            max *= 2.0;
        }
        SpaceSize::Small => {
            min *= 0.7;
            max *= 0.8;
        }
        SpaceSize::Medium => {}
    }

    if idea.inventory_needs == InventoryLevel::High {
        min *= 1.3;
        max *= 1.5;
    }

    CashRange::new(min.round() as i64, max.round() as i64)
}

/// Demand estimate on the 0-100 index, clamped into [20, 95].
pub fn estimate_demand(idea: &ParsedIdea) -> f64 {
    let mut demand = 50.0;

    if matches!(
        CategoryId::parse(&idea.category),
        Some(
            CategoryId::Cafe
                | CategoryId::Restaurant
                | CategoryId::GroceryStore
                | CategoryId::Pharmacy
        )
    ) {
        demand += 20.0;
    }

    match idea.pricing_level {
        PricingLevel::Affordable => demand += 15.0,
        PricingLevel::Premium => demand -= 5.0,
        PricingLevel::MidRange => {}
    }

    if idea.target_audience.len() >= 3 {
        demand += 10.0;
    }

    demand += idea.unique_selling_points.len() as f64 * 5.0;

    match idea.technology_requirements {
        TechLevel::Basic => demand += 10.0,
        TechLevel::Advanced => demand -= 5.0,
        TechLevel::Moderate => {}
    }

    demand.clamp(20.0, 95.0)
}

/// Competition estimate: saturated venue kinds run hot unless the idea
/// differentiates; very demanding ideas deter entrants.
pub fn estimate_competition(idea: &ParsedIdea) -> CompetitionDensity {
    let saturated = matches!(
        CategoryId::parse(&idea.category),
        Some(
            CategoryId::Cafe | CategoryId::Restaurant | CategoryId::Salon | CategoryId::Retail
        )
    );
    if saturated {
        return if idea.unique_selling_points.len() >= 2 {
            CompetitionDensity::Balanced
        } else {
            CompetitionDensity::High
        };
    }

    if idea.operational_complexity == Difficulty::VeryHigh
        || idea.capital_intensity == Difficulty::VeryHigh
    {
        return CompetitionDensity::Low;
    }

    CompetitionDensity::Balanced
}

/// All estimators in one pass.
pub fn estimate(idea: &ParsedIdea) -> IdeaEstimate {
    IdeaEstimate {
        category_difficulty: category_difficulty_for(idea),
        estimated_capital: estimate_capital(idea),
        demand_estimate: estimate_demand(idea),
        competition_estimate: estimate_competition(idea),
    }
}
