//! SWOT engine — rule-based strengths / weaknesses / opportunities /
//! threats derived from market metrics.
//!
//! Each list is populated by independent threshold checks in declared
//! order. Every list is guaranteed non-empty: a placeholder entry is
//! appended when no rule fires.

use crate::types::{CompetitionDensity, Difficulty, TrendDirection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

impl SwotAnalysis {
    /// Net positive-minus-negative balance, used by the recommendation
    /// engine's SWOT factor.
    pub fn net_balance(&self) -> i64 {
        (self.strengths.len() + self.opportunities.len()) as i64
            - (self.weaknesses.len() + self.threats.len()) as i64
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SwotInputs {
    pub demand_index: f64,
    pub competition_density: CompetitionDensity,
    pub category_difficulty: Difficulty,
    pub forecast_growth: f64,
    pub strategic_opportunity_index: f64,
    pub biz_score_today: f64,
    pub biz_score_12m: f64,
    pub population_density: f64,
}

pub fn generate_swot(inputs: &SwotInputs) -> SwotAnalysis {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut opportunities = Vec::new();
    let mut threats = Vec::new();

    use CompetitionDensity::{Balanced, High, Low, Oversaturated};
    use Difficulty as D;

    // Strengths
    if inputs.demand_index >= 80.0 {
        strengths.push("High market demand with strong customer base".to_string());
    } else if inputs.demand_index >= 60.0 {
        strengths.push("Solid market demand showing consistent interest".to_string());
    }
    if inputs.forecast_growth >= 1.3 {
        strengths.push("Excellent growth trajectory and positive market momentum".to_string());
    } else if inputs.forecast_growth >= 1.15 {
        strengths.push("Healthy growth potential with expanding market".to_string());
    }
    if inputs.population_density >= 5000.0 {
        strengths.push("Dense population providing large customer pool".to_string());
    }
    if matches!(inputs.competition_density, Low | Balanced) {
        strengths.push("Favorable competitive landscape with room for entry".to_string());
    }
    if inputs.strategic_opportunity_index >= 75.0 {
        strengths.push("Strong strategic positioning and market gaps identified".to_string());
    }

    // Weaknesses
    if matches!(inputs.category_difficulty, D::High | D::VeryHigh) {
        weaknesses.push("High operational complexity requiring specialized expertise".to_string());
    } else if inputs.category_difficulty == D::Medium {
        weaknesses.push("Moderate entry barriers and operational requirements".to_string());
    }
    if inputs.demand_index < 50.0 {
        weaknesses.push("Limited market demand may impact revenue potential".to_string());
    }
    if matches!(inputs.competition_density, High | Oversaturated) {
        weaknesses.push("Saturated market with intense competitive pressure".to_string());
    }
    if inputs.forecast_growth < 1.05 {
        weaknesses.push("Stagnant or declining market growth prospects".to_string());
    }
    if inputs.biz_score_today < 60.0 {
        weaknesses.push("Below-average market conditions requiring careful strategy".to_string());
    }

    // Opportunities
    if inputs.forecast_growth >= 1.2 {
        opportunities.push("Capitalize on rapidly expanding market demand".to_string());
    }
    if inputs.competition_density == Low {
        opportunities.push("First-mover advantage in underserved market".to_string());
    }
    if inputs.strategic_opportunity_index >= 70.0 {
        opportunities.push("Niche differentiation strategies available".to_string());
    }
    if inputs.biz_score_12m > inputs.biz_score_today + 5.0 {
        opportunities.push("Strong future outlook with improving conditions".to_string());
    }
    if matches!(inputs.category_difficulty, D::Low | D::Medium) {
        opportunities.push("Accessible entry with manageable operational complexity".to_string());
    }
    if inputs.population_density >= 3000.0 && inputs.demand_index >= 60.0 {
        opportunities.push("Large addressable market with proven demand".to_string());
    }

    // Threats
    if inputs.competition_density == Oversaturated {
        threats.push("Severe market saturation leading to price wars".to_string());
    } else if inputs.competition_density == High {
        threats.push("Aggressive competitors with established market presence".to_string());
    }
    if inputs.forecast_growth < 1.0 {
        threats.push("Market contraction and declining customer base".to_string());
    }
    if inputs.biz_score_12m < inputs.biz_score_today - 5.0 {
        threats.push("Deteriorating market conditions over time".to_string());
    }
    if inputs.category_difficulty == D::VeryHigh {
        threats.push("High failure risk due to operational challenges".to_string());
    }
    if inputs.demand_index < 40.0 {
        threats.push("Insufficient demand may not sustain business operations".to_string());
    }
    if inputs.competition_density != Low && inputs.forecast_growth < 1.1 {
        threats.push("New market entrants may intensify competition".to_string());
    }

    // Minimum one entry per list.
    if strengths.is_empty() {
        strengths.push("Location-specific advantages to be leveraged".to_string());
    }
    if weaknesses.is_empty() {
        weaknesses.push("Standard market entry challenges expected".to_string());
    }
    if opportunities.is_empty() {
        opportunities.push("Potential for strategic positioning exists".to_string());
    }
    if threats.is_empty() {
        threats.push("Monitor market dynamics and competitor activity".to_string());
    }

    SwotAnalysis {
        strengths,
        weaknesses,
        opportunities,
        threats,
    }
}

/// Trend direction from the score delta, shared with the report builder.
pub fn trend_from_scores(today: f64, in_12m: f64) -> TrendDirection {
    let diff = in_12m - today;
    if diff > 5.0 {
        TrendDirection::Growing
    } else if diff < -5.0 {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}
