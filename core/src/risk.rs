//! Risk index engine — four weighted sub-risks and an overall risk
//! level, each independently derived from threshold bands.

use crate::category::CategoryId;
use crate::types::{CompetitionDensity, Difficulty, RiskLevel, Staffing};
use serde::{Deserialize, Serialize};

/// Sub-risk weights. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskWeights {
    pub competition: f64,
    pub financial: f64,
    pub operational: f64,
    pub regulatory: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            competition: 0.30,
            financial: 0.35,
            operational: 0.20,
            regulatory: 0.15,
        }
    }
}

impl RiskWeights {
    pub fn sum(&self) -> f64 {
        self.competition + self.financial + self.operational + self.regulatory
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskBreakdown {
    pub competition_risk: f64,
    pub financial_risk: f64,
    pub operational_risk: f64,
    pub regulatory_risk: f64,
    pub overall_risk: f64,
    pub risk_level: RiskLevel,
    pub critical_factors: Vec<String>,
    pub mitigation_steps: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct RiskInputs {
    pub category: Option<CategoryId>,
    pub competition_density: CompetitionDensity,
    /// Continuous 0-100 saturation index.
    pub competition_index: f64,
    pub category_difficulty: Difficulty,
    pub setup_cost_min: i64,
    pub break_even_months: u32,
    pub profit_margin_min: f64,
    pub staffing: Staffing,
}

fn competition_risk(density: CompetitionDensity, competition_index: f64) -> f64 {
    let base = match density {
        CompetitionDensity::Low => 20.0,
        CompetitionDensity::Balanced => 45.0,
        CompetitionDensity::High => 70.0,
        CompetitionDensity::Oversaturated => 90.0,
    };
    (base * 0.7 + competition_index * 0.3).round().min(100.0)
}

fn financial_risk(setup_cost_min: i64, break_even_months: u32, profit_margin_min: f64) -> f64 {
    let mut risk: f64 = 0.0;

    risk += if setup_cost_min > 2_000_000 {
        35.0
    } else if setup_cost_min > 1_000_000 {
        25.0
    } else if setup_cost_min > 500_000 {
        15.0
    } else {
        5.0
    };

    risk += if break_even_months > 24 {
        35.0
    } else if break_even_months > 18 {
        25.0
    } else if break_even_months > 12 {
        15.0
    } else {
        5.0
    };

    risk += if profit_margin_min < 10.0 {
        30.0
    } else if profit_margin_min < 20.0 {
        20.0
    } else if profit_margin_min < 30.0 {
        10.0
    } else {
        5.0
    };

    risk.min(100.0)
}

fn operational_risk(difficulty: Difficulty, staffing: Staffing) -> f64 {
    let difficulty_risk: f64 = match difficulty {
        Difficulty::Low => 15.0,
        Difficulty::Medium => 35.0,
        Difficulty::High => 60.0,
        Difficulty::VeryHigh => 85.0,
    };
    let staffing_risk = match staffing {
        Staffing::Minimal => 10.0,
        Staffing::Moderate => 25.0,
        Staffing::Extensive => 40.0,
    };
    (difficulty_risk * 0.7 + staffing_risk * 0.3).round()
}

/// Regulatory load per venue kind. Sector-level and unknown categories
/// take the default.
fn regulatory_risk(category: Option<CategoryId>) -> f64 {
    match category {
        Some(CategoryId::Restaurant) => 60.0,
        Some(CategoryId::Cafe) => 45.0,
        Some(CategoryId::Bar) => 75.0,
        Some(CategoryId::Pharmacy) => 70.0,
        Some(CategoryId::Hospital) => 80.0,
        Some(CategoryId::Gym) => 40.0,
        Some(CategoryId::Salon) => 35.0,
        Some(CategoryId::Retail) => 30.0,
        Some(CategoryId::Office) => 25.0,
        _ => 40.0,
    }
}

/// Risk level is a pure function of the overall score via fixed
/// breakpoints.
pub fn level_for(overall_risk: f64) -> RiskLevel {
    if overall_risk >= 75.0 {
        RiskLevel::VeryHigh
    } else if overall_risk >= 60.0 {
        RiskLevel::High
    } else if overall_risk >= 40.0 {
        RiskLevel::Moderate
    } else if overall_risk >= 25.0 {
        RiskLevel::Low
    } else {
        RiskLevel::VeryLow
    }
}

pub fn generate_risk_index(inputs: &RiskInputs) -> RiskBreakdown {
    generate_risk_index_weighted(inputs, &RiskWeights::default())
}

pub fn generate_risk_index_weighted(inputs: &RiskInputs, weights: &RiskWeights) -> RiskBreakdown {
    let competition = competition_risk(inputs.competition_density, inputs.competition_index);
    let financial = financial_risk(
        inputs.setup_cost_min,
        inputs.break_even_months,
        inputs.profit_margin_min,
    );
    let operational = operational_risk(inputs.category_difficulty, inputs.staffing);
    let regulatory = regulatory_risk(inputs.category);

    let overall_risk = (competition * weights.competition
        + financial * weights.financial
        + operational * weights.operational
        + regulatory * weights.regulatory)
        .round()
        .clamp(0.0, 100.0);

    let risk_level = level_for(overall_risk);

    let mut critical_factors = Vec::new();
    if competition >= 70.0 {
        critical_factors.push("High competition saturation".to_string());
    }
    if financial >= 70.0 {
        critical_factors.push("High capital requirement and long ROI".to_string());
    }
    if operational >= 70.0 {
        critical_factors.push("Complex operations and staffing".to_string());
    }
    if regulatory >= 70.0 {
        critical_factors.push("Strict regulatory compliance needed".to_string());
    }
    if critical_factors.is_empty() && overall_risk > 50.0 {
        critical_factors.push("Multiple moderate risk factors combined".to_string());
    }

    let mut mitigation_steps = Vec::new();
    if competition >= 60.0 {
        mitigation_steps.push("Develop strong differentiation strategy".to_string());
        mitigation_steps.push("Focus on niche targeting to avoid direct competition".to_string());
    }
    if financial >= 60.0 {
        mitigation_steps.push("Secure adequate funding buffer for 18-24 months".to_string());
        mitigation_steps.push("Consider phased rollout to reduce initial capital".to_string());
        mitigation_steps.push("Negotiate favorable payment terms with suppliers".to_string());
    }
    if operational >= 60.0 {
        mitigation_steps.push("Hire experienced operations manager".to_string());
        mitigation_steps.push("Implement strong training programs".to_string());
        mitigation_steps.push("Use technology to simplify operations".to_string());
    }
    if regulatory >= 60.0 {
        mitigation_steps.push("Consult legal expert for compliance roadmap".to_string());
        mitigation_steps.push("Budget for licensing and certification costs".to_string());
        mitigation_steps.push("Stay updated on regulatory changes".to_string());
    }
    if mitigation_steps.is_empty() {
        mitigation_steps.push("Maintain lean operations initially".to_string());
        mitigation_steps.push("Focus on customer satisfaction and retention".to_string());
        mitigation_steps.push("Monitor market trends regularly".to_string());
    }

    RiskBreakdown {
        competition_risk: competition,
        financial_risk: financial,
        operational_risk: operational,
        regulatory_risk: regulatory,
        overall_risk,
        risk_level,
        critical_factors,
        mitigation_steps,
    }
}
