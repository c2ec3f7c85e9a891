//! Recommendation engine — converts the full analysis into one of four
//! verdicts with reasoning, an action checklist and a confidence figure.
//!
//! Strictly additive point accumulation across five independent
//! factors; the final score partitions the verdicts at 75/55/35.

use crate::finance::FinancialProjection;
use crate::swot::SwotAnalysis;
use crate::types::{CompetitionDensity, Difficulty, RecommendationType, RiskLevel};
use serde::{Deserialize, Serialize};

/// Verdict thresholds on the 0-100 accumulated score.
pub const START_NOW_THRESHOLD: f64 = 75.0;
pub const START_CAUTION_THRESHOLD: f64 = 55.0;
pub const WAIT_MONITOR_THRESHOLD: f64 = 35.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub recommendation: RecommendationType,
    /// 0-95; each tier has its own ceiling.
    pub confidence: f64,
    pub reasoning: Vec<String>,
    pub action_steps: Vec<String>,
    pub risk_level: RiskLevel,
    pub timeframe: String,
}

#[derive(Debug, Clone)]
pub struct RecommendationInputs<'a> {
    pub biz_score_today: f64,
    pub biz_score_12m: f64,
    pub competition_density: CompetitionDensity,
    pub category_difficulty: Difficulty,
    pub swot: &'a SwotAnalysis,
    pub financials: &'a FinancialProjection,
    pub forecast_growth: f64,
}

pub fn recommend(inputs: &RecommendationInputs<'_>) -> Recommendation {
    let mut score = 0.0;
    let mut reasoning = Vec::new();

    // Factor 1: current market conditions (30 points)
    if inputs.biz_score_today >= 80.0 {
        score += 30.0;
        reasoning.push("Excellent current market conditions with high BizScore".to_string());
    } else if inputs.biz_score_today >= 65.0 {
        score += 20.0;
        reasoning.push("Solid market conditions showing good potential".to_string());
    } else if inputs.biz_score_today >= 50.0 {
        score += 10.0;
        reasoning.push("Moderate market conditions requiring careful approach".to_string());
    } else {
        reasoning.push("Challenging market conditions with below-average scores".to_string());
    }

    // Factor 2: growth trajectory (25 points)
    let score_change = inputs.biz_score_12m - inputs.biz_score_today;
    if score_change >= 10.0 {
        score += 25.0;
        reasoning.push("Strong positive growth trajectory over next 12 months".to_string());
    } else if score_change >= 5.0 {
        score += 18.0;
        reasoning.push("Improving market outlook with steady growth".to_string());
    } else if score_change >= 0.0 {
        score += 10.0;
        reasoning.push("Stable market with consistent performance expected".to_string());
    } else {
        reasoning.push("Declining market conditions anticipated".to_string());
    }

    // Factor 3: SWOT balance (20 points)
    let swot_net = inputs.swot.net_balance();
    if swot_net >= 3 {
        score += 20.0;
        reasoning.push("SWOT analysis reveals strong competitive positioning".to_string());
    } else if swot_net >= 0 {
        score += 12.0;
        reasoning.push("Balanced SWOT with manageable risks".to_string());
    } else if swot_net >= -2 {
        score += 5.0;
        reasoning.push("SWOT shows challenges that require mitigation strategies".to_string());
    } else {
        reasoning.push("SWOT analysis indicates significant challenges ahead".to_string());
    }

    // Factor 4: financial viability (15 points)
    let fin = inputs.financials;
    if fin.break_even_months <= 12 && fin.profit_margin.min >= 15.0 {
        score += 15.0;
        reasoning.push("Strong financial viability with quick break-even".to_string());
    } else if fin.break_even_months <= 18 && fin.profit_margin.min >= 10.0 {
        score += 10.0;
        reasoning.push("Acceptable financial projections with reasonable timeline".to_string());
    } else if fin.break_even_months <= 24 {
        score += 5.0;
        reasoning.push("Extended break-even period requires patience".to_string());
    } else {
        reasoning.push("Financial projections show challenging profitability timeline".to_string());
    }

    // Factor 5: competition & category (10 points)
    use CompetitionDensity::{Balanced, High, Low, Oversaturated};
    if inputs.competition_density == Low
        && matches!(inputs.category_difficulty, Difficulty::Low | Difficulty::Medium)
    {
        score += 10.0;
        reasoning.push("Favorable competition and manageable operational complexity".to_string());
    } else if inputs.competition_density == Balanced {
        score += 6.0;
        reasoning.push("Competitive but accessible market environment".to_string());
    } else if inputs.competition_density == Oversaturated {
        reasoning.push("Highly saturated market with intense competition".to_string());
    }

    let (recommendation, risk_level, timeframe, confidence, mut action_steps) = if score
        >= START_NOW_THRESHOLD
    {
        (
            RecommendationType::StartNow,
            RiskLevel::Low,
            "Launch within 2-3 months",
            (score + 10.0).min(95.0),
            vec![
                "Secure location and finalize business plan immediately".to_string(),
                "Complete legal registrations and obtain necessary licenses".to_string(),
                "Begin vendor negotiations and supply chain setup".to_string(),
                "Launch marketing campaign to build pre-opening buzz".to_string(),
                "Hire and train core team members".to_string(),
            ],
        )
    } else if score >= START_CAUTION_THRESHOLD {
        let risk = if inputs.category_difficulty == Difficulty::VeryHigh {
            RiskLevel::High
        } else {
            RiskLevel::Moderate
        };
        let mut steps = vec![
            "Conduct detailed competitive analysis and positioning study".to_string(),
            "Develop robust differentiation strategy to stand out".to_string(),
            "Create conservative financial projections with contingency plans".to_string(),
            "Test market with soft launch or pilot program if possible".to_string(),
            "Build strong supplier relationships and negotiate favorable terms".to_string(),
        ];
        if inputs.competition_density == High {
            steps.push("Identify unique value proposition to compete effectively".to_string());
        }
        (
            RecommendationType::StartCaution,
            risk,
            "Launch within 4-6 months after preparation",
            (score + 15.0).min(85.0),
            steps,
        )
    } else if score >= WAIT_MONITOR_THRESHOLD {
        let mut steps = vec![
            "Track market trends and competitor movements closely".to_string(),
            "Wait for more favorable conditions or improved indicators".to_string(),
            "Explore alternative locations or adjacent categories".to_string(),
            "Build financial reserves and improve preparation".to_string(),
            "Network with industry experts and potential mentors".to_string(),
        ];
        if score_change > 0.0 {
            steps.push("Re-evaluate in 6 months as growth trajectory improves".to_string());
        }
        (
            RecommendationType::WaitMonitor,
            RiskLevel::High,
            "Monitor for 3-6 months before deciding",
            (score + 20.0).min(75.0),
            steps,
        )
    } else {
        let mut steps = vec![
            "Explore alternative locations with better market conditions".to_string(),
            "Consider different business categories with higher potential".to_string(),
            "Conduct deeper market research before any investment".to_string(),
            "Consult with industry veterans about viability concerns".to_string(),
        ];
        if fin.break_even_months > 24 {
            steps.push("Re-evaluate business model for better financial efficiency".to_string());
        }
        (
            RecommendationType::Avoid,
            RiskLevel::VeryHigh,
            "Consider different location or category",
            (100.0 - score).min(90.0),
            steps,
        )
    };

    if matches!(
        inputs.category_difficulty,
        Difficulty::High | Difficulty::VeryHigh
    ) {
        action_steps.push("Secure expert consultation for operational complexity".to_string());
    }

    log::debug!(
        "recommendation: score={score:.0} verdict={recommendation:?} confidence={confidence:.0}"
    );

    Recommendation {
        recommendation,
        confidence,
        reasoning,
        action_steps,
        risk_level,
        timeframe: timeframe.to_string(),
    }
}
