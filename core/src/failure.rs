//! Failure prediction engine — additive failure-risk accumulation over
//! six independent contributions, with banded probability labels.
//!
//! Warnings carry an explicit [`WarningKind`]; the survival
//! recommendations switch on kinds, never on warning text.

use crate::types::{CompetitionDensity, RiskLevel, Viability};
use serde::{Deserialize, Serialize};

/// Machine-readable identity of a critical warning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    CriticallyLowScore,
    ChallengingMarket,
    DecliningTrend,
    MarketOversaturated,
    WeakFinancials,
    LongBreakEven,
    PoorMarketFit,
    HighCapitalExposure,
}

impl WarningKind {
    pub fn message(self) -> &'static str {
        match self {
            WarningKind::CriticallyLowScore => "Current BizScore is critically low",
            WarningKind::ChallengingMarket => "BizScore indicates challenging market conditions",
            WarningKind::DecliningTrend => "Declining market trend predicted",
            WarningKind::MarketOversaturated => {
                "Market oversaturation significantly increases failure risk"
            }
            WarningKind::WeakFinancials => "Weak financial projections threaten sustainability",
            WarningKind::LongBreakEven => "Long break-even period increases cash flow risk",
            WarningKind::PoorMarketFit => "Poor market-idea fit detected",
            WarningKind::HighCapitalExposure => "High capital requirement with uncertain returns",
        }
    }

    fn is_competition(self) -> bool {
        matches!(self, WarningKind::MarketOversaturated)
    }

    fn is_financial(self) -> bool {
        matches!(self, WarningKind::WeakFinancials)
    }

    fn is_market_fit(self) -> bool {
        matches!(
            self,
            WarningKind::ChallengingMarket
                | WarningKind::DecliningTrend
                | WarningKind::PoorMarketFit
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl From<WarningKind> for Warning {
    fn from(kind: WarningKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailurePrediction {
    /// 0-100, higher = more likely to fail.
    pub failure_risk: f64,
    pub failure_probability: RiskLevel,
    pub time_to_failure: String,
    pub critical_warnings: Vec<Warning>,
    pub protective_factors: Vec<String>,
    pub survival_recommendations: Vec<String>,
    /// 0-100, driven by how many input groups were populated.
    pub confidence_level: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct FailureInputs {
    pub biz_score_today: f64,
    pub biz_score_12m: f64,
    pub competition_density: CompetitionDensity,
    pub financial_viability: Viability,
    /// 0-100 demand-side fit for the idea.
    pub demand_match: f64,
    /// 0-100 demographic fit for the idea.
    pub demographic_fit: f64,
    pub break_even_months: u32,
    pub setup_cost: i64,
}

pub fn predict_failure(inputs: &FailureInputs) -> FailurePrediction {
    let mut failure_risk: f64 = 0.0;
    let mut warnings: Vec<WarningKind> = Vec::new();
    let mut protective_factors = Vec::new();

    // Current score tier
    if inputs.biz_score_today < 40.0 {
        failure_risk += 25.0;
        warnings.push(WarningKind::CriticallyLowScore);
    } else if inputs.biz_score_today < 55.0 {
        failure_risk += 15.0;
        warnings.push(WarningKind::ChallengingMarket);
    } else if inputs.biz_score_today >= 75.0 {
        protective_factors.push("Strong current BizScore provides buffer".to_string());
    }

    // 12-month trend
    let score_change = inputs.biz_score_12m - inputs.biz_score_today;
    if score_change < -10.0 {
        failure_risk += 20.0;
        warnings.push(WarningKind::DecliningTrend);
    } else if score_change > 10.0 {
        protective_factors.push("Growing market with positive momentum".to_string());
    }

    // Competition pressure
    failure_risk += match inputs.competition_density {
        CompetitionDensity::Low => 5.0,
        CompetitionDensity::Balanced => 12.0,
        CompetitionDensity::High => 18.0,
        CompetitionDensity::Oversaturated => 25.0,
    };
    if inputs.competition_density == CompetitionDensity::Oversaturated {
        warnings.push(WarningKind::MarketOversaturated);
    }

    // Financial viability tier
    failure_risk += match inputs.financial_viability {
        Viability::Poor => 25.0,
        Viability::Fair => 15.0,
        Viability::Good => 8.0,
        Viability::Excellent => 3.0,
    };
    match inputs.financial_viability {
        Viability::Poor => warnings.push(WarningKind::WeakFinancials),
        Viability::Excellent => protective_factors
            .push("Strong financial foundation supports long-term viability".to_string()),
        _ => {}
    }

    // Break-even horizon
    if inputs.break_even_months > 24 {
        failure_risk += 15.0;
        warnings.push(WarningKind::LongBreakEven);
    } else if inputs.break_even_months > 18 {
        failure_risk += 10.0;
    } else if inputs.break_even_months <= 12 {
        protective_factors.push("Quick break-even reduces financial stress".to_string());
    }

    // Market fit
    let market_fit = (inputs.demand_match + inputs.demographic_fit) / 2.0;
    if market_fit < 40.0 {
        failure_risk += 15.0;
        warnings.push(WarningKind::PoorMarketFit);
    } else if market_fit < 60.0 {
        failure_risk += 8.0;
    } else if market_fit >= 75.0 {
        protective_factors.push("Excellent market-idea alignment".to_string());
    }

    // Capital exposure flag (no risk points, warning only)
    if inputs.setup_cost > 3_000_000 && inputs.financial_viability != Viability::Excellent {
        warnings.push(WarningKind::HighCapitalExposure);
    }

    let failure_risk = failure_risk.min(100.0);

    let (failure_probability, time_to_failure) = if failure_risk >= 75.0 {
        (RiskLevel::VeryHigh, "Within 6 months")
    } else if failure_risk >= 60.0 {
        (RiskLevel::High, "6-12 months")
    } else if failure_risk >= 40.0 {
        (RiskLevel::Moderate, "12-24 months")
    } else if failure_risk >= 20.0 {
        (RiskLevel::Low, "24+ months")
    } else {
        (RiskLevel::VeryLow, "N/A - Strong survival indicators")
    };

    let survival_recommendations =
        survival_recommendations(failure_risk, &warnings, inputs.break_even_months);

    // Data-quality confidence: 25 points per populated input group.
    let confidence_level: f64 = ((if inputs.biz_score_today > 0.0 { 25.0_f64 } else { 0.0 })
        + 25.0 // competition density always present (closed enum)
        + 25.0 // viability always present (closed enum)
        + (if inputs.demand_match > 0.0 { 25.0 } else { 0.0 }))
    .min(100.0);

    if failure_risk >= 60.0 {
        log::warn!(
            "failure risk {failure_risk:.0} ({failure_probability:?}), {} warnings",
            warnings.len()
        );
    }

    FailurePrediction {
        failure_risk,
        failure_probability,
        time_to_failure: time_to_failure.to_string(),
        critical_warnings: warnings.into_iter().map(Warning::from).collect(),
        protective_factors,
        survival_recommendations,
        confidence_level,
    }
}

fn survival_recommendations(
    failure_risk: f64,
    warnings: &[WarningKind],
    break_even_months: u32,
) -> Vec<String> {
    let mut recs = Vec::new();

    if failure_risk >= 60.0 {
        recs.push("URGENT: Reconsider this location or category entirely".to_string());
        recs.push("If proceeding, start with minimal investment (MVP approach)".to_string());
        recs.push("Secure 24+ months of operating capital as buffer".to_string());
    }

    if warnings.iter().any(|w| w.is_competition()) {
        recs.push("Develop strong differentiation strategy before launch".to_string());
        recs.push("Consider alternative locations with lower competition".to_string());
    }

    if warnings.iter().any(|w| w.is_financial()) {
        recs.push("Reduce initial investment through leasing and outsourcing".to_string());
        recs.push("Focus on high-margin products/services initially".to_string());
    }

    if warnings.iter().any(|w| w.is_market_fit()) {
        recs.push("Conduct customer validation before full launch".to_string());
        recs.push("Pivot positioning to better match local demographics".to_string());
    }

    if break_even_months > 18 {
        recs.push(
            "Explore ways to accelerate break-even (reduce costs, increase prices)".to_string(),
        );
    }

    if failure_risk >= 40.0 {
        recs.push("Maintain lean operations - avoid fixed costs".to_string());
        recs.push("Build strong customer relationships for retention".to_string());
        recs.push("Monitor cash flow weekly and adjust quickly".to_string());
    }

    recs
}
