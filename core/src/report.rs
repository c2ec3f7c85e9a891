//! Feasibility report builder — wires SWOT, financial projection and
//! recommendation together from one input set.
//!
//! Reports are plain immutable data; callers persist them if they want
//! to. Identity (id + timestamp) is generated outside the pure path so
//! every scoring function stays reproducible.

use crate::bizscore::{self, BizScoreBreakdown};
use crate::category::{self, CategoryId};
use crate::finance::{self, FinancialProjection};
use crate::market::MarketSignal;
use crate::recommend::{self, Recommendation, RecommendationInputs};
use crate::swot::{self, SwotAnalysis, SwotInputs};
use crate::types::{Difficulty, OpportunityType, ReportId, TrendDirection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Report identity. [`ReportIdentity::generate`] is the only
/// non-deterministic call in the crate; tests pass a fixed identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportIdentity {
    pub id: ReportId,
    pub timestamp: DateTime<Utc>,
}

impl ReportIdentity {
    pub fn generate() -> Self {
        Self {
            id: format!("report-{}", Uuid::new_v4()),
            timestamp: Utc::now(),
        }
    }

    pub fn fixed(id: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeasibilityReport {
    pub id: ReportId,
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub category: String,
    pub market: MarketSignal,
    pub category_difficulty: Difficulty,
    pub biz_score_today: f64,
    pub biz_score_6m: f64,
    pub biz_score_12m: f64,
    pub forecast_growth: f64,
    pub trend_direction: TrendDirection,
    pub strategic_opportunity_index: f64,
    pub opportunity_type: OpportunityType,
    pub swot: SwotAnalysis,
    pub financials: FinancialProjection,
    pub recommendation: Recommendation,
}

/// Everything the builder needs besides identity. Scores are accepted
/// pre-computed so callers can source them from [`crate::bizscore`] or
/// from an externally stored analysis.
#[derive(Debug, Clone)]
pub struct ReportInputs {
    pub location: String,
    pub category: String,
    pub market: MarketSignal,
    pub category_difficulty: Difficulty,
    pub biz_score_today: f64,
    pub biz_score_6m: f64,
    pub biz_score_12m: f64,
    pub forecast_growth: f64,
    pub trend_direction: TrendDirection,
    pub strategic_opportunity_index: f64,
}

pub fn build_report(identity: ReportIdentity, inputs: ReportInputs) -> FeasibilityReport {
    let category_id = CategoryId::parse(&inputs.category);

    let swot = swot::generate_swot(&SwotInputs {
        demand_index: inputs.market.demand_index,
        competition_density: inputs.market.competition_density,
        category_difficulty: inputs.category_difficulty,
        forecast_growth: inputs.forecast_growth,
        strategic_opportunity_index: inputs.strategic_opportunity_index,
        biz_score_today: inputs.biz_score_today,
        biz_score_12m: inputs.biz_score_12m,
        population_density: inputs.market.population_density,
    });

    let financials = finance::project(
        category_id,
        inputs.market.demand_index,
        inputs.market.competition_density,
        inputs.market.population_density,
        inputs.forecast_growth,
    );

    let recommendation = recommend::recommend(&RecommendationInputs {
        biz_score_today: inputs.biz_score_today,
        biz_score_12m: inputs.biz_score_12m,
        competition_density: inputs.market.competition_density,
        category_difficulty: inputs.category_difficulty,
        swot: &swot,
        financials: &financials,
        forecast_growth: inputs.forecast_growth,
    });

    let opportunity_type = bizscore::classify_opportunity(
        inputs.biz_score_today,
        inputs.market.competition_index,
        inputs.market.demand_index,
    );

    log::info!(
        "report built: id={} location={} category={} score={:.0} verdict={}",
        identity.id,
        inputs.location,
        inputs.category,
        inputs.biz_score_today,
        recommendation.recommendation,
    );

    FeasibilityReport {
        id: identity.id,
        timestamp: identity.timestamp,
        location: inputs.location,
        category: inputs.category,
        market: inputs.market,
        category_difficulty: inputs.category_difficulty,
        biz_score_today: inputs.biz_score_today,
        biz_score_6m: inputs.biz_score_6m,
        biz_score_12m: inputs.biz_score_12m,
        forecast_growth: inputs.forecast_growth,
        trend_direction: inputs.trend_direction,
        strategic_opportunity_index: inputs.strategic_opportunity_index,
        opportunity_type,
        swot,
        financials,
        recommendation,
    }
}

/// Full pipeline from a raw market signal: score, project forward,
/// then build the report.
///
/// `forecast_growth` is the annual growth ratio; when absent it is
/// derived from today's score (>=70 -> 1.2, >=50 -> 1.1, else 1.05).
pub fn analyze(
    identity: ReportIdentity,
    location: &str,
    category: &str,
    market: MarketSignal,
    forecast_growth: Option<f64>,
) -> (FeasibilityReport, BizScoreBreakdown) {
    let market = market.sanitized();
    let category_id = CategoryId::parse(category);
    let profile = category::profile_for(category_id);

    let breakdown = bizscore::score(
        &market,
        category_id,
        forecast_growth,
        market.competition_index,
        profile.ease_score,
    );
    let today = breakdown.overall;

    let growth = forecast_growth.unwrap_or(if today >= 70.0 {
        1.2
    } else if today >= 50.0 {
        1.1
    } else {
        1.05
    });

    let biz_score_6m = (today * 1.05).round().min(100.0);
    let biz_score_12m = (today * growth).round().min(100.0);
    let trend_direction = swot::trend_from_scores(today, biz_score_12m);

    let inputs = ReportInputs {
        location: location.to_string(),
        category: category.to_string(),
        market,
        category_difficulty: profile.difficulty,
        biz_score_today: today,
        biz_score_6m,
        biz_score_12m,
        forecast_growth: growth,
        trend_direction,
        strategic_opportunity_index: breakdown.strategic_opportunity_score,
    };

    (build_report(identity, inputs), breakdown)
}

/// Like [`analyze`], but projects the 6/12-month scores with the
/// forecast engine instead of deriving them from today's score.
/// Growth is the category's annual rate (1 + rate).
pub fn analyze_forecasted(
    identity: ReportIdentity,
    location: &str,
    category: &str,
    market: MarketSignal,
) -> (FeasibilityReport, BizScoreBreakdown) {
    let market = market.sanitized();
    let category_id = CategoryId::parse(category);
    let profile = category::profile_for(category_id);

    let breakdown = bizscore::score(
        &market,
        category_id,
        None,
        market.competition_index,
        profile.ease_score,
    );
    let today = breakdown.overall;

    let forecast = crate::forecast::generate_forecast(&market, category_id, today);

    let inputs = ReportInputs {
        location: location.to_string(),
        category: category.to_string(),
        market,
        category_difficulty: profile.difficulty,
        biz_score_today: today,
        biz_score_6m: forecast.biz_score_6m,
        biz_score_12m: forecast.biz_score_12m,
        forecast_growth: 1.0 + forecast.growth_rate,
        trend_direction: forecast.trend_direction,
        strategic_opportunity_index: breakdown.strategic_opportunity_score,
    };

    (build_report(identity, inputs), breakdown)
}

/// Plain-text shareable summary of a report.
pub fn summary(report: &FeasibilityReport) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "BizRadar Feasibility Report");
    let _ = writeln!(out, "===========================");
    let _ = writeln!(out, "Location: {}", report.location);
    let _ = writeln!(out, "Category: {}", report.category);
    let _ = writeln!(out, "Generated: {}", report.timestamp.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "BizScore: {:.0} (Today) -> {:.0} (12M)",
        report.biz_score_today, report.biz_score_12m
    );
    let _ = writeln!(out, "Recommendation: {}", report.recommendation.recommendation);
    let _ = writeln!(out, "Risk Level: {}", report.recommendation.risk_level);
    let _ = writeln!(out);
    let _ = writeln!(out, "Financial Highlights:");
    let _ = writeln!(
        out,
        "- Setup Cost: {} - {}",
        finance::format_amount(report.financials.setup_cost.min),
        finance::format_amount(report.financials.setup_cost.max)
    );
    let _ = writeln!(out, "- Break-even: {} months", report.financials.break_even_months);
    let _ = writeln!(
        out,
        "- Profit Margin: {:.0}-{:.0}%",
        report.financials.profit_margin.min, report.financials.profit_margin.max
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Key Strengths ({}):", report.swot.strengths.len());
    for (i, s) in report.swot.strengths.iter().enumerate() {
        let _ = writeln!(out, "{}. {s}", i + 1);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Key Threats ({}):", report.swot.threats.len());
    for (i, t) in report.swot.threats.iter().enumerate() {
        let _ = writeln!(out, "{}. {t}", i + 1);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Action Steps:");
    for (i, a) in report.recommendation.action_steps.iter().enumerate() {
        let _ = writeln!(out, "{}. {a}", i + 1);
    }
    out.trim_end().to_string()
}
