//! Decision matrix — ranks multiple feasibility reports into an
//! ordered recommendation with comparative insights.
//!
//! Two strategies implement [`RankingStrategy`]:
//!   - [`ComparativeStrategy`] — five weighted components, relative
//!     strengths/concerns, narrative insights. This is the canonical
//!     product entry point, exposed as [`rank`].
//!   - [`WeightedMatrixStrategy`] — ten configurable criteria with
//!     min-max normalized scores and a spread/confidence analysis.
//!
//! RULES:
//!   - Fewer than 2 candidates is an error, never a degenerate ranking.
//!   - Ties rank by input order (stable sort), so rankings are
//!     reproducible for identical inputs.
//!   - Weight renormalization produces a new weight set; the caller's
//!     weights are never mutated.

use crate::error::{ScoreError, ScoreResult};
use crate::normalize;
use crate::report::FeasibilityReport;
use crate::types::{CompetitionDensity, ReportId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedOpportunity {
    pub id: ReportId,
    pub location: String,
    pub category: String,
    pub score: f64,
    /// 1-based position, strictly descending by score.
    pub rank: u32,
    pub label: String,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionMatrixResult {
    pub ranking: Vec<RankedOpportunity>,
    pub top_choice: RankedOpportunity,
    pub insights: Vec<String>,
}

/// A ranking algorithm over already-scored feasibility reports.
pub trait RankingStrategy {
    fn name(&self) -> &'static str;

    /// Rank the candidates. Fails with
    /// [`ScoreError::InsufficientCandidates`] when fewer than 2 are
    /// supplied.
    fn rank(&self, candidates: &[FeasibilityReport]) -> ScoreResult<DecisionMatrixResult>;
}

/// Rank candidates with the canonical strategy.
pub fn rank(candidates: &[FeasibilityReport]) -> ScoreResult<DecisionMatrixResult> {
    ComparativeStrategy::default().rank(candidates)
}

fn require_candidates(candidates: &[FeasibilityReport]) -> ScoreResult<()> {
    if candidates.len() < 2 {
        return Err(ScoreError::InsufficientCandidates {
            got: candidates.len(),
        });
    }
    Ok(())
}

/// Rank-based display label, shared by both strategies.
fn label_for_rank(index: usize, total: usize) -> String {
    if index == 0 {
        "Top Choice".to_string()
    } else if index == 1 && total > 2 {
        "Strong Alternative".to_string()
    } else if index == total - 1 {
        "Least Favorable".to_string()
    } else {
        "Consider with Caution".to_string()
    }
}

// ── Comparative strategy ───────────────────────────────────────────

/// Component weights of the comparative strategy. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ComparativeWeights {
    pub biz_score: f64,
    pub forecast: f64,
    pub competition: f64,
    pub financial: f64,
    pub swot: f64,
}

impl Default for ComparativeWeights {
    fn default() -> Self {
        Self {
            biz_score: 0.30,
            forecast: 0.20,
            competition: 0.15,
            financial: 0.20,
            swot: 0.15,
        }
    }
}

impl ComparativeWeights {
    pub fn sum(&self) -> f64 {
        self.biz_score + self.forecast + self.competition + self.financial + self.swot
    }
}

#[derive(Debug, Default, Clone)]
pub struct ComparativeStrategy {
    pub weights: ComparativeWeights,
}

#[derive(Debug, Clone, Copy)]
struct ComponentScores {
    biz_score: f64,
    forecast: f64,
    competition: f64,
    financial: f64,
    swot: f64,
}

impl ComparativeStrategy {
    fn component_scores(report: &FeasibilityReport) -> ComponentScores {
        ComponentScores {
            biz_score: blend_biz_score(report.biz_score_today, report.biz_score_12m),
            forecast: forecast_band(report.forecast_growth),
            competition: competition_band(report.market.competition_density),
            financial: financial_viability_score(report),
            swot: swot_balance_score(report),
        }
    }

    fn total_score(&self, scores: &ComponentScores) -> f64 {
        (scores.biz_score * self.weights.biz_score
            + scores.forecast * self.weights.forecast
            + scores.competition * self.weights.competition
            + scores.financial * self.weights.financial
            + scores.swot * self.weights.swot)
            .round()
    }
}

/// Current score weighted 60%, 12-month outlook 40%.
fn blend_biz_score(today: f64, future: f64) -> f64 {
    today * 0.6 + future * 0.4
}

fn forecast_band(growth: f64) -> f64 {
    if growth >= 1.3 {
        100.0
    } else if growth >= 1.2 {
        85.0
    } else if growth >= 1.1 {
        70.0
    } else if growth >= 1.0 {
        50.0
    } else if growth >= 0.95 {
        30.0
    } else {
        15.0
    }
}

fn competition_band(density: CompetitionDensity) -> f64 {
    match density {
        CompetitionDensity::Low => 100.0,
        CompetitionDensity::Balanced => 75.0,
        CompetitionDensity::High => 45.0,
        CompetitionDensity::Oversaturated => 20.0,
    }
}

/// Break-even and margin each contribute up to 50 points.
fn financial_viability_score(report: &FeasibilityReport) -> f64 {
    let fin = &report.financials;
    let break_even_points = if fin.break_even_months <= 12 {
        50.0
    } else if fin.break_even_months <= 18 {
        35.0
    } else if fin.break_even_months <= 24 {
        20.0
    } else {
        10.0
    };

    let avg_margin = fin.profit_margin.mid();
    let margin_points = if avg_margin >= 25.0 {
        50.0
    } else if avg_margin >= 18.0 {
        35.0
    } else if avg_margin >= 12.0 {
        20.0
    } else {
        10.0
    };

    break_even_points + margin_points
}

/// SWOT net balance re-based around 50.
fn swot_balance_score(report: &FeasibilityReport) -> f64 {
    let swot = &report.swot;
    let positive = swot.strengths.len() as f64 * 10.0 + swot.opportunities.len() as f64 * 12.0;
    let negative = swot.weaknesses.len() as f64 * 8.0 + swot.threats.len() as f64 * 10.0;
    (50.0 + positive - negative).clamp(0.0, 100.0)
}

/// Relative strengths against the candidate set's own averages and
/// extremes. At most 3.
fn relative_strengths(report: &FeasibilityReport, all: &[FeasibilityReport]) -> Vec<String> {
    let mut strengths = Vec::new();
    let n = all.len() as f64;

    let avg_score = all.iter().map(|r| r.biz_score_today).sum::<f64>() / n;
    if report.biz_score_today > avg_score + 5.0 {
        strengths.push("Above-average market score".to_string());
    }

    let avg_growth = all.iter().map(|r| r.forecast_growth).sum::<f64>() / n;
    if report.forecast_growth > avg_growth {
        strengths.push("Strong growth potential".to_string());
    }

    let min_break_even = all
        .iter()
        .map(|r| r.financials.break_even_months)
        .min()
        .unwrap_or(0);
    if report.financials.break_even_months == min_break_even {
        strengths.push("Fastest break-even time".to_string());
    }

    if matches!(
        report.market.competition_density,
        CompetitionDensity::Low | CompetitionDensity::Balanced
    ) {
        strengths.push("Favorable competitive landscape".to_string());
    }

    if report.financials.profit_margin.max > 30.0 {
        strengths.push("High profit margins".to_string());
    }

    strengths.truncate(3);
    strengths
}

/// Relative concerns against the candidate set. At most 3.
fn relative_concerns(report: &FeasibilityReport, all: &[FeasibilityReport]) -> Vec<String> {
    let mut concerns = Vec::new();
    let n = all.len() as f64;

    let avg_score = all.iter().map(|r| r.biz_score_today).sum::<f64>() / n;
    if report.biz_score_today < avg_score - 5.0 {
        concerns.push("Below-average market score".to_string());
    }

    if report.forecast_growth < 1.05 {
        concerns.push("Limited growth prospects".to_string());
    }

    let max_break_even = all
        .iter()
        .map(|r| r.financials.break_even_months)
        .max()
        .unwrap_or(0);
    if report.financials.break_even_months == max_break_even
        && report.financials.break_even_months > 18
    {
        concerns.push("Longest break-even time".to_string());
    }

    if matches!(
        report.market.competition_density,
        CompetitionDensity::High | CompetitionDensity::Oversaturated
    ) {
        concerns.push("Intense competition".to_string());
    }

    if report.market.demand_index < 50.0 {
        concerns.push("Lower market demand".to_string());
    }

    concerns.truncate(3);
    concerns
}

/// Index of the candidate with the strictly highest value; the first
/// one wins on ties, mirroring the stable ranking policy.
fn best_index(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

impl RankingStrategy for ComparativeStrategy {
    fn name(&self) -> &'static str {
        "comparative"
    }

    fn rank(&self, candidates: &[FeasibilityReport]) -> ScoreResult<DecisionMatrixResult> {
        require_candidates(candidates)?;

        let components: Vec<ComponentScores> = candidates
            .iter()
            .map(Self::component_scores)
            .collect();
        let totals: Vec<f64> = components.iter().map(|c| self.total_score(c)).collect();

        // Stable sort keeps input order on equal scores.
        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.sort_by(|&a, &b| totals[b].total_cmp(&totals[a]));

        let ranking: Vec<RankedOpportunity> = order
            .iter()
            .enumerate()
            .map(|(position, &idx)| {
                let report = &candidates[idx];
                RankedOpportunity {
                    id: report.id.clone(),
                    location: report.location.clone(),
                    category: report.category.clone(),
                    score: totals[idx],
                    rank: position as u32 + 1,
                    label: label_for_rank(position, candidates.len()),
                    strengths: relative_strengths(report, candidates),
                    concerns: relative_concerns(report, candidates),
                }
            })
            .collect();

        let insights = self.insights(candidates, &components, &ranking);
        let top_choice = ranking[0].clone();

        log::debug!(
            "comparative ranking: {} candidates, top={} score={:.0}",
            candidates.len(),
            top_choice.location,
            top_choice.score
        );

        Ok(DecisionMatrixResult {
            ranking,
            top_choice,
            insights,
        })
    }
}

impl ComparativeStrategy {
    fn insights(
        &self,
        candidates: &[FeasibilityReport],
        components: &[ComponentScores],
        ranking: &[RankedOpportunity],
    ) -> Vec<String> {
        let mut insights = Vec::new();

        let gap = ranking[0].score - ranking[1].score;
        if gap > 15.0 {
            insights.push(format!(
                "Clear winner: {} ({}) leads by {gap:.0} points",
                ranking[0].location, ranking[0].category
            ));
        } else {
            insights.push(format!(
                "Close competition: Top 2 options are within {gap:.0} points of each other"
            ));
        }

        let top_id = &ranking[0].id;

        let financial: Vec<f64> = components.iter().map(|c| c.financial).collect();
        let best_financial = &candidates[best_index(&financial)];
        if best_financial.id != *top_id {
            insights.push(format!(
                "Best financial outlook: {} has strongest profit potential",
                best_financial.location
            ));
        }

        let forecast: Vec<f64> = components.iter().map(|c| c.forecast).collect();
        let best_growth = &candidates[best_index(&forecast)];
        if best_growth.id != *top_id {
            insights.push(format!(
                "Highest growth potential: {} shows best market expansion",
                best_growth.location
            ));
        }

        let competition: Vec<f64> = components.iter().map(|c| c.competition).collect();
        let least_competition = &candidates[best_index(&competition)];
        if least_competition.id != *top_id {
            insights.push(format!(
                "Least competitive: {} has most favorable market density",
                least_competition.location
            ));
        }

        insights
    }
}

// ── Weighted matrix strategy ───────────────────────────────────────

/// The ten criterion weights of the weighted matrix. Defaults sum to
/// 1.0; arbitrary weights are renormalized by [`MatrixWeights::normalized`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatrixWeights {
    pub biz_score: f64,
    pub growth_potential: f64,
    pub demand_level: f64,
    pub competition_favorability: f64,
    pub profitability: f64,
    pub break_even_speed: f64,
    pub capital_requirements: f64,
    pub operational_complexity: f64,
    pub risk_level: f64,
    pub strategic_fit: f64,
}

impl Default for MatrixWeights {
    fn default() -> Self {
        Self {
            biz_score: 0.20,
            growth_potential: 0.15,
            demand_level: 0.12,
            competition_favorability: 0.12,
            profitability: 0.12,
            break_even_speed: 0.10,
            capital_requirements: 0.08,
            operational_complexity: 0.05,
            risk_level: 0.04,
            strategic_fit: 0.02,
        }
    }
}

impl MatrixWeights {
    pub fn sum(&self) -> f64 {
        self.biz_score
            + self.growth_potential
            + self.demand_level
            + self.competition_favorability
            + self.profitability
            + self.break_even_speed
            + self.capital_requirements
            + self.operational_complexity
            + self.risk_level
            + self.strategic_fit
    }

    /// A new weight set scaled to sum to 1.0. The receiver is not
    /// modified.
    pub fn normalized(&self) -> MatrixWeights {
        let sum = self.sum();
        if sum <= 0.0 {
            return MatrixWeights::default();
        }
        MatrixWeights {
            biz_score: self.biz_score / sum,
            growth_potential: self.growth_potential / sum,
            demand_level: self.demand_level / sum,
            competition_favorability: self.competition_favorability / sum,
            profitability: self.profitability / sum,
            break_even_speed: self.break_even_speed / sum,
            capital_requirements: self.capital_requirements / sum,
            operational_complexity: self.operational_complexity / sum,
            risk_level: self.risk_level / sum,
            strategic_fit: self.strategic_fit / sum,
        }
    }
}

/// Raw 0-100 scores for each criterion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatrixCriteria {
    pub biz_score: f64,
    pub growth_potential: f64,
    pub demand_level: f64,
    pub competition_favorability: f64,
    pub profitability: f64,
    pub break_even_speed: f64,
    pub capital_requirements: f64,
    pub operational_complexity: f64,
    pub risk_level: f64,
    pub strategic_fit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixResult {
    pub id: ReportId,
    pub location: String,
    pub category: String,
    pub total_score: f64,
    /// Min-max normalized against the candidate set, 0-100.
    pub normalized_score: f64,
    pub rank: u32,
    pub criteria_scores: MatrixCriteria,
    pub recommendation: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatrixAnalysis {
    /// Raw total-score gap between best and worst candidate.
    pub spread: f64,
    /// Top normalized score minus the set average.
    pub confidence: f64,
    pub clear_winner: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightedMatrixOutput {
    pub results: Vec<MatrixResult>,
    pub top_choice: MatrixResult,
    /// The normalized weights actually applied.
    pub weights: MatrixWeights,
    pub analysis: MatrixAnalysis,
}

#[derive(Debug, Default, Clone)]
pub struct WeightedMatrixStrategy {
    pub weights: MatrixWeights,
}

impl WeightedMatrixStrategy {
    pub fn with_weights(weights: MatrixWeights) -> Self {
        Self { weights }
    }

    fn criteria_scores(report: &FeasibilityReport) -> MatrixCriteria {
        MatrixCriteria {
            biz_score: report.biz_score_today,
            growth_potential: normalize::growth_score(report.forecast_growth),
            demand_level: report.market.demand_index,
            competition_favorability: normalize::competition_favorability(
                report.market.competition_density,
            ),
            profitability: (report.financials.profit_margin.max / 50.0) * 100.0,
            break_even_speed: normalize::break_even_speed(report.financials.break_even_months),
            capital_requirements: normalize::capital_burden(report.financials.setup_cost.max),
            operational_complexity: normalize::difficulty_favorability(report.category_difficulty),
            risk_level: composite_risk_score(report),
            strategic_fit: report.strategic_opportunity_index,
        }
    }

    /// Full evaluation with per-criterion detail.
    pub fn evaluate(
        &self,
        candidates: &[FeasibilityReport],
    ) -> ScoreResult<WeightedMatrixOutput> {
        require_candidates(candidates)?;

        let weights = self.weights.normalized();

        let criteria: Vec<MatrixCriteria> =
            candidates.iter().map(Self::criteria_scores).collect();
        let totals: Vec<f64> = criteria
            .iter()
            .map(|c| {
                c.biz_score * weights.biz_score
                    + c.growth_potential * weights.growth_potential
                    + c.demand_level * weights.demand_level
                    + c.competition_favorability * weights.competition_favorability
                    + c.profitability * weights.profitability
                    + c.break_even_speed * weights.break_even_speed
                    + c.capital_requirements * weights.capital_requirements
                    + c.operational_complexity * weights.operational_complexity
                    + c.risk_level * weights.risk_level
                    + c.strategic_fit * weights.strategic_fit
            })
            .collect();

        let max_total = totals.iter().cloned().fold(f64::MIN, f64::max);
        let min_total = totals.iter().cloned().fold(f64::MAX, f64::min);
        let normalized: Vec<f64> = totals
            .iter()
            .map(|t| {
                if (max_total - min_total).abs() < f64::EPSILON {
                    100.0
                } else {
                    (t - min_total) / (max_total - min_total) * 100.0
                }
            })
            .collect();
        let avg_normalized = normalized.iter().sum::<f64>() / normalized.len() as f64;

        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.sort_by(|&a, &b| totals[b].total_cmp(&totals[a]));

        let results: Vec<MatrixResult> = order
            .iter()
            .enumerate()
            .map(|(position, &idx)| {
                let report = &candidates[idx];
                let rank = position as u32 + 1;
                let deviation = (normalized[idx] - avg_normalized).abs();
                let confidence = (normalized[idx] + deviation / 2.0).min(100.0);
                MatrixResult {
                    id: report.id.clone(),
                    location: report.location.clone(),
                    category: report.category.clone(),
                    total_score: totals[idx],
                    normalized_score: normalized[idx],
                    rank,
                    criteria_scores: criteria[idx],
                    recommendation: rank_recommendation(rank, candidates.len(), confidence),
                    confidence,
                }
            })
            .collect();

        let top_choice = results[0].clone();
        let spread = max_total - min_total;
        let confidence = top_choice.normalized_score - avg_normalized;
        let analysis = MatrixAnalysis {
            spread,
            confidence,
            clear_winner: confidence > 20.0,
        };

        Ok(WeightedMatrixOutput {
            results,
            top_choice,
            weights,
            analysis,
        })
    }
}

/// Composite risk criterion: higher is safer.
fn composite_risk_score(report: &FeasibilityReport) -> f64 {
    let mut risk: f64 = 50.0;

    match report.market.competition_density {
        CompetitionDensity::Oversaturated => risk -= 25.0,
        CompetitionDensity::Low => risk += 20.0,
        _ => {}
    }

    if report.market.demand_index < 40.0 {
        risk -= 15.0;
    } else if report.market.demand_index > 70.0 {
        risk += 15.0;
    }

    if report.forecast_growth < 1.0 {
        risk -= 20.0;
    } else if report.forecast_growth > 1.2 {
        risk += 15.0;
    }

    if report.financials.break_even_months > 24 {
        risk -= 10.0;
    }

    risk.clamp(0.0, 100.0)
}

fn rank_recommendation(rank: u32, total: usize, confidence: f64) -> String {
    if rank == 1 {
        if confidence > 80.0 {
            "Strongly Recommended - Clear Top Choice".to_string()
        } else {
            "Recommended - Best Overall Score".to_string()
        }
    } else if rank == 2 {
        "Good Alternative - Consider as Backup".to_string()
    } else if rank as usize <= total.div_ceil(2) {
        "Viable Option - Worth Further Investigation".to_string()
    } else {
        "Not Recommended - Consider Alternatives".to_string()
    }
}

impl RankingStrategy for WeightedMatrixStrategy {
    fn name(&self) -> &'static str {
        "weighted-matrix"
    }

    fn rank(&self, candidates: &[FeasibilityReport]) -> ScoreResult<DecisionMatrixResult> {
        let output = self.evaluate(candidates)?;
        let total = candidates.len();

        let ranking: Vec<RankedOpportunity> = output
            .results
            .iter()
            .enumerate()
            .map(|(position, result)| {
                let report = candidates.iter().find(|r| r.id == result.id);
                let (strengths, concerns) = match report {
                    Some(r) => (
                        relative_strengths(r, candidates),
                        relative_concerns(r, candidates),
                    ),
                    None => (Vec::new(), Vec::new()),
                };
                RankedOpportunity {
                    id: result.id.clone(),
                    location: result.location.clone(),
                    category: result.category.clone(),
                    score: result.normalized_score.round(),
                    rank: result.rank,
                    label: label_for_rank(position, total),
                    strengths,
                    concerns,
                }
            })
            .collect();

        let mut insights = Vec::new();
        if output.analysis.clear_winner {
            insights.push(format!(
                "Clear winner: {} ({}) stands out across weighted criteria",
                output.top_choice.location, output.top_choice.category
            ));
        } else {
            insights.push(
                "Close competition: weighted criteria do not single out one candidate".to_string(),
            );
        }

        let top_choice = ranking[0].clone();
        Ok(DecisionMatrixResult {
            ranking,
            top_choice,
            insights,
        })
    }
}
