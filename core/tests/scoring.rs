//! Composite scoring engine tests.

use bizradar_core::bizscore::{
    classify_opportunity, rating_for, score, score_with_weights, BizScoreWeights, ScoreRating,
};
use bizradar_core::category::CategoryId;
use bizradar_core::market::MarketSignal;
use bizradar_core::types::{CompetitionDensity, Impact, OpportunityType};

fn market(demand: f64, competition_index: f64, population_density: f64) -> MarketSignal {
    MarketSignal {
        demand_index: demand,
        competition_density: CompetitionDensity::Balanced,
        competition_index,
        competition_count: 100,
        population_density,
        avg_income: 4.5,
        internet_penetration: 68.0,
        literacy_rate: 80.0,
    }
}

/// Default weights sum to exactly 1.0.
#[test]
fn weights_sum_to_one() {
    assert!((BizScoreWeights::default().sum() - 1.0).abs() < 1e-9);
}

/// Overall stays in [0, 100] across a broad input sweep.
#[test]
fn overall_in_range_for_all_inputs() {
    for demand in [0.0, 25.0, 50.0, 75.0, 100.0] {
        for density_score in [0.0, 40.0, 80.0, 100.0] {
            for growth in [0.8, 1.0, 1.5, 2.0] {
                for ease in [25.0, 65.0, 85.0] {
                    for population in [0.0, 6000.0, 25_000.0] {
                        let breakdown = score(
                            &market(demand, density_score, population),
                            None,
                            Some(growth),
                            density_score,
                            ease,
                        );
                        assert!(
                            (0.0..=100.0).contains(&breakdown.overall),
                            "overall {} out of range for demand={demand} density={density_score}",
                            breakdown.overall
                        );
                    }
                }
            }
        }
    }
}

/// The calibrated component arithmetic for a known scenario.
#[test]
fn known_scenario_components() {
    let breakdown = score(
        &market(75.0, 50.0, 6000.0),
        CategoryId::parse("Cafe"),
        Some(1.15),
        50.0,
        65.0,
    );
    assert_eq!(breakdown.overall, 68.0);
    assert_eq!(breakdown.demand_score, 75.0);
    assert_eq!(breakdown.competition_score, 50.0);
    assert_eq!(breakdown.location_score, 30.0);
    assert_eq!(breakdown.category_ease_score, 65.0);
    assert_eq!(breakdown.strategic_opportunity_score, 25.0);
}

/// With no explicit forecast, the category's annual rate stands in.
#[test]
fn category_default_growth_applied() {
    let with_default = score(
        &market(60.0, 50.0, 4000.0),
        CategoryId::parse("technology"),
        None,
        50.0,
        55.0,
    );
    let with_explicit = score(
        &market(60.0, 50.0, 4000.0),
        CategoryId::parse("technology"),
        Some(0.25),
        50.0,
        55.0,
    );
    assert_eq!(with_default.overall, with_explicit.overall);
}

/// Classification rules evaluate in priority order; the Blue Ocean rule
/// fires before anything else when its conditions hold.
#[test]
fn opportunity_classification_priority() {
    // Blue Ocean: high demand, low saturation, strong score
    assert_eq!(
        classify_opportunity(75.0, 35.0, 70.0),
        OpportunityType::BlueOcean
    );
    // The Avoid rule would also fire for saturated weak-demand markets,
    // but a sub-45 score alone is enough.
    assert_eq!(
        classify_opportunity(44.0, 30.0, 80.0),
        OpportunityType::AvoidZone
    );
    assert_eq!(
        classify_opportunity(60.0, 80.0, 55.0),
        OpportunityType::AvoidZone,
        "saturated with weak demand is Avoid even above the score floor"
    );
    // Competitive but Doable: saturated yet scoring
    assert_eq!(
        classify_opportunity(58.0, 65.0, 70.0),
        OpportunityType::CompetitiveButDoable
    );
    // Everything else is Moderate
    assert_eq!(
        classify_opportunity(60.0, 50.0, 60.0),
        OpportunityType::ModerateOpportunity
    );
}

/// Avoid takes precedence over Competitive-but-Doable when both
/// preconditions overlap.
#[test]
fn avoid_beats_competitive_on_overlap() {
    // density > 75 and demand < 60: Avoid, even though density > 60
    // and the score clears the Competitive floor.
    assert_eq!(
        classify_opportunity(58.0, 80.0, 55.0),
        OpportunityType::AvoidZone
    );
}

/// Custom weights shift the emphasis.
#[test]
fn custom_weights_change_score() {
    let demand_heavy = BizScoreWeights {
        demand: 0.80,
        growth: 0.05,
        density: 0.05,
        competition: 0.05,
        category_ease: 0.025,
        strategic: 0.025,
    };
    let m = market(90.0, 70.0, 2000.0);
    let default_score = score(&m, None, Some(1.0), 70.0, 65.0);
    let weighted = score_with_weights(&m, None, Some(1.0), 70.0, 65.0, &demand_heavy);
    assert!(
        weighted.overall > default_score.overall,
        "demand-heavy weights should reward a high-demand market"
    );
}

/// Impact factors fire on their documented thresholds.
#[test]
fn impact_factors_fire_on_thresholds() {
    let breakdown = score(&market(80.0, 20.0, 12_000.0), None, Some(1.2), 20.0, 80.0);
    let names: Vec<&str> = breakdown.factors.iter().map(|f| f.name.as_str()).collect();
    assert!(names.contains(&"High Market Demand"));
    assert!(names.contains(&"Low Competition"));
    assert!(names.contains(&"Strategic Opportunity"));
    assert!(names.contains(&"Business-Friendly Category"));
    assert!(names.contains(&"High Population Density"));
    assert!(breakdown
        .factors
        .iter()
        .all(|f| f.impact == Impact::Positive));
}

/// Verbal rating bands.
#[test]
fn rating_bands() {
    assert_eq!(rating_for(85.0), ScoreRating::Excellent);
    assert_eq!(rating_for(70.0), ScoreRating::Good);
    assert_eq!(rating_for(55.0), ScoreRating::Moderate);
    assert_eq!(rating_for(30.0), ScoreRating::Challenging);
}
