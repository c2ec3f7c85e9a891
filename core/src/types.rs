//! Shared primitive types and closed enums used across the entire engine.
//!
//! RULE: every categorical input is a closed enum, never a free string.
//! Lookup tables over these enums are total matches with an explicit
//! default arm, so an unknown or missing value can never panic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable, unique identifier for a feasibility report.
pub type ReportId = String;

/// Saturation level of existing competitors at a location.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionDensity {
    Low,
    Balanced,
    High,
    Oversaturated,
}

impl fmt::Display for CompetitionDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompetitionDensity::Low => "Low",
            CompetitionDensity::Balanced => "Balanced",
            CompetitionDensity::High => "High",
            CompetitionDensity::Oversaturated => "Oversaturated",
        };
        f.write_str(s)
    }
}

/// Four-tier difficulty scale used for category difficulty, capital need
/// and operational complexity alike.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Low => "Low",
            Difficulty::Medium => "Medium",
            Difficulty::High => "High",
            Difficulty::VeryHigh => "Very High",
        };
        f.write_str(s)
    }
}

/// Foot traffic a category needs to sustain itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Footfall {
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// Price positioning of a category's typical offering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PricingSegment {
    Budget,
    MidRange,
    Premium,
    Luxury,
}

/// Staffing requirement tiers, sourced from the parsed-idea collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Staffing {
    Minimal,
    Moderate,
    Extensive,
}

/// Coarse financial-viability grade fed into failure prediction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Viability {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Direction of an impact factor on the composite score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

/// Five-band risk classification shared by the risk index, failure
/// prediction and recommendation tiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        };
        f.write_str(s)
    }
}

/// Market classification derived from score, demand and competition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityType {
    BlueOcean,
    ModerateOpportunity,
    CompetitiveButDoable,
    AvoidZone,
}

impl fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OpportunityType::BlueOcean => "Blue Ocean",
            OpportunityType::ModerateOpportunity => "Moderate Opportunity",
            OpportunityType::CompetitiveButDoable => "Competitive but Doable",
            OpportunityType::AvoidZone => "Avoid Zone",
        };
        f.write_str(s)
    }
}

/// Verdict classes produced by the recommendation engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationType {
    StartNow,
    StartCaution,
    WaitMonitor,
    Avoid,
}

impl RecommendationType {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationType::StartNow => "Start Now",
            RecommendationType::StartCaution => "Start with Caution",
            RecommendationType::WaitMonitor => "Wait & Monitor",
            RecommendationType::Avoid => "Avoid This Location",
        }
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the 12-month outlook is heading relative to today.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Growing,
    Stable,
    Declining,
}

/// An inclusive money band, rounded to whole currency units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CashRange {
    pub min: i64,
    pub max: i64,
}

impl CashRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the band, used for break-even arithmetic.
    pub fn mid(&self) -> f64 {
        (self.min + self.max) as f64 / 2.0
    }
}

/// An inclusive percentage band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PercentRange {
    pub min: f64,
    pub max: f64,
}

impl PercentRange {
    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}
