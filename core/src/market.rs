//! Market signal — the immutable input record for one location/category
//! pairing. Constructed once per analysis request from externally-sourced
//! data (geocoding and demand collaborators); the engine never mutates it.

use crate::types::CompetitionDensity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketSignal {
    /// Consumer demand for the category at this location, 0-100.
    pub demand_index: f64,
    /// Categorical competitor saturation.
    pub competition_density: CompetitionDensity,
    /// Competitor saturation as a continuous 0-100 index.
    pub competition_index: f64,
    /// Number of directly competing outlets nearby.
    pub competition_count: u32,
    /// People per square kilometre.
    pub population_density: f64,
    /// Average household income, in lakhs.
    pub avg_income: f64,
    /// Internet penetration, 0-100.
    pub internet_penetration: f64,
    /// Literacy rate, 0-100.
    pub literacy_rate: f64,
}

impl MarketSignal {
    /// Clamp every numeric field into its documented domain. Out-of-range
    /// values from upstream collaborators are coerced, not rejected, since
    /// the engine is a best-effort advisory tool.
    pub fn sanitized(mut self) -> Self {
        self.demand_index = self.demand_index.clamp(0.0, 100.0);
        self.competition_index = self.competition_index.clamp(0.0, 100.0);
        self.population_density = self.population_density.max(0.0);
        self.avg_income = self.avg_income.max(0.0);
        self.internet_penetration = self.internet_penetration.clamp(0.0, 100.0);
        self.literacy_rate = self.literacy_rate.clamp(0.0, 100.0);
        self
    }
}
