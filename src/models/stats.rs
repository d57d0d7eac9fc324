// src/models/stats.rs

use serde::{Deserialize, Serialize};

/// Headline climate figures shown on the homepage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateStats {
    pub annual_co2_emissions: String,
    pub glacier_ice_lost_yearly: String,
    pub sea_level_rise_per_year: String,
    pub last_updated: String,
}

impl ClimateStats {
    pub fn current() -> Self {
        Self {
            annual_co2_emissions: "36.8B".to_string(),
            glacier_ice_lost_yearly: "150B".to_string(),
            sea_level_rise_per_year: "3.4mm".to_string(),
            last_updated: "2024".to_string(),
        }
    }
}
