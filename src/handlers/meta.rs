// src/handlers/meta.rs

use axum::{Json, response::IntoResponse};
use serde_json::json;

use crate::models::stats::ClimateStats;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "GlaCTrack API - Glacier Carbon Tracker"
    }))
}

/// Climate statistics for the homepage.
pub async fn climate_stats() -> impl IntoResponse {
    Json(ClimateStats::current())
}
