// src/models/glacier.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Score used when the client does not send one.
pub const DEFAULT_SCORE: i64 = 3;

/// Query parameters for `GET /api/your-glacier`.
#[derive(Debug, Deserialize, Validate)]
pub struct GlacierQuery {
    #[validate(range(min = 0, message = "Score must not be negative"))]
    pub score: Option<i64>,
}

/// Visualization parameters for the 3D glacier, derived from a quiz score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlacierParams {
    pub scale: f64,
    pub color_tint: String,
    pub rotation_speed: f64,
}

impl GlacierParams {
    /// Maps `score` out of `total` onto glacier parameters.
    ///
    /// Scores outside `0..=total` are rejected, so the ratio is always in `[0, 1]`.
    pub fn from_score(score: i64, total: usize) -> Result<Self, AppError> {
        let total = i64::try_from(total).unwrap_or(i64::MAX);
        if total == 0 || !(0..=total).contains(&score) {
            return Err(AppError::BadRequest(format!(
                "Score must be between 0 and {}, got {}",
                total, score
            )));
        }

        let ratio = score as f64 / total as f64;

        Ok(Self {
            scale: (0.5 + ratio).clamp(0.5, 1.5),
            color_tint: color_tint(ratio).to_string(),
            rotation_speed: 0.05 + ratio * 0.1,
        })
    }
}

/// Higher ratios get cooler tints.
fn color_tint(ratio: f64) -> &'static str {
    if ratio >= 0.8 {
        "#77D9D9"
    } else if ratio >= 0.6 {
        "#90EE90"
    } else if ratio >= 0.4 {
        "#FFD700"
    } else {
        "#FF6B6B"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn perfect_score() {
        let params = GlacierParams::from_score(5, 5).unwrap();
        assert!(approx(params.scale, 1.5));
        assert_eq!(params.color_tint, "#77D9D9");
        assert!(approx(params.rotation_speed, 0.15));
    }

    #[test]
    fn default_score() {
        let params = GlacierParams::from_score(DEFAULT_SCORE, 5).unwrap();
        assert!(approx(params.scale, 1.1));
        assert_eq!(params.color_tint, "#90EE90");
        assert!(approx(params.rotation_speed, 0.11));
    }

    #[test]
    fn low_scores() {
        let two = GlacierParams::from_score(2, 5).unwrap();
        assert_eq!(two.color_tint, "#FFD700");

        let zero = GlacierParams::from_score(0, 5).unwrap();
        assert!(approx(zero.scale, 0.5));
        assert_eq!(zero.color_tint, "#FF6B6B");
        assert!(approx(zero.rotation_speed, 0.05));
    }

    #[test]
    fn out_of_range_is_rejected() {
        match GlacierParams::from_score(6, 5) {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Score must be between 0 and 5, got 6"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
        assert!(GlacierParams::from_score(-1, 5).is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(GlacierParams::from_score(4, 5).unwrap()).unwrap();
        assert_eq!(json["colorTint"], "#77D9D9");
        assert!(json.get("rotationSpeed").is_some());
    }

    #[test]
    fn query_rejects_negative_score() {
        assert!(GlacierQuery { score: Some(-2) }.validate().is_err());
        assert!(GlacierQuery { score: None }.validate().is_ok());
    }
}
