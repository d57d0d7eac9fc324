// src/handlers/glacier.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    catalog::Catalog,
    error::AppError,
    models::glacier::{DEFAULT_SCORE, GlacierParams, GlacierQuery},
};

/// Derives glacier visualization parameters from a quiz score (default 3).
pub async fn your_glacier(
    State(catalog): State<Arc<Catalog>>,
    query: Result<Query<GlacierQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;
    params.validate()?;

    let score = params.score.unwrap_or(DEFAULT_SCORE);
    let glacier = GlacierParams::from_score(score, catalog.total_questions())?;

    Ok(Json(glacier))
}
