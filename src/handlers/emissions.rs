// src/handlers/emissions.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::emission::{EmissionsQuery, EmissionsTable, YearsResponse},
};

/// Lists all emission records, optionally filtered by year.
pub async fn list_emissions(
    State(table): State<Arc<EmissionsTable>>,
    query: Result<Query<EmissionsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;

    let records = table.list(params.year).inspect_err(|e| {
        tracing::debug!("Emissions lookup failed: {:?}", e);
    })?;

    Ok(Json(records))
}

/// Lists the distinct years covered by the dataset.
pub async fn list_years(State(table): State<Arc<EmissionsTable>>) -> impl IntoResponse {
    Json(YearsResponse {
        years: table.available_years(),
    })
}
