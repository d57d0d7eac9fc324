// src/models/emission.rs

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{catalog::CountryProfile, error::AppError, utils::math::round_to};

pub const FIRST_YEAR: i32 = 2000;
pub const LAST_YEAR: i32 = 2023;

/// Linear growth applied per year since `FIRST_YEAR`.
pub const YEARLY_GROWTH: f64 = 0.015;

/// Bound of the uniform perturbation, as a fraction of the trend value.
pub const MAX_VARIATION: f64 = 0.2;

/// One (country, year) emissions observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    pub country: String,
    pub code: String,
    pub emissions: f64,
    pub year: i32,
}

/// Synthetic emissions data, generated once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct EmissionsTable {
    records: Vec<EmissionRecord>,
}

impl EmissionsTable {
    /// Builds one record per country per year in `FIRST_YEAR..=LAST_YEAR`.
    ///
    /// Records are ordered by year, then by the order of `countries`.
    /// `emissions = base * (1 + YEARLY_GROWTH * (year - FIRST_YEAR)) * (1 + U)` with
    /// `U` uniform in `[-MAX_VARIATION, MAX_VARIATION]`, rounded to one decimal.
    pub fn generate<R: Rng>(countries: &[CountryProfile], rng: &mut R) -> Self {
        let mut records = Vec::with_capacity(countries.len() * (LAST_YEAR - FIRST_YEAR + 1) as usize);

        for year in FIRST_YEAR..=LAST_YEAR {
            let year_factor = 1.0 + f64::from(year - FIRST_YEAR) * YEARLY_GROWTH;
            for profile in countries {
                let variation: f64 = rng.random_range(-MAX_VARIATION..=MAX_VARIATION);
                let emissions = profile.base_emissions * year_factor * (1.0 + variation);

                records.push(EmissionRecord {
                    country: profile.country.clone(),
                    code: profile.code.clone(),
                    emissions: round_to(emissions, 1),
                    year,
                });
            }
        }

        Self { records }
    }

    pub fn records(&self) -> &[EmissionRecord] {
        &self.records
    }

    /// Returns every record, or only those for `year`.
    /// A year with no records is `NotFound`.
    pub fn list(&self, year: Option<i64>) -> Result<Vec<EmissionRecord>, AppError> {
        let Some(year) = year else {
            return Ok(self.records.clone());
        };

        let filtered: Vec<EmissionRecord> = self
            .records
            .iter()
            .filter(|r| i64::from(r.year) == year)
            .cloned()
            .collect();

        if filtered.is_empty() {
            return Err(AppError::NotFound(format!("No data found for year {}", year)));
        }

        Ok(filtered)
    }

    /// Distinct years present, ascending.
    pub fn available_years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Response body for `GET /api/emissions/years`.
#[derive(Debug, Serialize, Deserialize)]
pub struct YearsResponse {
    pub years: Vec<i32>,
}

/// Query parameters for listing emissions.
#[derive(Debug, Deserialize)]
pub struct EmissionsQuery {
    /// Any integer is accepted; years outside the dataset are `NotFound`.
    pub year: Option<i64>,
}
