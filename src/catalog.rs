// src/catalog.rs

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a content catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// Generator input for one country. Never exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryProfile {
    pub country: String,

    /// ISO-like short code (e.g., "US").
    pub code: String,

    /// Emissions in the year 2000, before growth and perturbation.
    pub base_emissions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub prompt: String,
    pub options: Vec<String>,

    /// Index into `options`.
    pub correct_answer: i64,
}

/// Versioned content the service is built from: the countries the dataset
/// covers and the quiz the answer key is derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub countries: Vec<CountryProfile>,
    pub questions: Vec<QuizQuestion>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let countries = [
            ("United States", "US", 5000.0),
            ("China", "CN", 10000.0),
            ("India", "IN", 2500.0),
            ("Russia", "RU", 1800.0),
            ("Japan", "JP", 1200.0),
            ("Germany", "DE", 800.0),
            ("Brazil", "BR", 500.0),
            ("Canada", "CA", 600.0),
            ("United Kingdom", "GB", 400.0),
            ("France", "FR", 350.0),
        ]
        .into_iter()
        .map(|(country, code, base_emissions)| CountryProfile {
            country: country.to_string(),
            code: code.to_string(),
            base_emissions,
        })
        .collect();

        let questions = vec![
            question(
                1,
                "What percentage of the Earth's freshwater is stored in glaciers and ice sheets?",
                &["25%", "50%", "75%", "90%"],
                2,
            ),
            question(
                2,
                "How much ice do glaciers lose annually worldwide?",
                &["50 billion tons", "100 billion tons", "150 billion tons", "200 billion tons"],
                2,
            ),
            question(
                3,
                "Which region has experienced the fastest glacier retreat?",
                &["Antarctica", "Arctic", "Himalayas", "Alps"],
                1,
            ),
            question(
                4,
                "How much has the global sea level risen since 1880?",
                &["10-15 cm", "20-25 cm", "30-35 cm", "40-45 cm"],
                1,
            ),
            question(
                5,
                "What is the primary cause of glacier retreat?",
                &["Natural cycles", "Solar radiation", "Global warming", "Ocean currents"],
                2,
            ),
        ];

        Self {
            version: "2024.1".to_string(),
            countries,
            questions,
        }
    }

    /// Loads a catalog from a JSON file and validates it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.countries.is_empty() {
            return Err(CatalogError::Invalid("no countries defined".to_string()));
        }
        if self.questions.is_empty() {
            return Err(CatalogError::Invalid("no questions defined".to_string()));
        }

        let mut codes = HashSet::new();
        for profile in &self.countries {
            if !codes.insert(profile.code.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate country code '{}'",
                    profile.code
                )));
            }
            if profile.base_emissions < 0.0 {
                return Err(CatalogError::Invalid(format!(
                    "country '{}' has negative base emissions {}",
                    profile.code, profile.base_emissions
                )));
            }
        }

        for q in &self.questions {
            if q.options.len() < 2 {
                return Err(CatalogError::Invalid(format!(
                    "question {} needs at least two options",
                    q.id
                )));
            }
            let in_range = usize::try_from(q.correct_answer)
                .map(|idx| idx < q.options.len())
                .unwrap_or(false);
            if !in_range {
                return Err(CatalogError::Invalid(format!(
                    "question {} has correct_answer {} outside its {} options",
                    q.id,
                    q.correct_answer,
                    q.options.len()
                )));
            }
        }

        Ok(())
    }

    /// Correct option index per question, in quiz order.
    pub fn answer_key(&self) -> Vec<i64> {
        self.questions.iter().map(|q| q.correct_answer).collect()
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}

fn question(id: i64, prompt: &str, options: &[&str], correct_answer: i64) -> QuizQuestion {
    QuizQuestion {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_valid() {
        let catalog = Catalog::builtin();
        catalog.validate().unwrap();
        assert_eq!(catalog.countries.len(), 10);
        assert_eq!(catalog.answer_key(), vec![2, 2, 1, 1, 2]);
        assert_eq!(catalog.total_questions(), 5);
    }

    #[test]
    fn builtin_survives_json() {
        let raw = serde_json::to_string(&Catalog::builtin()).unwrap();
        assert_eq!(Catalog::from_json_str(&raw).unwrap(), Catalog::builtin());
    }

    #[test]
    fn rejects_duplicate_codes() {
        let mut catalog = Catalog::builtin();
        catalog.countries[1].code = "US".to_string();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate country code 'US'"));
    }

    #[test]
    fn rejects_negative_base_emissions() {
        let mut catalog = Catalog::builtin();
        catalog.countries[0].base_emissions = -5000.0;
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("country 'US' has negative base emissions"));

        catalog.countries[0].base_emissions = 0.0;
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn loads_catalog_from_file() {
        let mut catalog = Catalog::builtin();
        catalog.version = "2025.2".to_string();
        catalog.countries.truncate(3);

        let path = std::env::temp_dir()
            .join(format!("glactrack-catalog-{}.json", std::process::id()));
        fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

        let loaded = Catalog::from_json_file(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.unwrap(), catalog);
    }

    #[test]
    fn rejects_answer_outside_options() {
        let mut catalog = Catalog::builtin();
        catalog.questions[0].correct_answer = 4;
        assert!(matches!(catalog.validate(), Err(CatalogError::Invalid(_))));

        catalog.questions[0].correct_answer = -1;
        assert!(matches!(catalog.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn rejects_empty_lists() {
        let mut catalog = Catalog::builtin();
        catalog.questions.clear();
        assert!(catalog.validate().is_err());

        let mut catalog = Catalog::builtin();
        catalog.countries.clear();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json_str("{\"version\": 1}"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Catalog::from_json_file("/nonexistent/catalog.json"),
            Err(CatalogError::Io { .. })
        ));
    }
}
