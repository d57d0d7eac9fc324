use std::sync::Arc;

use axum::extract::FromRef;
use rand::{SeedableRng, rngs::StdRng};

use crate::{catalog::Catalog, models::emission::EmissionsTable};

/// Shared, read-only application state. Built once before the listener is bound.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<EmissionsTable>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Generates the emissions table from `catalog`.
    /// A `seed` makes the perturbation reproducible; `None` seeds from OS entropy.
    pub fn new(catalog: Catalog, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let table = EmissionsTable::generate(&catalog.countries, &mut rng);

        Self {
            table: Arc::new(table),
            catalog: Arc::new(catalog),
        }
    }
}

impl FromRef<AppState> for Arc<EmissionsTable> {
    fn from_ref(state: &AppState) -> Self {
        state.table.clone()
    }
}

impl FromRef<AppState> for Arc<Catalog> {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}
