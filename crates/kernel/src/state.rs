//! Application state shared across all handlers.

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::models::CatalogId;
use crate::store::CatalogStore;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Catalogs and their prizes.
    catalogs: CatalogStore,

    /// Upper bound of the fixed catalog id range `[1, max]` checked by
    /// prize listing, prize creation and catalog deletion.
    fixed_catalog_max: CatalogId,
}

impl AppState {
    /// Build state from configuration, seeding the catalog store.
    pub fn new(config: &Config) -> Self {
        let catalogs = CatalogStore::seeded(config.seed_catalogs, config.prizes_per_catalog);

        info!(
            catalogs = config.seed_catalogs,
            prizes_per_catalog = config.prizes_per_catalog,
            "Catalog store seeded"
        );

        if config.log_seeded_catalogs {
            catalogs.log_contents();
        }

        Self::with_store(catalogs, config.seed_catalogs)
    }

    /// Build state around an existing store.
    pub fn with_store(catalogs: CatalogStore, fixed_catalog_max: CatalogId) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                catalogs,
                fixed_catalog_max,
            }),
        }
    }

    /// Get the catalog store.
    pub fn catalogs(&self) -> &CatalogStore {
        &self.inner.catalogs
    }

    /// Upper bound of the fixed catalog id range.
    pub fn fixed_catalog_max(&self) -> CatalogId {
        self.inner.fixed_catalog_max
    }
}
