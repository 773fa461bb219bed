//! In-memory catalog store.
//!
//! Holds every catalog and its prizes for the lifetime of the process.
//! Each operation takes the lock exactly once, so an existence check and
//! the mutation that depends on it cannot interleave with another request.

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::models::{Catalog, CatalogId, CreatePrize, Prize, PrizeId, UpdatePrize};
use crate::query::{self, PrizeQuery};

/// Catalog store.
///
/// Catalogs are kept in insertion order. All lookups are linear scans.
#[derive(Debug, Default)]
pub struct CatalogStore {
    catalogs: RwLock<Vec<Catalog>>,
}

impl CatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `num_catalogs` catalogs of `prizes_per_catalog`
    /// prizes each.
    ///
    /// Prize ids are a running counter across catalogs: catalog 1 holds
    /// prizes 1..=N, catalog 2 holds N+1..=2N, and so on.
    pub fn seeded(num_catalogs: u64, prizes_per_catalog: u64) -> Self {
        let store = Self::new();
        for catalog_id in 1..=num_catalogs {
            let offset = (catalog_id - 1).saturating_mul(prizes_per_catalog);
            for n in 1..=prizes_per_catalog {
                store.add_prize(catalog_id, Prize::seeded(offset.saturating_add(n), catalog_id));
            }
        }
        store
    }

    /// Create an empty catalog. Returns `false` if `id` is taken.
    pub fn create_catalog(&self, id: CatalogId) -> bool {
        let mut catalogs = self.catalogs.write();
        if catalogs.iter().any(|c| c.id == id) {
            return false;
        }
        catalogs.push(Catalog::new(id));
        info!(catalog_id = id, "catalog created");
        true
    }

    /// Create an empty catalog at the lowest id not in use, starting from 1.
    ///
    /// Returns `None` only when the id space is exhausted.
    pub fn create_next_catalog(&self) -> Option<CatalogId> {
        let mut catalogs = self.catalogs.write();
        let mut id: CatalogId = 1;
        while catalogs.iter().any(|c| c.id == id) {
            id = id.checked_add(1)?;
        }
        catalogs.push(Catalog::new(id));
        info!(catalog_id = id, "catalog created");
        Some(id)
    }

    /// Delete a catalog and all of its prizes. Returns `false` if absent.
    pub fn delete_catalog(&self, id: CatalogId) -> bool {
        let mut catalogs = self.catalogs.write();
        let Some(index) = catalogs.iter().position(|c| c.id == id) else {
            return false;
        };
        let removed = catalogs.remove(index);
        info!(
            catalog_id = id,
            prizes = removed.prizes.len(),
            "catalog deleted"
        );
        true
    }

    /// Whether a catalog exists.
    pub fn contains_catalog(&self, id: CatalogId) -> bool {
        self.catalogs.read().iter().any(|c| c.id == id)
    }

    /// Catalog ids in insertion order.
    pub fn catalog_ids(&self) -> Vec<CatalogId> {
        self.catalogs.read().iter().map(|c| c.id).collect()
    }

    /// Number of catalogs.
    pub fn catalog_count(&self) -> usize {
        self.catalogs.read().len()
    }

    /// Snapshot of a catalog's prizes.
    ///
    /// Empty both when the catalog is absent and when it holds no prizes;
    /// use [`contains_catalog`](Self::contains_catalog) to tell them apart.
    pub fn get_catalog(&self, id: CatalogId) -> Vec<Prize> {
        self.catalogs
            .read()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.prizes.clone())
            .unwrap_or_default()
    }

    /// Append a prize, creating the catalog if needed.
    ///
    /// Used for seeding; request handlers go through
    /// [`create_prize`](Self::create_prize), which never creates catalogs.
    pub fn add_prize(&self, catalog_id: CatalogId, prize: Prize) {
        let mut catalogs = self.catalogs.write();
        match catalogs.iter_mut().find(|c| c.id == catalog_id) {
            Some(catalog) => catalog.prizes.push(prize),
            None => {
                let mut catalog = Catalog::new(catalog_id);
                catalog.prizes.push(prize);
                catalogs.push(catalog);
            }
        }
    }

    /// Create a prize in an existing catalog with id = max existing id + 1
    /// (or 1 when the catalog is empty).
    pub fn create_prize(&self, catalog_id: CatalogId, input: CreatePrize) -> Option<Prize> {
        let mut catalogs = self.catalogs.write();
        let catalog = catalogs.iter_mut().find(|c| c.id == catalog_id)?;
        let prize = input.into_prize(catalog.next_prize_id());
        catalog.prizes.push(prize.clone());
        info!(catalog_id, prize_id = prize.id, "prize created");
        Some(prize)
    }

    /// Overwrite the supplied fields of a prize in place.
    pub fn update_prize(
        &self,
        catalog_id: CatalogId,
        prize_id: PrizeId,
        input: UpdatePrize,
    ) -> Option<Prize> {
        let mut catalogs = self.catalogs.write();
        let prize = catalogs
            .iter_mut()
            .find(|c| c.id == catalog_id)?
            .prize_mut(prize_id)?;
        input.apply_to(prize);
        info!(catalog_id, prize_id, "prize updated");
        Some(prize.clone())
    }

    /// Remove a prize. Returns `false` if the catalog or prize is absent.
    pub fn delete_prize(&self, catalog_id: CatalogId, prize_id: PrizeId) -> bool {
        let mut catalogs = self.catalogs.write();
        let Some(catalog) = catalogs.iter_mut().find(|c| c.id == catalog_id) else {
            return false;
        };
        let Some(index) = catalog.prizes.iter().position(|p| p.id == prize_id) else {
            return false;
        };
        catalog.prizes.remove(index);
        info!(catalog_id, prize_id, "prize deleted");
        true
    }

    /// Look up a single prize.
    pub fn get_prize(&self, catalog_id: CatalogId, prize_id: PrizeId) -> Option<Prize> {
        self.catalogs
            .read()
            .iter()
            .find(|c| c.id == catalog_id)?
            .prize(prize_id)
            .cloned()
    }

    /// Filter and paginate a catalog's prizes. `None` if the catalog is absent.
    pub fn query_prizes(&self, catalog_id: CatalogId, query: &PrizeQuery) -> Option<Vec<Prize>> {
        let catalogs = self.catalogs.read();
        let catalog = catalogs.iter().find(|c| c.id == catalog_id)?;
        let result = query::run_query(&catalog.prizes, query);
        debug!(
            catalog_id,
            considered = catalog.prizes.len(),
            returned = result.len(),
            "prize query"
        );
        Some(result)
    }

    /// Log every catalog and prize at debug level.
    pub fn log_contents(&self) {
        for catalog in self.catalogs.read().iter() {
            debug!(catalog_id = catalog.id, prizes = catalog.prizes.len(), "catalog");
            for prize in &catalog.prizes {
                debug!(
                    catalog_id = catalog.id,
                    prize_id = prize.id,
                    title = %prize.title,
                    description = %prize.description,
                    image = %prize.image,
                    "prize"
                );
            }
        }
    }
}
