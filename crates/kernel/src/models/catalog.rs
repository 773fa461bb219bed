//! Catalog models.

use serde::Serialize;

use super::prize::{Prize, PrizeId};

/// Catalog identifier.
pub type CatalogId = u64;

/// A catalog: an ordered sequence of prizes, kept in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub id: CatalogId,
    pub prizes: Vec<Prize>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(id: CatalogId) -> Self {
        Self {
            id,
            prizes: Vec::new(),
        }
    }

    /// Next prize id: one past the largest id held, or 1 when empty.
    pub fn next_prize_id(&self) -> PrizeId {
        self.prizes
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    pub fn prize(&self, prize_id: PrizeId) -> Option<&Prize> {
        self.prizes.iter().find(|p| p.id == prize_id)
    }

    pub fn prize_mut(&mut self, prize_id: PrizeId) -> Option<&mut Prize> {
        self.prizes.iter_mut().find(|p| p.id == prize_id)
    }
}

/// Public view of a catalog. The name is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub id: CatalogId,
    pub name: String,
}

impl CatalogSummary {
    pub fn new(id: CatalogId) -> Self {
        Self {
            id,
            name: format!("Catalog {id}"),
        }
    }
}
