//! Catalog and prize models.

pub mod catalog;
pub mod prize;

pub use catalog::{Catalog, CatalogId, CatalogSummary};
pub use prize::{CreatePrize, Prize, PrizeId, UpdatePrize};
