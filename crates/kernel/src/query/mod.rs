//! Prize query engine.
//!
//! This module provides:
//! - Types: PrizeQuery, PrizeFilter, LogicalOperator, Pagination
//! - Engine: filter-then-paginate evaluation over a catalog's prizes

mod engine;
pub mod types;

pub use engine::{filter_prizes, paginate, run_query};
pub use types::{LogicalOperator, Pagination, PrizeFilter, PrizeQuery};
