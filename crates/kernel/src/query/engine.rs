//! Filter-then-paginate evaluation.

use crate::models::Prize;

use super::types::{Pagination, PrizeFilter, PrizeQuery};

/// Run a query over a catalog's prizes, preserving catalog order.
///
/// Filtering always happens before pagination.
pub fn run_query(prizes: &[Prize], query: &PrizeQuery) -> Vec<Prize> {
    let filtered: Vec<&Prize> = match &query.filter {
        Some(filter) => filter_prizes(prizes, filter),
        None => prizes.iter().collect(),
    };

    let page = match &query.pagination {
        Some(pagination) => paginate(&filtered, pagination),
        None => &filtered[..],
    };

    page.iter().map(|p| (*p).clone()).collect()
}

/// Keep the prizes matching `filter`. A filter without conditions keeps nothing.
pub fn filter_prizes<'a>(prizes: &'a [Prize], filter: &PrizeFilter) -> Vec<&'a Prize> {
    if !filter.has_conditions() {
        return Vec::new();
    }
    prizes.iter().filter(|p| filter.matches(p)).collect()
}

/// Slice one page out of `items`. Out-of-range pages are empty.
pub fn paginate<'a, T>(items: &'a [T], pagination: &Pagination) -> &'a [T] {
    let (start, end) = pagination.window(items.len());
    &items[start..end]
}
