//! Prize query types.
//!
//! A query is an optional filter (prize id, description substring, joined by
//! a logical operator) followed by optional offset/limit pagination.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::models::{Prize, PrizeId};

/// How the id and description conditions combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Every supplied condition must hold.
    And,
    /// Any supplied condition may hold.
    #[default]
    Or,
}

impl FromStr for LogicalOperator {
    type Err = UnknownOperator;

    /// Case-insensitive `AND` / `OR`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("and") {
            Ok(LogicalOperator::And)
        } else if s.eq_ignore_ascii_case("or") {
            Ok(LogicalOperator::Or)
        } else {
            Err(UnknownOperator(s.to_string()))
        }
    }
}

/// Returned when a logical operator is neither `AND` nor `OR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown logical operator '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

/// A prize filter.
///
/// When both `id` and `description` are `None` the filter matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrizeFilter {
    /// Exact prize id.
    pub id: Option<PrizeId>,

    /// Case-sensitive substring of the prize description.
    pub description: Option<String>,

    /// Combination of the supplied conditions (default: OR).
    pub operator: LogicalOperator,
}

impl PrizeFilter {
    /// Build a filter from a decoded `filter` parameter object.
    ///
    /// Lenient: an `id` that is not an unsigned integer (or a digit string)
    /// and a non-string `description` are treated as absent, and any
    /// operator other than a case-insensitive `AND` means `OR`.
    pub fn from_params(params: &Map<String, Value>) -> Self {
        let id = params.get("id").and_then(as_unsigned);
        let description = params
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string);
        let operator = params
            .get("logical_operator")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            id,
            description,
            operator,
        }
    }

    /// Whether the filter can match at all.
    pub fn has_conditions(&self) -> bool {
        self.id.is_some() || self.description.is_some()
    }

    /// Test a single prize against the filter.
    pub fn matches(&self, prize: &Prize) -> bool {
        let id_match = self.id.map(|id| prize.id == id);
        let description_match = self
            .description
            .as_deref()
            .map(|needle| prize.description.contains(needle));

        match (id_match, description_match) {
            (Some(a), Some(b)) => match self.operator {
                LogicalOperator::And => a && b,
                LogicalOperator::Or => a || b,
            },
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => false,
        }
    }
}

/// Offset/limit pagination, 1-indexed pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (default: 1).
    pub page: Option<u64>,

    /// Page size (default: the whole result).
    pub per_page: Option<u64>,
}

impl Pagination {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Half-open index window `[start, end)` for a result of `len` items.
    pub fn window(&self, len: usize) -> (usize, usize) {
        let len = len as u64;
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(len);

        let start = (page - 1).saturating_mul(per_page);
        let end = start.saturating_add(per_page);

        let clamp = |i: u64| usize::try_from(i.min(len)).unwrap_or(usize::MAX);
        (clamp(start), clamp(end))
    }
}

/// A complete prize query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrizeQuery {
    /// `None` means no filtering.
    pub filter: Option<PrizeFilter>,

    /// `None` means the whole filtered sequence.
    pub pagination: Option<Pagination>,
}

/// Read an unsigned integer from a JSON integer or an all-ASCII-digit string.
///
/// Digit strings beyond `u64` saturate to `u64::MAX`, a value no prize id or
/// page reaches.
pub(crate) fn as_unsigned(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            Some(s.parse().unwrap_or(u64::MAX))
        }
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_operator_parse_is_case_insensitive() {
        assert_eq!("and".parse::<LogicalOperator>().unwrap(), LogicalOperator::And);
        assert_eq!("Or".parse::<LogicalOperator>().unwrap(), LogicalOperator::Or);
        assert!("xor".parse::<LogicalOperator>().is_err());
    }

    #[test]
    fn test_filter_from_params_accepts_string_and_number_ids() {
        let f = PrizeFilter::from_params(&params(json!({"id": "2"})));
        assert_eq!(f.id, Some(2));
        let f = PrizeFilter::from_params(&params(json!({"id": 7})));
        assert_eq!(f.id, Some(7));
    }

    #[test]
    fn test_filter_from_params_drops_non_numeric_id() {
        let f = PrizeFilter::from_params(&params(json!({"id": "abc"})));
        assert_eq!(f.id, None);
        assert!(!f.has_conditions());
    }

    #[test]
    fn test_filter_from_params_unknown_operator_means_or() {
        let f = PrizeFilter::from_params(&params(json!({"description": "x", "logical_operator": "nand"})));
        assert_eq!(f.operator, LogicalOperator::Or);
    }

    #[test]
    fn test_matches_without_conditions_is_false() {
        let f = PrizeFilter::default();
        assert!(!f.matches(&Prize::seeded(1, 1)));
    }

    #[test]
    fn test_window_defaults_to_everything() {
        assert_eq!(Pagination::default().window(10), (0, 10));
    }

    #[test]
    fn test_window_clamps_past_end() {
        assert_eq!(Pagination::new(3, 4).window(10), (8, 10));
        assert_eq!(Pagination::new(4, 4).window(10), (10, 10));
        assert_eq!(Pagination::new(u64::MAX, 10).window(10), (10, 10));
    }

    #[test]
    fn test_as_unsigned() {
        assert_eq!(as_unsigned(&json!(3)), Some(3));
        assert_eq!(as_unsigned(&json!("03")), Some(3));
        assert_eq!(as_unsigned(&json!(-1)), None);
        assert_eq!(as_unsigned(&json!(1.0)), None);
        assert_eq!(as_unsigned(&json!("1.0")), None);
        assert_eq!(as_unsigned(&json!(true)), None);
        assert_eq!(as_unsigned(&json!("")), None);
    }

    #[test]
    fn test_as_unsigned_saturates_long_digit_strings() {
        assert_eq!(as_unsigned(&json!("18446744073709551615")), Some(u64::MAX));
        assert_eq!(as_unsigned(&json!("18446744073709551616")), Some(u64::MAX));
        assert_eq!(as_unsigned(&json!("9".repeat(40))), Some(u64::MAX));
    }
}
