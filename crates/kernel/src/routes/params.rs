//! Request parameter validation shared by the catalog and prize routes.
//!
//! Path segments arrive as raw strings and JSON query parameters as raw
//! text so that every malformed input maps to a 400 with a message naming
//! the violated constraint.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{CatalogId, PrizeId};
use crate::query::types::as_unsigned;
use crate::query::{LogicalOperator, Pagination, PrizeFilter, PrizeQuery};

/// Largest accepted `per_page`.
pub const MAX_PER_PAGE: u64 = 10;

/// Longest accepted filter description, in characters.
pub const MAX_FILTER_DESCRIPTION_CHARS: usize = 80;

pub const INVALID_PRIZE_PATH: &str = "Both catalog ID and prize ID should be integers.";
pub const INVALID_PARAM_FORMAT: &str = "Invalid filter or pagination format.";
pub const INVALID_PAGINATION: &str = "Invalid pagination format. Page and per_page should be positive integers with per_page no greater than 10.";
pub const INVALID_FILTER_ID: &str = "Filter ID should be a positive integer.";
pub const INVALID_FILTER_DESCRIPTION: &str = "Filter description should be a string.";
pub const FILTER_DESCRIPTION_TOO_LONG: &str =
    "Filter description should not exceed 80 characters.";
pub const INVALID_LOGICAL_OPERATOR: &str = "Invalid logical operator. Use 'AND' or 'OR'.";
pub const BODY_NOT_OBJECT: &str = "Request body should be a JSON object.";

/// Text of a single-parameter path.
///
/// A segment that does not decode (invalid UTF-8 after percent-decoding)
/// reads as empty, which every id parser below rejects with the route's own
/// message.
pub fn path_segment(path: Result<Path<String>, PathRejection>) -> String {
    match path {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            debug!(%rejection, "undecodable path segment");
            String::new()
        }
    }
}

/// Text of a catalog/prize path, decoded like [`path_segment`].
pub fn path_segments(path: Result<Path<(String, String)>, PathRejection>) -> (String, String) {
    match path {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            debug!(%rejection, "undecodable path segments");
            (String::new(), String::new())
        }
    }
}

/// Parse a path segment made only of ASCII digits.
pub fn parse_digit_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Parse a catalog id that must fall in the fixed range `[1, max]`.
///
/// `message` is the 400 message used for any violation.
pub fn fixed_range_catalog_id(
    raw: &str,
    max: CatalogId,
    message: impl FnOnce() -> String,
) -> AppResult<CatalogId> {
    match parse_digit_id(raw) {
        Some(id) if (1..=max).contains(&id) => Ok(id),
        _ => Err(AppError::BadRequest(message())),
    }
}

/// Parse the catalog and prize ids of a single-prize path. Any digit string
/// is accepted.
pub fn prize_path_ids(catalog_id: &str, prize_id: &str) -> AppResult<(CatalogId, PrizeId)> {
    match (parse_digit_id(catalog_id), parse_digit_id(prize_id)) {
        (Some(c), Some(p)) => Ok((c, p)),
        _ => Err(AppError::bad_request(INVALID_PRIZE_PATH)),
    }
}

/// Parse a catalog id as a general integer: surrounding whitespace and a
/// sign are allowed.
///
/// Returns `Ok(None)` for integers that cannot name a catalog (negative or
/// too large), which callers report as not found.
pub fn integer_catalog_id(raw: &str) -> AppResult<Option<CatalogId>> {
    let trimmed = raw.trim();
    match trimmed.parse::<i128>() {
        Ok(value) => Ok(CatalogId::try_from(value).ok()),
        Err(_) if is_signed_digits(trimmed) => Ok(None),
        Err(_) => Err(AppError::bad_request("Catalog ID should be a valid integer.")),
    }
}

/// An optional sign followed by at least one ASCII digit.
fn is_signed_digits(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Query string of the prize listing endpoint. Both values are JSON text.
#[derive(Debug, Default)]
pub struct ListPrizesParams {
    pub filter: Option<String>,
    pub pagination: Option<String>,
}

impl ListPrizesParams {
    /// Read the parameters from the extracted query string.
    pub fn from_query(
        query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    ) -> AppResult<Self> {
        let Query(pairs) = query.map_err(|rejection| {
            debug!(%rejection, "unreadable query string");
            AppError::bad_request(INVALID_PARAM_FORMAT)
        })?;
        Ok(Self::from_pairs(pairs))
    }

    /// Collect the parameters from decoded query pairs. When a key repeats,
    /// the first value wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "filter" => &mut params.filter,
                "pagination" => &mut params.pagination,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    /// Validate both parameters and build the query.
    ///
    /// Absent, empty and `{}` parameters impose nothing. Pagination bounds
    /// are checked first, then filter fields, then JSON well-formedness.
    pub fn into_query(self) -> AppResult<PrizeQuery> {
        let filter = decode_object(self.filter.as_deref());
        let pagination = decode_object(self.pagination.as_deref());

        let valid_pagination = match &pagination {
            Some(map) if !map.is_empty() => Some(validate_pagination(map)?),
            _ => None,
        };

        let valid_filter = match &filter {
            Some(map) if !map.is_empty() => Some(validate_filter(map)?),
            _ => None,
        };

        if filter.is_none() || pagination.is_none() {
            return Err(AppError::bad_request(INVALID_PARAM_FORMAT));
        }

        Ok(PrizeQuery {
            filter: valid_filter,
            pagination: valid_pagination,
        })
    }
}

/// Decode an optional JSON object parameter.
///
/// `None` when the text is present but not a JSON object.
fn decode_object(raw: Option<&str>) -> Option<Map<String, Value>> {
    match raw {
        None | Some("") => Some(Map::new()),
        Some(text) => match serde_json::from_str(text) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        },
    }
}

/// Both `page` and `per_page` are required: unsigned integers or digit
/// strings, `page >= 1`, `1 <= per_page <= 10`.
pub fn validate_pagination(params: &Map<String, Value>) -> AppResult<Pagination> {
    let page = params.get("page").and_then(as_unsigned);
    let per_page = params.get("per_page").and_then(as_unsigned);

    match (page, per_page) {
        (Some(page), Some(per_page)) if page >= 1 && (1..=MAX_PER_PAGE).contains(&per_page) => {
            Ok(Pagination::new(page, per_page))
        }
        _ => Err(AppError::bad_request(INVALID_PAGINATION)),
    }
}

/// Check each supplied filter field, then build the filter.
pub fn validate_filter(params: &Map<String, Value>) -> AppResult<PrizeFilter> {
    if let Some(id) = params.get("id") {
        if !as_unsigned(id).is_some_and(|id| id >= 1) {
            return Err(AppError::bad_request(INVALID_FILTER_ID));
        }
    }

    if let Some(description) = params.get("description") {
        let Some(description) = description.as_str() else {
            return Err(AppError::bad_request(INVALID_FILTER_DESCRIPTION));
        };
        if description.chars().count() > MAX_FILTER_DESCRIPTION_CHARS {
            return Err(AppError::bad_request(FILTER_DESCRIPTION_TOO_LONG));
        }
    }

    if let Some(operator) = params.get("logical_operator") {
        let valid = operator
            .as_str()
            .is_some_and(|s| s.parse::<LogicalOperator>().is_ok());
        if !valid {
            return Err(AppError::bad_request(INVALID_LOGICAL_OPERATOR));
        }
    }

    Ok(PrizeFilter::from_params(params))
}

/// Decode a create/update request body.
///
/// An empty body, `null` or `{}` is reported with `empty_message`.
pub fn json_body<T: DeserializeOwned>(body: &[u8], empty_message: &str) -> AppResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::bad_request(empty_message));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::bad_request(format!("Request body is not valid JSON: {e}")))?;

    match &value {
        Value::Object(map) if map.is_empty() => {
            return Err(AppError::bad_request(empty_message));
        }
        Value::Object(_) => {}
        Value::Null => return Err(AppError::bad_request(empty_message)),
        _ => return Err(AppError::bad_request(BODY_NOT_OBJECT)),
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::bad_request(format!("Invalid prize data: {e}")))
}
