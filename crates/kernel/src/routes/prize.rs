//! Prize API routes.
//!
//! Listing (with filter and pagination), retrieval, creation, update and
//! deletion of the prizes held by a catalog.

use axum::{
    Router,
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{CatalogId, CreatePrize, Prize, PrizeId, UpdatePrize};
use crate::routes::params::{self, ListPrizesParams};
use crate::state::AppState;

/// Create the prize router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/catalogs/{catalog_id}/prizes", get(list_prizes))
        .route("/api/catalogs/{catalog_id}/prize", post(create_prize))
        .route(
            "/api/catalogs/{catalog_id}/prize/{prize_id}",
            get(get_prize).put(update_prize).delete(delete_prize),
        )
}

// -------------------------------------------------------------------------
// Response types
// -------------------------------------------------------------------------

/// A page of prizes. `total` counts the prizes in this response.
#[derive(Serialize)]
struct PrizeListResponse {
    total: usize,
    prizes: Vec<Prize>,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

// -------------------------------------------------------------------------
// Handlers
// -------------------------------------------------------------------------

async fn list_prizes(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<PrizeListResponse>> {
    let max = state.fixed_catalog_max();
    let catalog_id = params::fixed_range_catalog_id(&params::path_segment(path), max, || {
        format!("Catalog ID should be an integer between 1 and {max}.")
    })?;

    let query = ListPrizesParams::from_query(query)?.into_query()?;
    debug!(catalog_id, ?query, "listing prizes");

    let prizes = state
        .catalogs()
        .query_prizes(catalog_id, &query)
        .ok_or_else(|| {
            AppError::not_found(format!(
                "Catalog {catalog_id} not found. The catalog ID should be an integer between 1 and {max}."
            ))
        })?;

    Ok(Json(PrizeListResponse {
        total: prizes.len(),
        prizes,
    }))
}

async fn get_prize(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> AppResult<Json<Prize>> {
    let (catalog_id, prize_id) = params::path_segments(path);
    let (catalog_id, prize_id) = params::prize_path_ids(&catalog_id, &prize_id)?;

    require_catalog(&state, catalog_id)?;

    let prize = state
        .catalogs()
        .get_prize(catalog_id, prize_id)
        .ok_or_else(|| prize_not_found(catalog_id, prize_id))?;

    Ok(Json(prize))
}

async fn create_prize(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Prize>)> {
    let max = state.fixed_catalog_max();
    let catalog_id = params::fixed_range_catalog_id(&params::path_segment(path), max, || {
        format!("Catalog ID should be a valid integer between 1 and {max}.")
    })?;

    let input: CreatePrize = params::json_body(&body, "No data provided for creating prize.")?;

    let prize = state
        .catalogs()
        .create_prize(catalog_id, input)
        .ok_or_else(|| catalog_not_found(catalog_id))?;

    Ok((StatusCode::CREATED, Json(prize)))
}

async fn update_prize(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
    body: Bytes,
) -> AppResult<Json<Prize>> {
    let (catalog_id, prize_id) = params::path_segments(path);
    let (catalog_id, prize_id) = params::prize_path_ids(&catalog_id, &prize_id)?;

    let input: UpdatePrize = params::json_body(&body, "No data provided for update.")?;

    let prize = state
        .catalogs()
        .update_prize(catalog_id, prize_id, input)
        .ok_or_else(|| prize_not_found(catalog_id, prize_id))?;

    Ok(Json(prize))
}

async fn delete_prize(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let (catalog_id, prize_id) = params::path_segments(path);
    let (catalog_id, prize_id) = params::prize_path_ids(&catalog_id, &prize_id)?;

    if !state.catalogs().delete_prize(catalog_id, prize_id) {
        return Err(prize_not_found(catalog_id, prize_id));
    }

    Ok(Json(MessageResponse {
        message: format!(
            "Prize with ID {prize_id} in catalog with ID {catalog_id} deleted successfully."
        ),
    }))
}

// -------------------------------------------------------------------------
// Helpers
// -------------------------------------------------------------------------

fn require_catalog(state: &AppState, catalog_id: CatalogId) -> AppResult<()> {
    if state.catalogs().contains_catalog(catalog_id) {
        Ok(())
    } else {
        Err(catalog_not_found(catalog_id))
    }
}

fn catalog_not_found(catalog_id: CatalogId) -> AppError {
    AppError::not_found(format!("Catalog {catalog_id} not found."))
}

fn prize_not_found(catalog_id: CatalogId, prize_id: PrizeId) -> AppError {
    AppError::not_found(format!(
        "Prize with ID {prize_id} not found in catalog {catalog_id}."
    ))
}
