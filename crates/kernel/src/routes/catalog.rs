//! Catalog API routes.

use axum::{
    Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{CatalogId, CatalogSummary};
use crate::routes::params;
use crate::state::AppState;

/// Create the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/catalogs", get(list_catalogs))
        .route("/api/catalog", post(create_catalog))
        .route(
            "/api/catalog/{catalog_id}",
            get(get_catalog).delete(delete_catalog),
        )
}

// -------------------------------------------------------------------------
// Response types
// -------------------------------------------------------------------------

#[derive(Serialize)]
struct CatalogListResponse {
    catalogs: Vec<CatalogSummary>,
}

#[derive(Serialize)]
struct CatalogResponse {
    catalog: CatalogSummary,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct CatalogCreatedResponse {
    message: String,
    catalog_id: CatalogId,
}

// -------------------------------------------------------------------------
// Handlers
// -------------------------------------------------------------------------

async fn list_catalogs(State(state): State<AppState>) -> Json<CatalogListResponse> {
    let catalogs = state
        .catalogs()
        .catalog_ids()
        .into_iter()
        .map(CatalogSummary::new)
        .collect();

    Json(CatalogListResponse { catalogs })
}

async fn get_catalog(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<CatalogResponse>> {
    let catalog_id = params::integer_catalog_id(&params::path_segment(path))?
        .filter(|id| state.catalogs().contains_catalog(*id))
        .ok_or_else(|| AppError::not_found("Catalog not found."))?;

    Ok(Json(CatalogResponse {
        catalog: CatalogSummary::new(catalog_id),
    }))
}

/// Create an empty catalog at the first free id, starting from 1.
///
/// Any request body is ignored.
async fn create_catalog(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<CatalogCreatedResponse>)> {
    let catalog_id = state
        .catalogs()
        .create_next_catalog()
        .ok_or_else(|| AppError::Unavailable("Failed to allocate a new catalog ID.".to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(CatalogCreatedResponse {
            message: format!("Catalog with ID {catalog_id} created successfully."),
            catalog_id,
        }),
    ))
}

async fn delete_catalog(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let max = state.fixed_catalog_max();
    let catalog_id = params::fixed_range_catalog_id(&params::path_segment(path), max, || {
        format!("Catalog ID should be a valid integer between 1 and {max}.")
    })?;

    if !state.catalogs().delete_catalog(catalog_id) {
        return Err(AppError::not_found(format!(
            "Catalog {catalog_id} not found."
        )));
    }

    Ok(Json(MessageResponse {
        message: format!("Catalog with ID {catalog_id} deleted successfully."),
    }))
}
