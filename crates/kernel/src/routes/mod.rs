//! HTTP route handlers.

use axum::Router;

use crate::state::AppState;

pub mod catalog;
pub mod health;
pub mod params;
pub mod prize;

/// Every route served by the kernel, before middleware and state.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(prize::router())
        .merge(catalog::router())
        .merge(health::router())
}
