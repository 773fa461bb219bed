//! Prize Catalog Kernel Library
//!
//! This library exposes kernel internals for integration testing.
//! The main entry point for running the server is the `prize-catalog` binary.

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use state::AppState;
pub use store::CatalogStore;
