//! Products API - REST server for the product catalog
//!
//! The binary in `main.rs` only wires configuration, tracing and shutdown;
//! router assembly lives here so tests can drive the exact same stack.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::create_router;

pub use config::Config;
pub use state::AppState;

/// Build the full HTTP application: `/api` routes, docs, fallback and middleware.
pub fn build_app(state: &AppState) -> std::io::Result<Router> {
    create_router::<openapi::ApiDoc>(api::routes(state), &state.config.cors)
}
