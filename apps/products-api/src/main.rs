//! Products API - REST server

use axum_helpers::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use products_api::{AppState, Config, build_app};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Initialize the application state
    let state = AppState::new(config);
    info!(
        seed_data = state.config.seed_data,
        "Initialized in-memory product store"
    );

    let app = build_app(&state)?;

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    // Run REST server with graceful shutdown; the in-memory store has nothing to flush
    create_production_app(app, &state.config.server, Duration::from_secs(30), async {
        info!("Shutdown cleanup complete");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
