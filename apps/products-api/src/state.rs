//! Application state management

use domain_products::InMemoryProductRepository;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub repository: InMemoryProductRepository,
}

impl AppState {
    /// Build state with a fresh store, seeded according to `config.seed_data`.
    pub fn new(config: Config) -> Self {
        let repository = if config.seed_data {
            InMemoryProductRepository::with_seed_data()
        } else {
            InMemoryProductRepository::new()
        };

        Self { config, repository }
    }
}
