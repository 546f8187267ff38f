//! Configuration for Products API

use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, env_parse, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    /// Populate the store with the starter catalog on boot (`SEED_DATA`)
    pub seed_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let seed_data = env_parse("SEED_DATA", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
            seed_data,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: app_info!(),
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            environment: Environment::Development,
            seed_data: true,
        }
    }
}
