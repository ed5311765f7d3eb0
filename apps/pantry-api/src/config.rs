//! Configuration for the Pantry API

use axum_helpers::auth::SessionConfig;
use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;
use domain_food_items::FileStoreConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub postgres: PostgresConfig,
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub file_store: FileStoreConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            postgres: PostgresConfig::from_env()?,
            server: ServerConfig::from_env()?,
            session: SessionConfig::from_env()?,
            file_store: FileStoreConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
