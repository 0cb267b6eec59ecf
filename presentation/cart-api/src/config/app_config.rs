use super::{
    catalog_config::CatalogConfig, cors_config, server_config::ServerConfig,
    storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            catalog: CatalogConfig::from_env()?,
            storage: StorageConfig::from_env(),
        })
    }
}
