use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Startup settings, read once from the environment after `.env` is loaded.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
