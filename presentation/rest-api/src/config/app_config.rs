use super::env::ConfigError;
use super::lookup_config::LookupConfig;
use super::resolver_config::ResolverConfig;
use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub lookup: LookupConfig,
    pub resolver: ResolverConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            lookup: LookupConfig::from_env()?,
            resolver: ResolverConfig::from_env()?,
        })
    }
}
