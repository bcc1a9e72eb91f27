pub mod app_config;
pub mod cors_config;
pub mod env;
pub mod lookup_config;
pub mod resolver_config;
pub mod server_config;
