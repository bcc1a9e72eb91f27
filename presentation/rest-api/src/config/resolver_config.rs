use business::application::logo::resolve_batch::DEFAULT_BATCH_CONCURRENCY;

use super::env::{ConfigError, positive_var};

pub const DEFAULT_BATCH_MAX_SIZE: usize = 500;

/// Limits applied to batch resolution
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub batch_concurrency: usize,
    pub batch_max_size: usize,
}

impl ResolverConfig {
    /// Environment variables:
    /// - BATCH_CONCURRENCY: Resolutions in flight per batch (default: 10)
    /// - BATCH_MAX_SIZE: Largest accepted batch (default: 500)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            batch_concurrency: positive_var("BATCH_CONCURRENCY", DEFAULT_BATCH_CONCURRENCY)?,
            batch_max_size: positive_var("BATCH_MAX_SIZE", DEFAULT_BATCH_MAX_SIZE)?,
        })
    }
}
