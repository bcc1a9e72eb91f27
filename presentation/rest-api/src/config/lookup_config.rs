use std::time::Duration;

use super::env::{ConfigError, positive_var, var_or};

pub const DEFAULT_PRIMARY_BIN_LOOKUP_URL: &str = "https://search.neverpayforads.com/api/bin";
pub const DEFAULT_SECONDARY_BIN_LOOKUP_URL: &str = "https://lookup.binlist.net";
pub const DEFAULT_LOGO_CDN_URL: &str = "https://logo.clearbit.com";
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Third-party endpoints used to resolve logos
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub primary_bin_url: String,
    pub secondary_bin_url: String,
    pub logo_cdn_url: String,
    pub timeout: Duration,
}

impl LookupConfig {
    /// Load lookup configuration from environment variables
    ///
    /// Environment variables:
    /// - PRIMARY_BIN_LOOKUP_URL: BIN service tried first
    /// - SECONDARY_BIN_LOOKUP_URL: BIN service tried when the first has nothing (binlist)
    /// - LOGO_CDN_URL: Logo CDN answering `GET {url}/{domain}`
    /// - LOOKUP_TIMEOUT_SECS: Per-request timeout (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            primary_bin_url: var_or("PRIMARY_BIN_LOOKUP_URL", DEFAULT_PRIMARY_BIN_LOOKUP_URL),
            secondary_bin_url: var_or(
                "SECONDARY_BIN_LOOKUP_URL",
                DEFAULT_SECONDARY_BIN_LOOKUP_URL,
            ),
            logo_cdn_url: var_or("LOGO_CDN_URL", DEFAULT_LOGO_CDN_URL),
            timeout: Duration::from_secs(positive_var(
                "LOOKUP_TIMEOUT_SECS",
                DEFAULT_LOOKUP_TIMEOUT_SECS,
            )?),
        })
    }
}
