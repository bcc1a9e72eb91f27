use async_trait::async_trait;

use crate::domain::errors::LookupError;

use super::model::{BankRecord, LogoImage, LogoRef};
use super::value_objects::Bin;

/// Service port for a BIN metadata lookup service.
///
/// `Ok(None)` means the service answered but knows nothing useful about the BIN;
/// `Err` means it could not be asked (network, status, malformed body).
#[async_trait]
pub trait BinMetadataSource: Send + Sync {
    async fn lookup(&self, bin: &Bin) -> Result<Option<BankRecord>, LookupError>;
}

/// Service port for the logo-by-domain CDN.
#[async_trait]
pub trait DomainLogoSource: Send + Sync {
    /// Checks whether the CDN has an image for `domain` and returns its URL.
    async fn probe(&self, domain: &str) -> Result<Option<LogoRef>, LookupError>;

    /// Downloads the image for `domain`.
    async fn fetch(&self, domain: &str) -> Result<Option<LogoImage>, LookupError>;
}
