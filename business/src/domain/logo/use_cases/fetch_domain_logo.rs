use async_trait::async_trait;

use crate::domain::logo::errors::LogoError;
use crate::domain::logo::model::LogoImage;

pub struct FetchDomainLogoParams {
    /// A domain (`chase.com`) or a bank identifier (`CIMB Bank`).
    pub identifier: String,
}

/// Downloads the CDN image for a domain or bank identifier (logo proxy).
#[async_trait]
pub trait FetchDomainLogoUseCase: Send + Sync {
    async fn execute(&self, params: FetchDomainLogoParams) -> Result<LogoImage, LogoError>;
}
