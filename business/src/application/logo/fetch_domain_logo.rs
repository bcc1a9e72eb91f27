use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::logo::domain_guess::domain_for_identifier;
use crate::domain::logo::errors::LogoError;
use crate::domain::logo::model::LogoImage;
use crate::domain::logo::services::DomainLogoSource;
use crate::domain::logo::use_cases::fetch_domain_logo::{
    FetchDomainLogoParams, FetchDomainLogoUseCase,
};

pub struct FetchDomainLogoUseCaseImpl {
    pub source: Arc<dyn DomainLogoSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FetchDomainLogoUseCase for FetchDomainLogoUseCaseImpl {
    async fn execute(&self, params: FetchDomainLogoParams) -> Result<LogoImage, LogoError> {
        let domain =
            domain_for_identifier(&params.identifier).ok_or(LogoError::InvalidIdentifier)?;

        self.logger
            .debug(&format!("Fetching logo image for {}", domain));

        match self.source.fetch(&domain).await {
            Ok(Some(image)) => Ok(image),
            Ok(None) => Err(LogoError::NotFound),
            Err(err) => {
                self.logger
                    .warn(&format!("Logo CDN failed for {}: {}", domain, err));
                Err(err.into())
            }
        }
    }
}
