use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::logo::errors::LogoError;
use crate::domain::logo::services::BinMetadataSource;
use crate::domain::logo::use_cases::lookup_bin::{BinDetails, LookupBinParams, LookupBinUseCase};
use crate::domain::logo::value_objects::Bin;

pub struct LookupBinUseCaseImpl {
    /// Tried in order; the first non-empty record wins.
    pub sources: Vec<Arc<dyn BinMetadataSource>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LookupBinUseCase for LookupBinUseCaseImpl {
    async fn execute(&self, params: LookupBinParams) -> Result<BinDetails, LogoError> {
        let bin = Bin::parse(&params.bin).ok_or(LogoError::InvalidBin)?;

        self.logger
            .info(&format!("Looking up BIN metadata for {}", bin));

        let mut answered = false;
        let mut last_error = None;

        for source in &self.sources {
            match source.lookup(&bin).await {
                Ok(Some(record)) if !record.is_empty() => {
                    return Ok(BinDetails { bin, record });
                }
                Ok(_) => answered = true,
                Err(err) => {
                    self.logger
                        .warn(&format!("BIN lookup for {} failed: {}", bin, err));
                    last_error = Some(err);
                }
            }
        }

        match last_error {
            Some(err) if !answered => Err(LogoError::Upstream(err)),
            _ => Err(LogoError::BinNotFound),
        }
    }
}
