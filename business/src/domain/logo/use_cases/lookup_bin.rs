use async_trait::async_trait;

use crate::domain::logo::errors::LogoError;
use crate::domain::logo::model::BankRecord;
use crate::domain::logo::value_objects::Bin;

pub struct LookupBinParams {
    pub bin: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinDetails {
    pub bin: Bin,
    pub record: BankRecord,
}

/// Issuer metadata for a BIN, from the first lookup service that knows it.
#[async_trait]
pub trait LookupBinUseCase: Send + Sync {
    async fn execute(&self, params: LookupBinParams) -> Result<BinDetails, LogoError>;
}
