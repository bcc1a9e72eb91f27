use async_trait::async_trait;

use crate::domain::logo::model::LogoRef;

use super::resolve_by_name::ResolveByNameParams;

pub struct ResolveBatchParams {
    pub banks: Vec<ResolveByNameParams>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBankLogo {
    pub bank_name: String,
    pub logo: Option<LogoRef>,
}

/// Resolves many bank names with bounded concurrency. Results keep input order.
#[async_trait]
pub trait ResolveLogosBatchUseCase: Send + Sync {
    async fn execute(&self, params: ResolveBatchParams) -> Vec<ResolvedBankLogo>;
}
