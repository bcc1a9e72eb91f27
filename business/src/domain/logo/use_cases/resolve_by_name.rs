use async_trait::async_trait;

use crate::domain::logo::model::LogoRef;

#[derive(Debug, Clone)]
pub struct ResolveByNameParams {
    pub bank_name: String,
    /// Logo already known for the bank, passed through when recognized.
    pub existing_logo: Option<String>,
}

/// Resolves a logo for a bank name. Total: falls back to a generated placeholder.
#[async_trait]
pub trait ResolveLogoByNameUseCase: Send + Sync {
    async fn execute(&self, params: ResolveByNameParams) -> Option<LogoRef>;
}
