use async_trait::async_trait;

use crate::domain::logo::model::LogoRef;

pub struct ResolveByCardParams {
    pub card_number: String,
}

/// Resolves the issuer logo for a card number. Total: never fails.
#[async_trait]
pub trait ResolveLogoByCardUseCase: Send + Sync {
    async fn execute(&self, params: ResolveByCardParams) -> Option<LogoRef>;
}
