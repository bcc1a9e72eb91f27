use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::logo::cache::{CacheKey, LogoCache};
use crate::domain::logo::chain::StrategyChain;
use crate::domain::logo::model::LogoRef;
use crate::domain::logo::use_cases::resolve_by_name::{
    ResolveByNameParams, ResolveLogoByNameUseCase,
};

pub struct ResolveLogoByNameUseCaseImpl {
    pub cache: Arc<LogoCache>,
    /// Known domain, heuristic domains, placeholder.
    pub chain: StrategyChain<str>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveLogoByNameUseCase for ResolveLogoByNameUseCaseImpl {
    async fn execute(&self, params: ResolveByNameParams) -> Option<LogoRef> {
        if let Some(existing) = params
            .existing_logo
            .as_deref()
            .and_then(LogoRef::recognize)
        {
            return Some(existing);
        }

        let bank_name = params.bank_name.trim();
        if bank_name.is_empty() {
            self.logger.debug("Blank bank name, skipping logo lookup");
            return None;
        }

        // Punctuation-only names all end on the same "?" placeholder.
        let key = CacheKey::bank_name(bank_name).unwrap_or_else(CacheKey::unnamed);

        if let Some(cached) = self.cache.get(&key) {
            self.logger.debug(&format!("Logo cache hit for {}", key));
            return cached;
        }

        self.logger
            .info(&format!("Resolving logo for bank: {}", bank_name));

        let logo = self.chain.resolve(bank_name, self.logger.as_ref()).await;

        self.cache.insert(key, logo.clone());
        logo
    }
}
