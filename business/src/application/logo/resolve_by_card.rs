use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::logo::cache::{CacheKey, LogoCache};
use crate::domain::logo::chain::StrategyChain;
use crate::domain::logo::model::LogoRef;
use crate::domain::logo::use_cases::resolve_by_card::{
    ResolveByCardParams, ResolveLogoByCardUseCase,
};
use crate::domain::logo::value_objects::Bin;

pub struct ResolveLogoByCardUseCaseImpl {
    pub cache: Arc<LogoCache>,
    pub chain: StrategyChain<Bin>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveLogoByCardUseCase for ResolveLogoByCardUseCaseImpl {
    async fn execute(&self, params: ResolveByCardParams) -> Option<LogoRef> {
        let Some(bin) = Bin::from_card_number(&params.card_number) else {
            self.logger
                .debug("Card number has fewer than 6 digits, skipping logo lookup");
            return None;
        };

        let key = CacheKey::bin(&bin);
        if let Some(cached) = self.cache.get(&key) {
            self.logger.debug(&format!("Logo cache hit for {}", key));
            return cached;
        }

        self.logger
            .info(&format!("Resolving logo for BIN {}", bin.as_str()));

        let logo = self.chain.resolve(&bin, self.logger.as_ref()).await;

        match &logo {
            Some(found) => self.logger.info(&format!(
                "Logo for BIN {} resolved ({})",
                bin.as_str(),
                found.kind().map(|k| k.to_string()).unwrap_or_default()
            )),
            None => self
                .logger
                .info(&format!("No logo found for BIN {}", bin.as_str())),
        }

        self.cache.insert(key, logo.clone());
        logo
    }
}
