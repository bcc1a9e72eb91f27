use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::domain::logger::Logger;
use crate::domain::logo::use_cases::resolve_batch::{
    ResolveBatchParams, ResolveLogosBatchUseCase, ResolvedBankLogo,
};
use crate::domain::logo::use_cases::resolve_by_name::ResolveLogoByNameUseCase;

pub const DEFAULT_BATCH_CONCURRENCY: usize = 10;

pub struct ResolveLogosBatchUseCaseImpl {
    pub resolver: Arc<dyn ResolveLogoByNameUseCase>,
    /// Upper bound on resolutions in flight at once.
    pub max_concurrency: usize,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveLogosBatchUseCase for ResolveLogosBatchUseCaseImpl {
    async fn execute(&self, params: ResolveBatchParams) -> Vec<ResolvedBankLogo> {
        let names: Vec<String> = params
            .banks
            .iter()
            .map(|bank| bank.bank_name.clone())
            .collect();
        let max_concurrency = self.max_concurrency.max(1);

        self.logger.info(&format!(
            "Resolving {} bank logos (max {} concurrent)",
            names.len(),
            max_concurrency
        ));

        let semaphore = Arc::new(Semaphore::new(max_concurrency));
        let mut join_set = JoinSet::new();

        for (index, bank) in params.banks.into_iter().enumerate() {
            // The permit is taken before spawning, so no more than
            // `max_concurrency` tasks exist at any time.
            let Ok(permit) = semaphore.clone().acquire_owned().await else {
                break;
            };
            let resolver = self.resolver.clone();

            join_set.spawn(async move {
                let _permit = permit;
                let bank_name = bank.bank_name.clone();
                let logo = resolver.execute(bank).await;
                (index, ResolvedBankLogo { bank_name, logo })
            });
        }

        let mut slots: Vec<Option<ResolvedBankLogo>> = vec![None; names.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, resolved)) => slots[index] = Some(resolved),
                Err(err) => self
                    .logger
                    .error(&format!("Bank logo task failed: {}", err)),
            }
        }

        slots
            .into_iter()
            .zip(names)
            .map(|(slot, bank_name)| {
                slot.unwrap_or(ResolvedBankLogo {
                    bank_name,
                    logo: None,
                })
            })
            .collect()
    }
}
