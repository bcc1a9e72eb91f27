use std::sync::Arc;

use logger::TracingLogger;
use lookup::bin_lookup::HttpBinLookup;
use lookup::client::{LookupClient, build_http_client};
use lookup::logo_cdn::HttpDomainLogoSource;

use business::application::logo::fetch_domain_logo::FetchDomainLogoUseCaseImpl;
use business::application::logo::lookup_bin::LookupBinUseCaseImpl;
use business::application::logo::resolve_batch::ResolveLogosBatchUseCaseImpl;
use business::application::logo::resolve_by_card::ResolveLogoByCardUseCaseImpl;
use business::application::logo::resolve_by_name::ResolveLogoByNameUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::logo::cache::LogoCache;
use business::domain::logo::chain::{LogoStrategy, StrategyChain};
use business::domain::logo::services::{BinMetadataSource, DomainLogoSource};
use business::domain::logo::strategies::{
    BinSourceStrategy, HeuristicDomainStrategy, KnownDomainStrategy, PlaceholderStrategy,
};
use business::domain::logo::use_cases::fetch_domain_logo::FetchDomainLogoUseCase;
use business::domain::logo::use_cases::resolve_by_name::ResolveLogoByNameUseCase;
use business::domain::logo::value_objects::Bin;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub logo_api: crate::api::logo::routes::LogoApi,
    pub bin_api: crate::api::bin::routes::BinApi,
    pub fetch_logo_use_case: Arc<dyn FetchDomainLogoUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::default());
        let cache = Arc::new(LogoCache::new());
        let health_api = crate::api::health::routes::Api::new(cache.clone());

        // Infrastructure adapters
        let http_client = build_http_client(config.lookup.timeout)?;
        let primary_bins: Arc<dyn BinMetadataSource> = Arc::new(HttpBinLookup::new(
            LookupClient::new(http_client.clone(), config.lookup.primary_bin_url.clone()),
        ));
        let secondary_bins: Arc<dyn BinMetadataSource> = Arc::new(HttpBinLookup::binlist(
            LookupClient::new(http_client.clone(), config.lookup.secondary_bin_url.clone()),
        ));
        let domain_logos: Arc<dyn DomainLogoSource> = Arc::new(HttpDomainLogoSource::new(
            LookupClient::new(http_client, config.lookup.logo_cdn_url.clone()),
        ));

        // Resolution chains
        let card_strategies: Vec<Arc<dyn LogoStrategy<Bin>>> = vec![
            Arc::new(BinSourceStrategy {
                label: "primary-bin",
                source: primary_bins.clone(),
                domain_logos: domain_logos.clone(),
            }),
            Arc::new(BinSourceStrategy {
                label: "secondary-bin",
                source: secondary_bins.clone(),
                domain_logos: domain_logos.clone(),
            }),
        ];
        let name_strategies: Vec<Arc<dyn LogoStrategy<str>>> = vec![
            Arc::new(KnownDomainStrategy {
                domain_logos: domain_logos.clone(),
            }),
            Arc::new(HeuristicDomainStrategy {
                domain_logos: domain_logos.clone(),
            }),
            Arc::new(PlaceholderStrategy),
        ];

        // Use cases
        let by_card_use_case = Arc::new(ResolveLogoByCardUseCaseImpl {
            cache: cache.clone(),
            chain: StrategyChain::new(card_strategies),
            logger: logger.clone(),
        });
        let by_name_use_case: Arc<dyn ResolveLogoByNameUseCase> =
            Arc::new(ResolveLogoByNameUseCaseImpl {
                cache,
                chain: StrategyChain::new(name_strategies),
                logger: logger.clone(),
            });
        let batch_use_case = Arc::new(ResolveLogosBatchUseCaseImpl {
            resolver: by_name_use_case.clone(),
            max_concurrency: config.resolver.batch_concurrency,
            logger: logger.clone(),
        });
        let lookup_bin_use_case = Arc::new(LookupBinUseCaseImpl {
            sources: vec![primary_bins, secondary_bins],
            logger: logger.clone(),
        });
        let fetch_logo_use_case: Arc<dyn FetchDomainLogoUseCase> =
            Arc::new(FetchDomainLogoUseCaseImpl {
                source: domain_logos,
                logger,
            });

        let logo_api = crate::api::logo::routes::LogoApi::new(
            by_card_use_case,
            by_name_use_case,
            batch_use_case,
            config.resolver.batch_max_size,
        );
        let bin_api = crate::api::bin::routes::BinApi::new(lookup_bin_use_case);

        Ok(Self {
            health_api,
            logo_api,
            bin_api,
            fetch_logo_use_case,
        })
    }
}
