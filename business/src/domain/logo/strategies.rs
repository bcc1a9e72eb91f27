use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::LookupError;

use super::chain::LogoStrategy;
use super::domain_guess::{heuristic_domains, match_known_domain};
use super::model::LogoRef;
use super::placeholder::make_fallback_logo;
use super::services::{BinMetadataSource, DomainLogoSource};
use super::value_objects::Bin;

/// Asks one BIN metadata service for the issuer logo.
///
/// Uses the `logo` field when it is a recognized reference; otherwise derives
/// a logo from the issuer's website domain through the CDN.
pub struct BinSourceStrategy {
    pub label: &'static str,
    pub source: Arc<dyn BinMetadataSource>,
    pub domain_logos: Arc<dyn DomainLogoSource>,
}

#[async_trait]
impl LogoStrategy<Bin> for BinSourceStrategy {
    fn name(&self) -> &'static str {
        self.label
    }

    async fn attempt(&self, bin: &Bin) -> Result<Option<LogoRef>, LookupError> {
        let record = match self.source.lookup(bin).await? {
            Some(record) => record,
            None => return Ok(None),
        };

        if let Some(logo) = record.logo.as_deref().and_then(LogoRef::recognize) {
            return Ok(Some(logo));
        }

        match record.bank_domain.as_deref() {
            Some(domain) => self.domain_logos.probe(domain).await,
            None => Ok(None),
        }
    }
}

/// Probes the CDN with the domain of a known institution, if the name has one.
pub struct KnownDomainStrategy {
    pub domain_logos: Arc<dyn DomainLogoSource>,
}

#[async_trait]
impl LogoStrategy<str> for KnownDomainStrategy {
    fn name(&self) -> &'static str {
        "known-domain"
    }

    async fn attempt(&self, bank_name: &str) -> Result<Option<LogoRef>, LookupError> {
        match match_known_domain(bank_name) {
            Some(domain) => self.domain_logos.probe(domain).await,
            None => Ok(None),
        }
    }
}

/// Probes guessed domains in order until the CDN has one of them.
///
/// Reports an error only when no candidate could be asked at all.
pub struct HeuristicDomainStrategy {
    pub domain_logos: Arc<dyn DomainLogoSource>,
}

#[async_trait]
impl LogoStrategy<str> for HeuristicDomainStrategy {
    fn name(&self) -> &'static str {
        "heuristic-domain"
    }

    async fn attempt(&self, bank_name: &str) -> Result<Option<LogoRef>, LookupError> {
        let mut answered = false;
        let mut last_error = None;

        for domain in heuristic_domains(bank_name) {
            match self.domain_logos.probe(&domain).await {
                Ok(Some(logo)) => return Ok(Some(logo)),
                Ok(None) => answered = true,
                Err(err) => last_error = Some(err),
            }
        }

        match last_error {
            Some(err) if !answered => Err(err),
            _ => Ok(None),
        }
    }
}

/// Terminal link: the generated initials placeholder. Always resolves.
pub struct PlaceholderStrategy;

#[async_trait]
impl LogoStrategy<str> for PlaceholderStrategy {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    async fn attempt(&self, bank_name: &str) -> Result<Option<LogoRef>, LookupError> {
        Ok(Some(make_fallback_logo(bank_name)))
    }
}
