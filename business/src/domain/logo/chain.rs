use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::LookupError;
use crate::domain::logger::Logger;

use super::model::LogoRef;

/// One link of a resolution chain.
///
/// `Ok(Some)` resolves, `Ok(None)` passes to the next link, `Err` is logged and
/// also passes to the next link.
#[async_trait]
pub trait LogoStrategy<K: ?Sized + Sync>: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(&self, key: &K) -> Result<Option<LogoRef>, LookupError>;
}

/// Ordered list of strategies tried one after another until one resolves.
pub struct StrategyChain<K: ?Sized + Sync> {
    strategies: Vec<Arc<dyn LogoStrategy<K>>>,
}

impl<K: ?Sized + Sync> StrategyChain<K> {
    pub fn new(strategies: Vec<Arc<dyn LogoStrategy<K>>>) -> Self {
        Self { strategies }
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Runs the strategies in order. Never fails: an exhausted chain is `None`.
    pub async fn resolve(&self, key: &K, logger: &dyn Logger) -> Option<LogoRef> {
        for strategy in &self.strategies {
            match strategy.attempt(key).await {
                Ok(Some(logo)) => {
                    logger.debug(&format!("Logo resolved by {}", strategy.name()));
                    return Some(logo);
                }
                Ok(None) => {
                    logger.debug(&format!("{} returned nothing", strategy.name()));
                }
                Err(err) => {
                    logger.warn(&format!("{} unavailable: {}", strategy.name(), err));
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Scripted {
        name: &'static str,
        outcome: Result<Option<LogoRef>, LookupError>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(name: &'static str, outcome: Result<Option<LogoRef>, LookupError>) -> Arc<Self> {
            Arc::new(Self {
                name,
                outcome,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LogoStrategy<str> for Scripted {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn attempt(&self, _key: &str) -> Result<Option<LogoRef>, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        warnings: Mutex<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
        fn error(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    #[tokio::test]
    async fn should_stop_at_first_strategy_that_resolves() {
        let first = Scripted::new("first", Ok(None));
        let second = Scripted::new("second", Ok(Some(LogoRef::new("/logos/a.png"))));
        let third = Scripted::new("third", Ok(Some(LogoRef::new("/logos/b.png"))));
        let strategies: Vec<Arc<dyn LogoStrategy<str>>> =
            vec![first.clone(), second.clone(), third.clone()];
        let chain = StrategyChain::new(strategies);

        let result = chain.resolve("Acme", &RecordingLogger::default()).await;

        assert_eq!(result, Some(LogoRef::new("/logos/a.png")));
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
        assert_eq!(third.calls(), 0);
    }

    #[tokio::test]
    async fn should_continue_past_failing_strategy_and_log_it() {
        let failing = Scripted::new("failing", Err(LookupError::Network));
        let working = Scripted::new("working", Ok(Some(LogoRef::new("/logos/a.png"))));
        let strategies: Vec<Arc<dyn LogoStrategy<str>>> = vec![failing, working];
        let chain = StrategyChain::new(strategies);
        let logger = RecordingLogger::default();

        let result = chain.resolve("Acme", &logger).await;

        assert_eq!(result, Some(LogoRef::new("/logos/a.png")));
        let warnings = logger.warnings.lock().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("failing"));
    }

    #[tokio::test]
    async fn should_return_none_when_every_strategy_fails() {
        let strategies: Vec<Arc<dyn LogoStrategy<str>>> = vec![
            Scripted::new("a", Err(LookupError::Status(500))),
            Scripted::new("b", Ok(None)),
        ];
        let chain = StrategyChain::new(strategies);

        let result = chain.resolve("Acme", &RecordingLogger::default()).await;

        assert_eq!(result, None);
        assert_eq!(chain.len(), 2);
    }

    #[tokio::test]
    async fn should_return_none_for_empty_chain() {
        let chain: StrategyChain<str> = StrategyChain::new(Vec::new());
        assert!(chain.is_empty());
        assert_eq!(chain.resolve("Acme", &RecordingLogger::default()).await, None);
    }
}
