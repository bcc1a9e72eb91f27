use std::collections::HashMap;
use std::sync::Mutex;

use super::model::LogoRef;
use super::value_objects::{Bin, normalize_bank_name};

/// Cache key, namespaced so a numeric bank name never collides with a BIN.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Bin(String),
    BankName(String),
}

impl CacheKey {
    pub fn bin(bin: &Bin) -> Self {
        CacheKey::Bin(bin.as_str().to_string())
    }

    /// Returns `None` when the name normalizes to nothing.
    pub fn bank_name(bank_name: &str) -> Option<Self> {
        let normalized = normalize_bank_name(bank_name);
        if normalized.is_empty() {
            return None;
        }
        Some(CacheKey::BankName(normalized))
    }

    /// Shared key for names with no letters or digits ("&&", "***").
    pub fn unnamed() -> Self {
        CacheKey::BankName(String::new())
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::Bin(bin) => write!(f, "bin:{}", bin),
            CacheKey::BankName(name) => write!(f, "name:{}", name),
        }
    }
}

/// Process-lifetime cache of resolution outcomes.
///
/// A stored `None` is the "no logo found" marker: it is returned as a hit so a
/// failing key is not looked up again. Entries never expire and are
/// last-write-wins.
#[derive(Default)]
pub struct LogoCache {
    entries: Mutex<HashMap<CacheKey, Option<LogoRef>>>,
}

impl LogoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outer `None` is a miss; `Some(None)` is a cached "no logo".
    pub fn get(&self, key: &CacheKey) -> Option<Option<LogoRef>> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    pub fn insert(&self, key: CacheKey, value: Option<LogoRef>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
