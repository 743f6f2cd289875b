//! Session response cache for LLM calls.
//!
//! Entries are keyed by `(CallKind, CacheKey)` where the key hashes the full
//! prompt text. The cache is advisory: bypassing it changes cost and latency,
//! never results. There is no eviction; it lives as long as the session.

mod key;

pub use key::{CacheKey, CallKind};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry {
    pub response_text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<(CallKind, CacheKey), CacheEntry>,
    hits: u64,
    misses: u64,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an entry and records the hit or miss.
    pub fn get(&mut self, kind: CallKind, key: &CacheKey) -> Option<&CacheEntry> {
        match self.entries.get(&(kind, key.clone())) {
            Some(entry) => {
                self.hits += 1;
                Some(entry)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Stores a response, replacing any previous entry under the same kind and key.
    pub fn set(&mut self, kind: CallKind, key: CacheKey, response_text: impl Into<String>) {
        self.entries.insert(
            (kind, key),
            CacheEntry {
                response_text: response_text.into(),
                created_at: Utc::now(),
            },
        );
    }

    /// Drops all entries and resets the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}
