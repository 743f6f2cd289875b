//! Per-process session: the response cache, generated-document history and
//! the job records extracted so far. Created at startup and cleared only by an
//! explicit reset. Handlers hold the session lock for a whole user action.

use serde::Serialize;
use uuid::Uuid;

use crate::cache::{CacheStats, ResponseCache};
use crate::history::HistoryStore;
use crate::models::job::JobRecord;

#[derive(Debug)]
pub struct Session {
    pub cache: ResponseCache,
    pub history: HistoryStore,
    jobs: Vec<JobRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionMetrics {
    pub cache: CacheStats,
    pub documents_generated: usize,
    pub jobs_loaded: usize,
    pub degraded_jobs: usize,
}

impl Session {
    pub fn new() -> Self {
        Self {
            cache: ResponseCache::new(),
            history: HistoryStore::new(),
            jobs: Vec::new(),
        }
    }

    /// Adds freshly extracted records. A record for an already-known link
    /// replaces the older one so each link maps to one record.
    pub fn remember_jobs(&mut self, records: &[JobRecord]) {
        for record in records {
            self.jobs.retain(|j| j.source_link != record.source_link);
            self.jobs.push(record.clone());
        }
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn job(&self, id: Uuid) -> Option<&JobRecord> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn metrics(&self) -> SessionMetrics {
        SessionMetrics {
            cache: self.cache.stats(),
            documents_generated: self.history.len(),
            jobs_loaded: self.jobs.len(),
            degraded_jobs: self.jobs.iter().filter(|j| j.is_degraded()).count(),
        }
    }

    pub fn reset(&mut self) {
        self.cache.clear();
        self.history.clear();
        self.jobs.clear();
    }
}
