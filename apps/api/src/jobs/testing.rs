//! Scripted `PageFetcher` for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::fetch::{FetchError, PageFetcher};

#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, Result<String, u16>>,
    calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, text: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(text.to_string()));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), Err(status));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(url) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(status)) => Err(FetchError::Status(*status)),
            None => Err(FetchError::Status(404)),
        }
    }
}
