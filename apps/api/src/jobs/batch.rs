//! Sequential, paced processing of many job links.
//!
//! Links run one at a time with a fixed sleep between them. A failing link
//! produces a degraded record and the batch carries on.

use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use crate::cache::ResponseCache;
use crate::jobs::extractor::extract_job;
use crate::jobs::fetch::PageFetcher;
use crate::jobs::links::dedupe_links;
use crate::llm_client::LlmClient;
use crate::models::job::JobRecord;

#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub max_links: usize,
    pub delay: Duration,
    pub use_cache: bool,
}

/// Extracts records for up to `max_links` distinct links, in input order.
pub async fn process_links(
    links: &[String],
    options: BatchOptions,
    fetcher: &dyn PageFetcher,
    llm: &LlmClient,
    cache: &mut ResponseCache,
) -> Vec<JobRecord> {
    let mut selected = dedupe_links(links);
    selected.truncate(options.max_links);

    info!(
        "Processing {} of {} job links (delay {}ms)",
        selected.len(),
        links.len(),
        options.delay.as_millis()
    );

    let mut records = Vec::with_capacity(selected.len());
    for (position, link) in selected.iter().enumerate() {
        if position > 0 && !options.delay.is_zero() {
            sleep(options.delay).await;
        }
        let record = extract_job(position + 1, link, fetcher, llm, cache, options.use_cache).await;
        records.push(record);
    }

    let degraded = records.iter().filter(|r| r.is_degraded()).count();
    info!(
        "Batch finished: {} records, {} degraded",
        records.len(),
        degraded
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::testing::StaticFetcher;
    use crate::llm_client::testing::ScriptedGenerator;

    fn link(id: u32) -> String {
        format!("https://www.linkedin.com/jobs/view/{id}")
    }

    fn options(max_links: usize, delay_ms: u64) -> BatchOptions {
        BatchOptions {
            max_links,
            delay: Duration::from_millis(delay_ms),
            use_cache: true,
        }
    }

    #[tokio::test]
    async fn test_failing_link_does_not_abort_batch() {
        let fetcher = StaticFetcher::new()
            .page(&link(1), "page one")
            .status(&link(2), 500)
            .page(&link(3), "page three");
        let llm = LlmClient::with_generator(ScriptedGenerator::with(|_, prompt| {
            let company = if prompt.contains("page one") { "Acme" } else { "Globex" };
            Ok(format!("Job Title: Engineer\nCompany: {company}"))
        }));
        let mut cache = ResponseCache::new();

        let records = process_links(
            &[link(1), link(2), link(3)],
            options(10, 0),
            &fetcher,
            &llm,
            &mut cache,
        )
        .await;

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].company, "Acme");
        assert_eq!(records[1].title, "Job 2");
        assert_eq!(records[1].company, "Unknown");
        assert!(records[1].raw_text.is_empty());
        assert_eq!(records[2].company, "Globex");
        assert_eq!(records[2].index, 3);
    }

    #[tokio::test]
    async fn test_cap_and_dedupe() {
        let fetcher = StaticFetcher::new();
        let llm = LlmClient::unconfigured();
        let mut cache = ResponseCache::new();

        let records = process_links(
            &[link(1), link(1), link(2), link(3), link(4)],
            options(2, 0),
            &fetcher,
            &llm,
            &mut cache,
        )
        .await;

        let sources: Vec<_> = records.iter().map(|r| r.source_link.clone()).collect();
        assert_eq!(sources, vec![link(1), link(2)]);
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pacing_delay_between_links() {
        let fetcher = StaticFetcher::new();
        let llm = LlmClient::unconfigured();
        let mut cache = ResponseCache::new();
        let started = tokio::time::Instant::now();

        process_links(
            &[link(1), link(2), link(3)],
            options(10, 1500),
            &fetcher,
            &llm,
            &mut cache,
        )
        .await;

        // Two gaps for three links; none before the first.
        assert!(started.elapsed() >= Duration::from_millis(3000));
        assert!(started.elapsed() < Duration::from_millis(4500));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let records = process_links(
            &[],
            options(10, 1000),
            &StaticFetcher::new(),
            &LlmClient::unconfigured(),
            &mut ResponseCache::new(),
        )
        .await;
        assert!(records.is_empty());
    }
}
