//! Job-page fetching. Pages are reduced to their visible text, one text node per line.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Node};
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Elements whose text is never visible on the page.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page returned HTTP {0}")]
    Status(u16),
}

/// Source of job-page text. Swapped for a scripted fetcher in tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(timeout_secs: u64) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let html = response.text().await?;
        let text = html_to_text(&html);
        debug!("Fetched {url}: {} bytes html, {} chars text", html.len(), text.chars().count());
        Ok(text)
    }
}

/// Visible text of an HTML document: trimmed text nodes joined with newlines.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(element) => HIDDEN_ELEMENTS.contains(&element.name()),
                _ => false,
            });
            if hidden {
                return None;
            }
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
