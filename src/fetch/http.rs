//! HTTP fetcher
//!
//! Downloads the fortune page for a date and pulls the article text out of
//! it. The page layout is described entirely by [`SourceConfig`].

use std::time::Duration;

use scraper::{Html, Selector};
use tokio::runtime::Runtime;

use super::{FetchError, Fetcher};
use crate::config::SourceConfig;
use crate::error::FortuneError;

/// Fetches fortunes from the site described in `[source]`
pub struct SiteFetcher {
    source: SourceConfig,
    client: reqwest::Client,
    // Owned so pooled connections stay bound to a live runtime between fetches
    runtime: Runtime,
}

impl SiteFetcher {
    pub fn new(source: SourceConfig) -> Result<Self, FortuneError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(source.timeout_secs))
            .build()
            .map_err(|e| FortuneError::HttpClient(e.to_string()))?;

        Self::with_client(source, client)
    }

    pub(crate) fn with_client(
        source: SourceConfig,
        client: reqwest::Client,
    ) -> Result<Self, FortuneError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            source,
            client,
            runtime,
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Parse(error_chain(&e)))
    }
}

impl Fetcher for SiteFetcher {
    fn fetch(&self, key: &str) -> Result<String, FetchError> {
        if self.source.base.trim().is_empty() {
            return Err(FetchError::Internal(
                "no source url configured. Set [source] base in config.toml".to_string(),
            ));
        }

        let url = self.source.url_for(key);
        log::debug!("GET {}", url);

        let body = self.runtime.block_on(self.fetch_page(&url))?;

        extract_article(&body, &self.source)?
            .ok_or_else(|| FetchError::ContentNotFound(key.to_string()))
    }
}

/// Extract the article text from a page
///
/// Returns `Ok(None)` when the article element is missing or has no text.
pub fn extract_article(html: &str, source: &SourceConfig) -> Result<Option<String>, FetchError> {
    let element = parse_selector(&source.element_selector)?;
    let span = parse_selector(&source.span_selector)?;

    let document = Html::parse_document(html);
    let Some(article) = document.select(&element).nth(source.article_index) else {
        return Ok(None);
    };

    let text: String = article.select(&span).flat_map(|s| s.text()).collect();
    let text = text.trim();

    if text.is_empty() {
        Ok(None)
    } else {
        Ok(Some(text.to_string()))
    }
}

/// Classify a request failure; a builder error means the URL itself is bad
fn request_error(e: reqwest::Error) -> FetchError {
    if e.is_builder() {
        FetchError::Internal(error_chain(&e))
    } else {
        FetchError::Network(error_chain(&e))
    }
}

/// `outer: cause: root cause`; reqwest's own Display stops at the outer error
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn parse_selector(selector: &str) -> Result<Selector, FetchError> {
    Selector::parse(selector)
        .map_err(|_| FetchError::Parse(format!("invalid selector '{}' in config", selector)))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
