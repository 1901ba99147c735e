// Configuration type definitions

use serde::Deserialize;

/// Where the fortune page lives and how to find the text inside it
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    /// Scheme and host, e.g. "https://example.com"
    pub base: String,
    /// Path segment placed before the date key
    pub prefix: String,
    /// Path segment or query string placed after the date key
    pub postfix: String,
    /// Elements counted to locate the article
    pub element_selector: String,
    /// Elements inside the article whose text is collected
    pub span_selector: String,
    /// 0-based position of the article among `element_selector` matches
    pub article_index: usize,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            base: String::new(),
            prefix: String::new(),
            postfix: String::new(),
            element_selector: "div".to_string(),
            span_selector: "span".to_string(),
            article_index: 170,
            timeout_secs: 30,
        }
    }
}

impl SourceConfig {
    /// Build the page URL for a date key
    pub fn url_for(&self, key: &str) -> String {
        format!("{}{}{}{}", self.base, self.prefix, key, self.postfix)
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Interval between spinner frames in milliseconds
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { tick_ms: 100 }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}
