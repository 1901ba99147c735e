//! Fortune fetching
//!
//! The controller only ever sees `Result<String, FetchError>`. How the text
//! is obtained lives behind the [`Fetcher`] trait.

use thiserror::Error;

pub mod http;
pub mod worker;

pub use http::SiteFetcher;
pub use worker::spawn_fetch;

/// Errors that can occur while fetching a fortune
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure (DNS, connect, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Server returned HTTP {code}")]
    Status { code: u16 },

    /// Response body could not be read or parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Page loaded but the fortune text was not where it was expected
    #[error("No fortune found for {0}")]
    ContentNotFound(String),

    /// Anything else that went wrong inside the fetcher
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Resolves a date key to fortune text
///
/// Implementations may block; callers run them through [`spawn_fetch`].
pub trait Fetcher: Send + Sync {
    fn fetch(&self, key: &str) -> Result<String, FetchError>;
}

impl<F> Fetcher for F
where
    F: Fn(&str) -> Result<String, FetchError> + Send + Sync,
{
    fn fetch(&self, key: &str) -> Result<String, FetchError> {
        self(key)
    }
}
