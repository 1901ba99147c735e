use thiserror::Error;

/// Startup errors for fortune
///
/// Nothing here is raised once the TUI is running; fetch failures are
/// reported through [`crate::fetch::FetchError`] and rendered instead.
#[derive(Debug, Error)]
pub enum FortuneError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid date '{0}': expected at most 8 characters (YYYYMMDD)")]
    InvalidDate(String),

    #[error("Failed to set up HTTP client: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
