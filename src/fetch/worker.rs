//! Fetch Worker Thread
//!
//! Runs a single fetch in a background thread so the UI never blocks, and
//! reports the outcome back as exactly one completion event.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use super::{FetchError, Fetcher};
use crate::app::AppEvent;

/// Spawn a worker thread for one fetch
///
/// # Arguments
/// * `fetcher` - Collaborator that resolves the key
/// * `id` - Fetch id echoed back in the completion event
/// * `key` - Trimmed date key
/// * `event_tx` - Channel into the controller's event loop
pub fn spawn_fetch(
    fetcher: Arc<dyn Fetcher>,
    id: u64,
    key: String,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let result = run_fetch(fetcher.as_ref(), &key);

        if let Err(e) = &result {
            log::warn!("Fetch {} for '{}' failed: {}", id, key, e);
        } else {
            log::debug!("Fetch {} for '{}' completed", id, key);
        }

        if event_tx.send(AppEvent::FetchCompleted { id, result }).is_err() {
            // Event loop already gone (program quitting)
            log::debug!("Dropping completion for fetch {}: receiver closed", id);
        }
    })
}

/// Run the fetcher, turning a panic into `FetchError::Internal`
fn run_fetch(fetcher: &dyn Fetcher, key: &str) -> Result<String, FetchError> {
    match panic::catch_unwind(AssertUnwindSafe(|| fetcher.fetch(key))) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "fetcher panicked".to_string());
            Err(FetchError::Internal(message))
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
