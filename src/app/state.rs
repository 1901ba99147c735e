use crate::animation::SpinnerState;
use crate::fetch::FetchError;
use crate::input::InputState;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Typing a date
    Editing,
    /// Waiting for the fetch worker
    Fetching,
    /// Showing the fetched fortune
    Done,
    /// Showing the fetch error
    Failed,
}

/// Application state
///
/// Owned by the event loop and mutated only through [`App::update`].
pub struct App {
    pub(super) phase: Phase,
    pub(super) input: InputState,
    pub(super) spinner: SpinnerState,
    pub(super) last_error: Option<FetchError>,
    pub(super) result_text: Option<String>,
    pub(super) fetch_id: u64,
    pub(super) should_quit: bool,
}

impl App {
    /// Create a new App with the input prefilled
    pub fn new(initial_key: &str) -> Self {
        Self {
            phase: Phase::Editing,
            input: InputState::new(initial_key),
            spinner: SpinnerState::new(),
            last_error: None,
            result_text: None,
            fetch_id: 0,
            should_quit: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Raw contents of the date input
    pub fn input(&self) -> &str {
        self.input.value()
    }

    pub fn input_cursor(&self) -> usize {
        self.input.cursor()
    }

    pub fn spinner(&self) -> SpinnerState {
        self.spinner
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn result_text(&self) -> Option<&str> {
        self.result_text.as_deref()
    }

    /// Id of the most recently dispatched fetch (0 before the first one)
    pub fn fetch_id(&self) -> u64 {
        self.fetch_id
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The key the last fetch was (or would be) made with
    pub fn key(&self) -> &str {
        self.input.value().trim()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
