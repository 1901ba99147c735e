use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{App, Phase};
use crate::fetch::FetchError;

/// Everything the event loop can deliver to the app
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Key press from the terminal
    Key(KeyEvent),
    /// Spinner frame request from the ticker
    Tick,
    /// Terminal resized; only needs a redraw
    Resize,
    /// Outcome of the fetch dispatched with `id`
    FetchCompleted {
        id: u64,
        result: Result<String, FetchError>,
    },
}

/// Side effect requested by [`App::update`], executed by the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    /// Start the ticker and run the fetcher for `key`
    Fetch { id: u64, key: String },
    /// The outstanding fetch finished; stop the ticker
    StopAnimation,
    Quit,
}

/// What a key means to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Confirm,
    Reset,
    Quit,
    Edit,
    Unrecognized,
}

/// Classify a key event, independent of the current phase
pub fn classify_key(key: &KeyEvent) -> KeyAction {
    // Only process key press events (avoid duplicates on release/repeat)
    if key.kind != KeyEventKind::Press {
        return KeyAction::Unrecognized;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Enter => KeyAction::Confirm,
        KeyCode::Esc => KeyAction::Reset,
        KeyCode::Char(_)
        | KeyCode::Backspace
        | KeyCode::Delete
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home
        | KeyCode::End => KeyAction::Edit,
        _ => KeyAction::Unrecognized,
    }
}

impl App {
    /// Apply one event and return the side effect it requires
    pub fn update(&mut self, event: AppEvent) -> Command {
        match event {
            AppEvent::Key(key) => self.handle_key_event(key),
            AppEvent::Tick => {
                self.handle_tick();
                Command::None
            }
            AppEvent::Resize => Command::None,
            AppEvent::FetchCompleted { id, result } => self.handle_fetch_completed(id, result),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Command {
        match (classify_key(&key), self.phase) {
            (KeyAction::Quit, _) => {
                self.should_quit = true;
                Command::Quit
            }
            (KeyAction::Confirm, Phase::Editing) => self.confirm(),
            (KeyAction::Edit, Phase::Editing) => {
                self.input.handle_key(key);
                Command::None
            }
            (KeyAction::Reset, Phase::Done | Phase::Failed) => {
                self.reset();
                Command::None
            }
            _ => Command::None,
        }
    }

    /// Enter: start fetching the trimmed input, unless it is blank
    fn confirm(&mut self) -> Command {
        let key = self.key().to_string();
        if key.is_empty() {
            return Command::None;
        }

        self.fetch_id = self.fetch_id.wrapping_add(1);
        self.phase = Phase::Fetching;
        self.result_text = None;
        self.last_error = None;
        self.spinner.reset();

        log::debug!("Fetch {} started for '{}'", self.fetch_id, key);
        Command::Fetch {
            id: self.fetch_id,
            key,
        }
    }

    /// Esc from a result or error: back to editing, keeping the input
    fn reset(&mut self) {
        self.phase = Phase::Editing;
        self.last_error = None;
        self.result_text = None;
    }

    fn handle_tick(&mut self) {
        if self.phase == Phase::Fetching {
            self.spinner.advance();
        }
    }

    fn handle_fetch_completed(&mut self, id: u64, result: Result<String, FetchError>) -> Command {
        if self.phase != Phase::Fetching || id != self.fetch_id {
            log::debug!(
                "Ignoring stale completion {} (current: {}, phase: {:?})",
                id,
                self.fetch_id,
                self.phase
            );
            return Command::None;
        }

        match result {
            Ok(text) => {
                self.result_text = Some(text);
                self.phase = Phase::Done;
            }
            Err(e) => {
                self.last_error = Some(e);
                self.phase = Phase::Failed;
            }
        }
        Command::StopAnimation
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
