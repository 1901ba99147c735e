#[cfg(test)]
pub mod test_helpers {
    use crate::app::{App, AppEvent, Command, Phase};
    use crate::fetch::FetchError;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub const TEST_DATE: &str = "20240101";

    pub fn test_app(initial: &str) -> App {
        App::new(initial)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn press(app: &mut App, code: KeyCode) -> Command {
        app.update(AppEvent::Key(key(code)))
    }

    /// Confirm the current buffer and return the dispatched fetch id
    pub fn start_fetch(app: &mut App) -> u64 {
        match press(app, KeyCode::Enter) {
            Command::Fetch { id, .. } => id,
            other => panic!("expected a fetch command, got {:?}", other),
        }
    }

    /// App in `Done` with `text` as the result
    pub fn app_done(text: &str) -> App {
        let mut app = test_app(TEST_DATE);
        let id = start_fetch(&mut app);
        app.update(AppEvent::FetchCompleted {
            id,
            result: Ok(text.to_string()),
        });
        assert_eq!(app.phase(), Phase::Done);
        app
    }

    /// App in `Failed` with `error` as the last error
    pub fn app_failed(error: FetchError) -> App {
        let mut app = test_app(TEST_DATE);
        let id = start_fetch(&mut app);
        app.update(AppEvent::FetchCompleted {
            id,
            result: Err(error),
        });
        assert_eq!(app.phase(), Phase::Failed);
        app
    }

    /// Draw the app into an in-memory terminal and return its contents
    pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }
}
