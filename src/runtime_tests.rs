//! Tests for the event loop

use super::*;
use crate::app::Phase;
use crate::fetch::FetchError;
use crate::test_utils::test_helpers::{TEST_DATE, key, key_with_mods, test_app};
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Mutex;
use std::time::Instant;

const TICK: Duration = Duration::from_millis(5);

fn step_until(runtime: &mut Runtime, app: &mut App, phase: Phase) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.phase() != phase {
        assert!(Instant::now() < deadline, "timed out waiting for {:?}", phase);
        assert!(runtime.step(app));
    }
}

#[test]
fn test_confirm_fetches_and_completes() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let calls_clone = Arc::clone(&calls);
    let fetcher: Arc<dyn Fetcher> = Arc::new(move |key: &str| -> Result<String, FetchError> {
        calls_clone.lock().unwrap().push(key.to_string());
        std::thread::sleep(Duration::from_millis(30));
        Ok("good fortune".to_string())
    });
    let mut runtime = Runtime::new(fetcher, TICK);
    let mut app = test_app(TEST_DATE);

    runtime.sender().send(AppEvent::Key(key(KeyCode::Enter))).unwrap();
    assert!(runtime.step(&mut app));
    assert_eq!(app.phase(), Phase::Fetching);
    assert!(runtime.is_ticking());

    step_until(&mut runtime, &mut app, Phase::Done);

    assert_eq!(app.result_text(), Some("good fortune"));
    assert!(!runtime.is_ticking());
    assert_eq!(*calls.lock().unwrap(), vec![TEST_DATE.to_string()]);
}

#[test]
fn test_fetch_failure_is_rendered_not_raised() {
    let fetcher: Arc<dyn Fetcher> = Arc::new(|_: &str| -> Result<String, FetchError> {
        Err(FetchError::Network("network unreachable".to_string()))
    });
    let mut runtime = Runtime::new(fetcher, TICK);
    let mut app = test_app(TEST_DATE);

    runtime.sender().send(AppEvent::Key(key(KeyCode::Enter))).unwrap();
    assert!(runtime.step(&mut app));
    step_until(&mut runtime, &mut app, Phase::Failed);

    assert_eq!(
        app.last_error(),
        Some(&FetchError::Network("network unreachable".to_string()))
    );
    assert!(!runtime.is_ticking());
}

#[test]
fn test_blank_confirm_dispatches_nothing() {
    let fetcher: Arc<dyn Fetcher> = Arc::new(|_: &str| -> Result<String, FetchError> {
        panic!("fetcher must not be called")
    });
    let mut runtime = Runtime::new(fetcher, TICK);
    let mut app = test_app("   ");

    runtime.sender().send(AppEvent::Key(key(KeyCode::Enter))).unwrap();
    assert!(runtime.step(&mut app));

    assert_eq!(app.phase(), Phase::Editing);
    assert!(!runtime.is_ticking());
}

#[test]
fn test_run_exits_on_quit() {
    let fetcher: Arc<dyn Fetcher> =
        Arc::new(|_: &str| -> Result<String, FetchError> { Ok(String::new()) });
    let mut runtime = Runtime::new(fetcher, TICK);
    let mut app = test_app(TEST_DATE);
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();

    let tx = runtime.sender();
    tx.send(AppEvent::Key(key(KeyCode::Char('9')))).unwrap();
    tx.send(AppEvent::Key(key_with_mods(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )))
    .unwrap();

    runtime.run(&mut app, &mut terminal).unwrap();

    assert!(app.should_quit());
    // Editing at the limit: the extra digit was rejected
    assert_eq!(app.input(), TEST_DATE);
}

#[test]
fn test_resize_redraws_without_side_effects() {
    let fetcher: Arc<dyn Fetcher> =
        Arc::new(|_: &str| -> Result<String, FetchError> { Ok(String::new()) });
    let mut runtime = Runtime::new(fetcher, TICK);
    let mut app = test_app(TEST_DATE);

    runtime.sender().send(AppEvent::Resize).unwrap();
    assert!(runtime.step(&mut app));

    assert_eq!(app.phase(), Phase::Editing);
    assert_eq!(app.input(), TEST_DATE);
    assert!(!runtime.is_ticking());
}
