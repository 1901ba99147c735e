//! Event loop
//!
//! Feeds [`AppEvent`]s from a single channel into [`App::update`] one at a
//! time and carries out the [`Command`] each update returns. Key presses,
//! resizes, ticks and fetch completions all arrive through the same channel.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event};

use crate::animation::Ticker;
use crate::app::{App, AppEvent, Command};
use crate::fetch::{Fetcher, spawn_fetch};

pub struct Runtime {
    fetcher: Arc<dyn Fetcher>,
    tick_interval: Duration,
    event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,
    ticker: Option<Ticker>,
}

impl Runtime {
    pub fn new(fetcher: Arc<dyn Fetcher>, tick_interval: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            fetcher,
            tick_interval,
            event_tx,
            event_rx,
            ticker: None,
        }
    }

    /// Sender for producers outside the runtime (terminal input)
    pub fn sender(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }

    /// Draw, wait for the next event, repeat until the app quits
    pub fn run<B: Backend>(&mut self, app: &mut App, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|frame| app.render(frame))?;

            if !self.step(app) {
                break;
            }
        }

        self.stop_ticker();
        Ok(())
    }

    /// Process one event; returns false once the app should stop
    pub fn step(&mut self, app: &mut App) -> bool {
        // The runtime holds a sender itself, so recv only fails if that is gone
        let Ok(event) = self.event_rx.recv() else {
            return false;
        };

        let command = app.update(event);
        self.execute(command);

        !app.should_quit()
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Fetch { id, key } => {
                self.stop_ticker();
                self.ticker = Some(Ticker::start(self.tick_interval, self.event_tx.clone()));
                spawn_fetch(Arc::clone(&self.fetcher), id, key, self.event_tx.clone());
            }
            Command::StopAnimation | Command::Quit => self.stop_ticker(),
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    #[cfg(test)]
    pub(crate) fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }
}

/// Forward terminal key presses into the event channel
///
/// Runs until the channel closes or the terminal read fails.
pub fn spawn_input_reader(event_tx: Sender<AppEvent>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                Ok(Event::Resize(_, _)) => event_tx.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(e) => {
                    log::warn!("Failed to read terminal event: {}", e);
                    break;
                }
            };

            if forwarded.is_err() {
                break;
            }
        }
        log::debug!("Input reader stopped");
    })
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod runtime_tests;
