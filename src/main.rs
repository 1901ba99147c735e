use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;

use fortune::app::App;
use fortune::config::load_config;
use fortune::error::FortuneError;
use fortune::fetch::SiteFetcher;
use fortune::input::MAX_INPUT_LEN;
use fortune::runtime::{Runtime, spawn_input_reader};

/// Read the fortune for a date in your terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (defaults to <config dir>/fortune/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Date to prefill instead of today (YYYYMMDD)
    #[arg(short, long, value_name = "YYYYMMDD")]
    date: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_debug_logger();

    let args = Args::parse();

    let initial_date = match args.date {
        Some(date) if date.chars().count() > MAX_INPUT_LEN => {
            return Err(FortuneError::InvalidDate(date).into());
        }
        Some(date) => date,
        None => chrono::Local::now().format("%Y%m%d").to_string(),
    };

    let config = load_config(args.config.as_deref())?;
    let tick_interval = Duration::from_millis(config.ui.tick_ms.max(1));
    let fetcher = SiteFetcher::new(config.source)?;

    let mut app = App::new(&initial_date);
    let mut runtime = Runtime::new(Arc::new(fetcher), tick_interval);
    spawn_input_reader(runtime.sender());

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();

    let result = runtime.run(&mut app, &mut terminal);

    // Restore terminal before any error is reported
    ratatui::restore();

    result?;
    Ok(())
}

/// Log to a file in the temp dir; stderr would draw over the TUI
#[cfg(debug_assertions)]
fn init_debug_logger() {
    let path = std::env::temp_dir().join("fortune-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
