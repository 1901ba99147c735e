mod events;
mod render;
mod state;

// Re-export public types
pub use events::{AppEvent, Command, KeyAction, classify_key};
pub use state::{App, Phase};
