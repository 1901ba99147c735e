//! Progress animation
//!
//! [`SpinnerState`] is the frame the UI draws; [`Ticker`] is the clock that
//! asks for the next frame while a fetch is outstanding.

mod spinner;
mod ticker;

pub use spinner::SpinnerState;
pub use ticker::Ticker;
