pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod fetch;
pub mod input;
pub mod runtime;

#[cfg(test)]
mod test_utils;
