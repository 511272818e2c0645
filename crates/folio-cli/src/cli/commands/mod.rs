//! CLI command handlers.

pub mod config;
pub mod typewriter;
pub mod view;
