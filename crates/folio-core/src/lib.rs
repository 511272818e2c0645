//! Core folio library (typewriter sequencer, viewport observers, config).

pub mod config;
pub mod interrupt;
pub mod logging;
pub mod typewriter;
pub mod viewport;
