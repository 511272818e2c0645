//! Full-screen terminal portfolio for folio.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::{Context, Result, bail};
use folio_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the portfolio until the user quits.
///
/// The event loop blocks on terminal input, so it runs on tokio's blocking
/// pool while the timers it schedules fire on the async workers.
///
/// # Errors
/// Returns an error if stderr is not a terminal, the config is invalid, or
/// the terminal fails.
pub async fn run_portfolio(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        bail!(
            "The portfolio view requires a terminal.\n\
             Use `folio type` to run the typewriter headless."
        );
    }

    let mut runtime = TuiRuntime::new(config.clone())?;
    tokio::task::spawn_blocking(move || runtime.run())
        .await
        .context("portfolio event loop panicked")?
}
