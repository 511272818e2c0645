//! Portfolio view command handler.

use anyhow::{Context, Result};
use folio_core::config::Config;

pub async fn run(config: &Config) -> Result<()> {
    folio_tui::run_portfolio(config)
        .await
        .context("portfolio view failed")
}
