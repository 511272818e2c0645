//! Ctrl+C for `folio view` and `folio type`.
//!
//! Raw mode turns Ctrl+C into a key event inside the portfolio view, so only
//! an external SIGINT reaches this module there; the view's event loop checks
//! [`is_interrupted`] once per iteration. `folio type` awaits
//! [`wait_for_interrupt`] next to its timer channel instead. An interrupt that
//! arrives while one is still pending force-exits with code 130, after
//! running the terminal restore hook.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, OnceLock};

use anyhow::{Context, Result};
use tokio::sync::Notify;

type RestoreHook = Box<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct InterruptState {
    pending: AtomicBool,
    wake: Notify,
    restore: OnceLock<RestoreHook>,
}

static STATE: LazyLock<InterruptState> = LazyLock::new(InterruptState::default);

/// Returned by commands that stop because of Ctrl+C; `main` maps it to exit
/// code 130.
#[derive(Debug)]
pub struct InterruptedError;

impl std::fmt::Display for InterruptedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("interrupted")
    }
}

impl std::error::Error for InterruptedError {}

/// Installs the process-wide Ctrl+C handler. Call once, before any command
/// that can be interrupted.
///
/// # Errors
/// Returns an error if a handler is already installed.
pub fn init() -> Result<()> {
    ctrlc::set_handler(raise).context("install Ctrl+C handler")
}

fn raise() {
    if STATE.pending.swap(true, Ordering::SeqCst) {
        if let Some(restore) = STATE.restore.get() {
            restore();
        }
        std::process::exit(130);
    }
    STATE.wake.notify_waiters();
}

pub fn is_interrupted() -> bool {
    STATE.pending.load(Ordering::SeqCst)
}

/// Resolves once an interrupt is pending.
pub async fn wait_for_interrupt() {
    loop {
        let woken = STATE.wake.notified();
        if is_interrupted() {
            return;
        }
        woken.await;
    }
}

/// Clears a pending interrupt; the view calls this when it takes over the
/// terminal.
pub fn reset() {
    STATE.pending.store(false, Ordering::SeqCst);
}

/// Sets the hook that puts the terminal back before a forced exit. Only the
/// first hook is kept.
pub fn set_restore_hook<F>(hook: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let _ = STATE.restore.set(Box::new(hook));
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_raise_wakes_waiter_and_reset_clears() {
        reset();
        let waiter = tokio::spawn(wait_for_interrupt());
        tokio::task::yield_now().await;

        raise();
        assert!(is_interrupted());
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();

        reset();
        assert!(!is_interrupted());
    }
}
