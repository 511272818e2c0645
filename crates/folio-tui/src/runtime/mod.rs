//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox
//!
//! Timers scheduled by the reducer are tokio sleeps (`TokioTimers`) that
//! send their event into `inbox_rx`. The loop drains the inbox, polls the
//! terminal, feeds everything through `update`, and redraws when anything
//! happened. Polling is capped at the next timer's due time (`deadlines.rs`)
//! so timers are handled on time.

mod deadlines;

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use folio_core::config::Config;
use folio_core::interrupt;
use folio_core::typewriter::TokioTimers;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tracing::{info, warn};

use self::deadlines::Deadlines;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll interval while something is animating (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll interval when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Must be created and run inside a tokio runtime (timers are spawned
/// tasks). The terminal is restored when the runtime is dropped.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    timers: TokioTimers<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    deadlines: Deadlines,
    last_size: Option<(u16, u16)>,
    last_input: Instant,
}

impl TuiRuntime {
    /// Builds the state, then switches the terminal into TUI mode.
    ///
    /// # Errors
    /// Returns an error if the config is unusable or the terminal cannot be
    /// set up.
    pub fn new(config: Config) -> Result<Self> {
        let (width, height) = crossterm::terminal::size().context("Failed to read terminal size")?;
        let state = AppState::new(config, width, height)?;

        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        interrupt::reset();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            timers: TokioTimers::new(inbox_tx),
            inbox_rx,
            deadlines: Deadlines::default(),
            last_size: None,
            last_input: Instant::now(),
        })
    }

    /// Runs the event loop until the user quits or Ctrl+C arrives.
    ///
    /// # Errors
    /// Returns an error if drawing or reading terminal input fails.
    pub fn run(&mut self) -> Result<()> {
        info!(
            width = self.state.width,
            height = self.state.height,
            "portfolio started"
        );
        self.dispatch(UiEvent::Loaded);

        let mut dirty = true;
        while !self.state.should_quit {
            if interrupt::is_interrupted() {
                info!("interrupted; quitting");
                break;
            }

            let events = self.collect_events()?;
            if !events.is_empty() {
                dirty = true;
            }
            for event in events {
                self.dispatch(event);
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        self.timers.cancel_pending();
        self.deadlines.clear();
        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Drains the inbox, polls the terminal, and prepends a `Frame` event if
    /// the terminal size changed.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(event) = self.inbox_rx.try_recv() {
            if matches!(event, UiEvent::Timer(_)) {
                self.deadlines.delivered();
            }
            events.push(event);
        }

        let poll_duration = if !events.is_empty() {
            Duration::ZERO
        } else {
            let limit = if self.needs_fast_poll() {
                FRAME_DURATION
            } else {
                IDLE_POLL_DURATION
            };
            self.deadlines.poll_timeout(Instant::now(), limit)
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
            self.last_input = Instant::now();
        }

        let size = self.terminal.size()?;
        if self.last_size != Some((size.width, size.height)) {
            self.last_size = Some((size.width, size.height));
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );
        }

        Ok(events)
    }

    /// Fast polling while timers drive visible animation or the user is
    /// interacting.
    fn needs_fast_poll(&self) -> bool {
        self.state.hero.sequencer.is_running()
            || self.state.carousel.is_transitioning()
            || self.last_input.elapsed() < IDLE_POLL_DURATION
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn dispatch(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::Schedule { delay, timer } => {
                self.deadlines.push(Instant::now() + delay);
                self.timers.send_after(delay, UiEvent::Timer(timer));
            }
            UiEffect::OpenUrl { url } => {
                if let Err(error) = open::that(&url) {
                    warn!(%url, %error, "failed to open url");
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
