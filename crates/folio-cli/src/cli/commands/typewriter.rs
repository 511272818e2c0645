//! `folio type`: the typewriter headline without the page.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Result, bail};
use folio_core::config::Config;
use folio_core::interrupt::{self, InterruptedError};
use folio_core::typewriter::{Sequencer, Tick, TokioTimers, TypedText, VirtualScheduler};
use tokio::sync::mpsc;
use tracing::info;

const CURSOR: char = '▌';

/// Renders the slot as one line: text plus cursor, or nothing when hidden.
fn render_slot(slot: &TypedText) -> String {
    if !slot.is_visible() {
        return String::new();
    }
    let mut line = slot.text().to_string();
    if slot.cursor_visible() {
        line.push(CURSOR);
    }
    line
}

/// Writes `[   600ms] text▌` when the rendered slot differs from `last`.
fn print_change(
    out: &mut impl Write,
    now: Duration,
    slot: &TypedText,
    last: &mut Option<String>,
) -> io::Result<()> {
    let line = render_slot(slot);
    if last.as_deref() == Some(line.as_str()) {
        return Ok(());
    }
    writeln!(out, "[{:>6}ms] {line}", now.as_millis())?;
    *last = Some(line);
    Ok(())
}

/// Runs `cycles` phrases in simulated time and prints every visible change.
///
/// # Errors
/// Fails on an invalid phrase list, `cycles == 0`, a write error, or Ctrl+C.
pub fn simulate(config: &Config, cycles: u64, out: &mut impl Write) -> Result<()> {
    if cycles == 0 {
        bail!("--simulate needs --cycles of at least 1");
    }

    let phrases = config.typewriter.phrase_list()?;
    let mut sequencer = Sequencer::new(phrases, config.typewriter.timings());
    let mut slot = TypedText::new();
    let mut clock = VirtualScheduler::new();
    let mut last = None;

    sequencer.start(Some(&mut slot), &mut clock);
    print_change(out, clock.now(), &slot, &mut last)?;

    while sequencer.cycles_completed() < cycles {
        if interrupt::is_interrupted() {
            return Err(InterruptedError.into());
        }
        let Some(tick) = clock.pop_until(Duration::MAX) else {
            break;
        };
        sequencer.on_tick(tick, Some(&mut slot), &mut clock);
        print_change(out, clock.now(), &slot, &mut last)?;
    }

    out.flush()?;
    Ok(())
}

/// Runs the typewriter in real time on a single redrawn line.
///
/// `cycles == 0` runs until Ctrl+C.
///
/// # Errors
/// Fails on an invalid phrase list, a write error, or Ctrl+C.
pub async fn run_live(config: &Config, cycles: u64) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Tick>();
    let mut timers = TokioTimers::new(tx);
    let phrases = config.typewriter.phrase_list()?;
    let mut sequencer = Sequencer::new(phrases, config.typewriter.timings());
    let mut slot = TypedText::new();

    info!(cycles, "live typewriter started");
    sequencer.start(Some(&mut slot), &mut timers);
    redraw(&slot)?;

    while cycles == 0 || sequencer.cycles_completed() < cycles {
        tokio::select! {
            tick = rx.recv() => {
                let Some(tick) = tick else { break };
                sequencer.on_tick(tick, Some(&mut slot), &mut timers);
                redraw(&slot)?;
            }
            () = interrupt::wait_for_interrupt() => {
                timers.cancel_pending();
                println!();
                return Err(InterruptedError.into());
            }
        }
    }

    timers.cancel_pending();
    println!();
    Ok(())
}

fn redraw(slot: &TypedText) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "\r\x1b[2K{}", render_slot(slot))?;
    stdout.flush()
}
