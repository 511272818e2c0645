//! Hero updates.

use std::time::Duration;

use folio_core::config::RevealConfig;
use folio_core::typewriter::Tick;
use tracing::debug;

use super::state::{HERO_ELEMENTS, HeroState};
use crate::effects::{EffectScheduler, UiEffect};
use crate::events::Timer;

/// Page load: schedules the staggered intro and starts the typewriter.
pub fn on_loaded(hero: &mut HeroState, reveal: &RevealConfig, effects: &mut Vec<UiEffect>) {
    for element in 0..HERO_ELEMENTS {
        let delay = reveal.stagger_base_ms + element as u64 * reveal.stagger_step_ms;
        effects.push(UiEffect::Schedule {
            delay: Duration::from_millis(delay),
            timer: Timer::HeroElement(element),
        });
    }

    let HeroState {
        sequencer, slot, ..
    } = hero;
    sequencer.start(slot.as_mut(), &mut EffectScheduler::new(effects));
}

pub fn show_element(hero: &mut HeroState, element: usize) {
    debug!(element, "hero element shown");
    hero.set_shown(element);
}

pub fn on_tick(hero: &mut HeroState, tick: Tick, effects: &mut Vec<UiEffect>) {
    let HeroState {
        sequencer, slot, ..
    } = hero;
    sequencer.on_tick(tick, slot.as_mut(), &mut EffectScheduler::new(effects));
}

/// Mounts or unmounts the text slot. When the home section then becomes
/// visible the caller re-arms the sequencer through `notify_visible`.
pub fn on_slot_mount_change(hero: &mut HeroState, mounted: bool) {
    if mounted {
        hero.mount_slot();
    } else {
        hero.unmount_slot();
    }
}

/// Home section crossed its visibility threshold.
pub fn on_home_visible(hero: &mut HeroState, effects: &mut Vec<UiEffect>) -> bool {
    let HeroState {
        sequencer, slot, ..
    } = hero;
    sequencer.notify_visible(slot.as_mut(), &mut EffectScheduler::new(effects))
}
