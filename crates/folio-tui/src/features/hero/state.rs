//! Hero state.

use folio_core::typewriter::{Sequencer, TextSlot, TypedText};

/// Tagline, description and buttons, revealed one after another.
pub const HERO_ELEMENTS: usize = 3;

/// Typewriter and its text slot, plus the intro reveal flags.
///
/// `slot` is `None` while the page is unmounted (terminal too small); the
/// sequencer notices at its next step and stops.
#[derive(Debug)]
pub struct HeroState {
    pub sequencer: Sequencer,
    pub slot: Option<TypedText>,
    shown: [bool; HERO_ELEMENTS],
}

impl HeroState {
    pub fn new(sequencer: Sequencer) -> Self {
        Self {
            sequencer,
            slot: Some(TypedText::new()),
            shown: [false; HERO_ELEMENTS],
        }
    }

    pub fn is_shown(&self, element: usize) -> bool {
        self.shown.get(element).copied().unwrap_or(false)
    }

    pub(super) fn set_shown(&mut self, element: usize) {
        if let Some(shown) = self.shown.get_mut(element) {
            *shown = true;
        }
    }

    /// Drops the slot, as if its element left the document.
    pub fn unmount_slot(&mut self) {
        self.slot = None;
    }

    /// Mounts a fresh, empty slot. Keeps an existing one.
    ///
    /// The new slot shows the cursor only if a run is still in flight; an
    /// idle sequencer sets it up itself when it is restarted.
    pub fn mount_slot(&mut self) {
        if self.slot.is_some() {
            return;
        }
        let mut slot = TypedText::new();
        slot.set_visible(true);
        slot.set_cursor_visible(self.sequencer.is_running());
        self.slot = Some(slot);
    }
}
