//! Text slot the sequencer writes into.

/// An externally owned, mutable text container.
///
/// The sequencer is the only writer. Availability is expressed by the caller
/// passing `Option<&mut impl TextSlot>` at each step: `None` means the slot
/// is gone (unmounted) and the current run aborts.
pub trait TextSlot {
    /// Replaces the slot content.
    fn set_text(&mut self, text: &str);

    /// Shows or hides the cursor marker next to the text.
    fn set_cursor_visible(&mut self, visible: bool);

    /// Shows or hides the slot as a whole.
    fn set_visible(&mut self, visible: bool);
}

/// Plain in-memory slot, rendered by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypedText {
    text: String,
    cursor_visible: bool,
    visible: bool,
}

impl TypedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl TextSlot for TypedText {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
