//! Shared helpers for rendering.

pub mod hotspot;
pub mod scrollbar;
pub mod text;

pub use hotspot::{Hotspot, LineBuilder, target_at};
pub use scrollbar::PageScrollbar;
