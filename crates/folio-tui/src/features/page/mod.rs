//! Page feature: scrolling, section layout and fade-in on scroll.
//!
//! - `state.rs`: scroll offset, section regions, reveal state, observers
//! - `compose.rs`: stacks the section renderers into one list of page lines

mod compose;
mod state;

pub use compose::{ComposedPage, PAGE_MARGIN, PageTarget, compose, content_width, heading};
pub use state::{PageState, Reveal};
