//! About feature: intro text and tabbed panels.

mod render;
mod state;

pub use render::about_lines;
pub use state::TabsState;
