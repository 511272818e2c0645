//! Hero feature: headline typewriter and the staggered intro.

mod render;
mod state;
mod update;

pub use render::hero_lines;
pub use state::{HERO_ELEMENTS, HeroState};
pub use update::{on_home_visible, on_loaded, on_slot_mount_change, on_tick, show_element};
