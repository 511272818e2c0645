//! Navigation feature: nav bar, active-link highlighting, mobile menu.

mod render;
mod state;

pub use render::{
    NAV_HEIGHT, NavTarget, menu_item_at, nav_target_at, render_menu, render_nav_bar,
};
pub use state::NavState;
