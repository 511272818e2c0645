//! Skills feature: the slide carousel.

mod render;
mod state;

pub use render::skills_lines;
pub use state::{CarouselState, slides_per_view};
