//! Feature slices for the page (state/update/render per slice).

pub mod about;
pub mod contact;
pub mod hero;
pub mod nav;
pub mod page;
pub mod skills;
