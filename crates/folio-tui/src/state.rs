//! Application state composition.
//!
//! ```text
//! AppState
//! ├── config: Config          (profile, content, tunables)
//! ├── page: PageState         (scroll, layout, reveal, observers)
//! ├── hero: HeroState         (typewriter + slot, staggered elements)
//! ├── nav: NavState           (active link, mobile menu)
//! ├── tabs: TabsState         (about section tabs)
//! └── carousel: CarouselState (skills slides)
//! ```
//!
//! Only the reducer (`update`) mutates this; render functions read it.

use anyhow::Result;
use enum_map::Enum;
use folio_core::config::Config;
use folio_core::typewriter::Sequencer;

use crate::features::about::TabsState;
use crate::features::hero::HeroState;
use crate::features::nav::NavState;
use crate::features::page::PageState;
use crate::features::skills::CarouselState;

/// Page sections, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        self.into_usize()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    pub config: Config,
    pub width: u16,
    pub height: u16,
    pub should_quit: bool,
    pub page: PageState,
    pub hero: HeroState,
    pub nav: NavState,
    pub tabs: TabsState,
    pub carousel: CarouselState,
}

impl AppState {
    /// Creates the state for a terminal of `width` x `height` cells.
    ///
    /// # Errors
    /// Returns an error if the configured phrase list is empty.
    pub fn new(config: Config, width: u16, height: u16) -> Result<Self> {
        let sequencer = Sequencer::new(
            config.typewriter.phrase_list()?,
            config.typewriter.timings(),
        );
        let page = PageState::new(
            config.reveal.threshold,
            config.typewriter.visibility_threshold,
        );
        let tabs = TabsState::new(config.about.tabs.len());
        let carousel = CarouselState::new(config.skills.slides.len());

        Ok(Self {
            config,
            width,
            height,
            should_quit: false,
            page,
            hero: HeroState::new(sequencer),
            nav: NavState::default(),
            tabs,
            carousel,
        })
    }

    /// Whether the terminal is below the configured minimum size.
    pub fn is_too_small(&self) -> bool {
        self.width < self.config.layout.min_width || self.height < self.config.layout.min_height
    }

    /// Whether the layout is in its narrow (mobile) mode.
    pub fn is_compact(&self) -> bool {
        self.width < self.config.layout.mobile_breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_index_roundtrip() {
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(SectionId::from_index(i), Some(section));
        }
        assert_eq!(SectionId::from_index(4), None);
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        let mut config = Config::default();
        config.typewriter.phrases.clear();
        assert!(AppState::new(config, 100, 40).is_err());
    }

    #[test]
    fn test_size_modes() {
        let app = AppState::new(Config::default(), 60, 30).unwrap();
        assert!(app.is_compact());
        assert!(!app.is_too_small());

        let app = AppState::new(Config::default(), 30, 30).unwrap();
        assert!(app.is_too_small());
    }
}
