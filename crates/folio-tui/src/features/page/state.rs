//! Page state.

use enum_map::{EnumMap, enum_map};
use folio_core::viewport::{
    Region, VisibilityChange, VisibilityObserver, Viewport, visible_ratio,
};

use super::PageTarget;
use crate::common::{Hotspot, target_at};
use crate::state::SectionId;

/// Fade-in state of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Not scrolled into view yet; rendered blank but still takes its rows.
    Hidden,
    /// Revealed, rendered dimmed until the fade timer fires.
    Fading,
    InView,
}

/// Scroll position, section layout and the two visibility observers.
///
/// The fade observer is one-shot: a section is unobserved as soon as it is
/// revealed, and the home section is never registered with it. The home
/// observer is persistent and re-arms the typewriter.
#[derive(Debug)]
pub struct PageState {
    scroll: usize,
    viewport_height: usize,
    regions: EnumMap<SectionId, Region>,
    page_height: usize,
    reveal: EnumMap<SectionId, Reveal>,
    hotspots: Vec<Hotspot<PageTarget>>,
    fade_observer: VisibilityObserver<SectionId>,
    home_observer: VisibilityObserver<SectionId>,
}

impl PageState {
    pub fn new(fade_threshold: f32, home_threshold: f32) -> Self {
        let mut fade_observer = VisibilityObserver::new(fade_threshold);
        let mut home_observer = VisibilityObserver::new(home_threshold);
        for section in SectionId::ALL {
            if section == SectionId::Home {
                home_observer.observe(section);
            } else {
                fade_observer.observe(section);
            }
        }

        Self {
            scroll: 0,
            viewport_height: 0,
            regions: EnumMap::default(),
            page_height: 0,
            reveal: enum_map! {
                SectionId::Home => Reveal::InView,
                _ => Reveal::Hidden,
            },
            hotspots: Vec::new(),
            fade_observer,
            home_observer,
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn page_height(&self) -> usize {
        self.page_height
    }

    pub fn region(&self, section: SectionId) -> Region {
        self.regions[section]
    }

    pub fn regions(&self) -> impl Iterator<Item = (SectionId, Region)> + '_ {
        self.regions.iter().map(|(section, region)| (section, *region))
    }

    pub fn reveal(&self, section: SectionId) -> Reveal {
        self.reveal[section]
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll, self.viewport_height)
    }

    pub fn max_scroll(&self) -> usize {
        self.page_height.saturating_sub(self.viewport_height)
    }

    /// Replaces the layout and clamps the scroll offset into it.
    pub fn set_layout(
        &mut self,
        regions: EnumMap<SectionId, Region>,
        page_height: usize,
        viewport_height: usize,
    ) {
        self.regions = regions;
        self.page_height = page_height;
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn set_hotspots(&mut self, hotspots: Vec<Hotspot<PageTarget>>) {
        self.hotspots = hotspots;
    }

    /// What sits at page `row`, column `col`, as of the last layout.
    pub fn target_at(&self, row: usize, col: usize) -> Option<PageTarget> {
        target_at(&self.hotspots, row, col)
    }

    /// Whether any row of `section` is on screen.
    pub fn is_on_screen(&self, section: SectionId) -> bool {
        visible_ratio(self.regions[section], self.viewport()) > 0.0
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self
            .scroll
            .saturating_add_signed(delta)
            .min(self.max_scroll());
    }

    pub fn scroll_to_row(&mut self, row: usize) {
        self.scroll = row.min(self.max_scroll());
    }

    pub fn scroll_to(&mut self, section: SectionId) {
        self.scroll_to_row(self.regions[section].top);
    }

    /// Rows moved by a page up/down (one row of overlap).
    pub fn page_step(&self) -> isize {
        self.viewport_height.saturating_sub(1).max(1) as isize
    }

    /// Runs the fade observer. Returns the sections revealed by this update;
    /// they are now `Fading` and no longer observed.
    pub fn observe_fade_in(&mut self) -> Vec<SectionId> {
        let viewport = self.viewport();
        let changes = self.fade_observer.update(
            self.regions.iter().map(|(s, r)| (s, *r)),
            viewport,
        );
        let mut revealed = Vec::new();
        for change in changes {
            if let VisibilityChange::Entered(section) = change {
                self.fade_observer.unobserve(section);
                self.reveal[section] = Reveal::Fading;
                revealed.push(section);
            }
        }
        revealed
    }

    /// Runs the home observer. Returns true when the home section has just
    /// crossed its threshold into view.
    pub fn observe_home(&mut self) -> bool {
        let viewport = self.viewport();
        let changes = self.home_observer.update(
            self.regions.iter().map(|(s, r)| (s, *r)),
            viewport,
        );
        changes.contains(&VisibilityChange::Entered(SectionId::Home))
    }

    /// Forgets the home section's visibility (the page was unmounted), so it
    /// is reported as entered again once the page is back.
    pub fn reset_home(&mut self) {
        self.home_observer.reset();
    }

    pub fn finish_fade(&mut self, section: SectionId) {
        if self.reveal[section] == Reveal::Fading {
            self.reveal[section] = Reveal::InView;
        }
    }
}
