//! Carousel state.

use folio_core::config::LayoutConfig;

/// Slides shown at once for a terminal `width` columns wide, and whether the
/// carousel loops.
///
/// Narrow terminals show one looping slide; from the mobile breakpoint two,
/// from the wide breakpoint three, both without looping.
pub fn slides_per_view(width: u16, layout: &LayoutConfig) -> (usize, bool) {
    if width < layout.mobile_breakpoint {
        (1, true)
    } else if width < layout.wide_breakpoint {
        (2, false)
    } else {
        (3, false)
    }
}

/// Carousel position and the transition lock.
///
/// While a slide change is in flight both directions are disabled and input
/// is dropped; the transition ends when the matching settle timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    slide_count: usize,
    per_view: usize,
    looping: bool,
    transition: Option<u64>,
    next_transition: u64,
}

impl CarouselState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            index: 0,
            slide_count,
            per_view: 1,
            looping: true,
            transition: None,
            next_transition: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Applies a breakpoint change, clamping the position into range.
    pub fn configure(&mut self, per_view: usize, looping: bool) {
        self.per_view = per_view.max(1);
        self.looping = looping;
        self.index = self.index.min(self.max_index());
    }

    /// Last valid position.
    pub fn max_index(&self) -> usize {
        if self.looping {
            self.slide_count.saturating_sub(1)
        } else {
            self.slide_count.saturating_sub(self.per_view)
        }
    }

    /// Number of pagination dots.
    pub fn page_count(&self) -> usize {
        if self.slide_count == 0 {
            0
        } else {
            self.max_index() + 1
        }
    }

    pub fn can_prev(&self) -> bool {
        !self.is_transitioning() && self.slide_count > 1 && (self.looping || self.index > 0)
    }

    pub fn can_next(&self) -> bool {
        !self.is_transitioning()
            && self.slide_count > 1
            && (self.looping || self.index < self.max_index())
    }

    /// Moves forward. Returns the id of the transition started, or `None`
    /// if the move is not possible right now.
    pub fn slide_next(&mut self) -> Option<u64> {
        if !self.can_next() {
            return None;
        }
        self.index = if self.looping {
            (self.index + 1) % self.slide_count
        } else {
            self.index + 1
        };
        Some(self.begin_transition())
    }

    /// Moves back. See [`slide_next`](Self::slide_next).
    pub fn slide_prev(&mut self) -> Option<u64> {
        if !self.can_prev() {
            return None;
        }
        self.index = if self.looping {
            (self.index + self.slide_count - 1) % self.slide_count
        } else {
            self.index - 1
        };
        Some(self.begin_transition())
    }

    /// Jumps to position `index` (a pagination dot). See
    /// [`slide_next`](Self::slide_next).
    pub fn slide_to(&mut self, index: usize) -> Option<u64> {
        if self.is_transitioning() || index == self.index || index > self.max_index() {
            return None;
        }
        self.index = index;
        Some(self.begin_transition())
    }

    /// Ends the transition `id`. Stale ids are ignored.
    pub fn settle(&mut self, id: u64) -> bool {
        if self.transition == Some(id) {
            self.transition = None;
            true
        } else {
            false
        }
    }

    /// Slide indexes currently on screen, left to right.
    pub fn visible(&self) -> Vec<usize> {
        if self.slide_count == 0 {
            return Vec::new();
        }
        if self.looping {
            return vec![self.index];
        }
        (self.index..(self.index + self.per_view).min(self.slide_count)).collect()
    }

    fn begin_transition(&mut self) -> u64 {
        let id = self.next_transition;
        self.next_transition = self.next_transition.wrapping_add(1);
        self.transition = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        let layout = LayoutConfig::default();
        assert_eq!(slides_per_view(60, &layout), (1, true));
        assert_eq!(slides_per_view(80, &layout), (2, false));
        assert_eq!(slides_per_view(119, &layout), (2, false));
        assert_eq!(slides_per_view(120, &layout), (3, false));
    }

    #[test]
    fn test_looping_wraps_both_ways() {
        let mut carousel = CarouselState::new(3);
        let id = carousel.slide_prev().unwrap();
        assert_eq!(carousel.index(), 2);
        assert!(carousel.settle(id));
        let id = carousel.slide_next().unwrap();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.settle(id));
    }

    #[test]
    fn test_input_ignored_during_transition() {
        let mut carousel = CarouselState::new(5);
        let id = carousel.slide_next().unwrap();
        assert!(carousel.is_transitioning());
        assert!(!carousel.can_next());
        assert!(!carousel.can_prev());
        assert_eq!(carousel.slide_next(), None);
        assert_eq!(carousel.slide_prev(), None);
        assert_eq!(carousel.index(), 1);

        assert!(!carousel.settle(id + 1));
        assert!(carousel.is_transitioning());
        assert!(carousel.settle(id));
        assert!(carousel.can_next());
    }

    #[test]
    fn test_bounded_mode_stops_at_ends() {
        let mut carousel = CarouselState::new(5);
        carousel.configure(3, false);
        assert_eq!(carousel.max_index(), 2);
        assert_eq!(carousel.page_count(), 3);
        assert_eq!(carousel.slide_prev(), None);

        for _ in 0..2 {
            let id = carousel.slide_next().unwrap();
            carousel.settle(id);
        }
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.visible(), vec![2, 3, 4]);
        assert_eq!(carousel.slide_next(), None);
    }

    #[test]
    fn test_configure_clamps_index() {
        let mut carousel = CarouselState::new(5);
        carousel.configure(1, true);
        for _ in 0..4 {
            let id = carousel.slide_next().unwrap();
            carousel.settle(id);
        }
        assert_eq!(carousel.index(), 4);
        carousel.configure(3, false);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_single_slide_never_moves() {
        let mut carousel = CarouselState::new(1);
        assert_eq!(carousel.slide_next(), None);
        assert_eq!(carousel.visible(), vec![0]);
        assert_eq!(carousel.page_count(), 1);
    }

    #[test]
    fn test_slide_to_jumps_and_locks() {
        let mut carousel = CarouselState::new(5);
        carousel.configure(2, false);
        assert_eq!(carousel.slide_to(0), None);
        assert_eq!(carousel.slide_to(4), None);

        let id = carousel.slide_to(3).unwrap();
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.slide_to(1), None);
        carousel.settle(id);
        assert!(carousel.slide_to(1).is_some());
        assert_eq!(carousel.index(), 1);
    }
}
