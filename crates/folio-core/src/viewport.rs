//! Viewport visibility tracking.
//!
//! The page is a vertical stack of regions measured in rows. A
//! [`VisibilityObserver`] watches a set of regions and reports when each one
//! crosses its visibility threshold, the way an intersection observer does in
//! a browser. [`active_section`] picks the region a nav bar should highlight.

use std::collections::HashMap;
use std::hash::Hash;

/// A vertical span of the page, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub top: usize,
    pub height: usize,
}

impl Region {
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// The visible window onto the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible row (scroll offset).
    pub offset: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(offset: usize, height: usize) -> Self {
        Self { offset, height }
    }

    pub fn bottom(&self) -> usize {
        self.offset + self.height
    }
}

/// Fraction of `region` that is on screen, in `[0, 1]`.
///
/// Measured against `min(region.height, viewport.height)` so a region taller
/// than the viewport counts as fully visible when it fills the screen.
pub fn visible_ratio(region: Region, viewport: Viewport) -> f32 {
    let basis = region.height.min(viewport.height);
    if basis == 0 {
        return 0.0;
    }
    let start = region.top.max(viewport.offset);
    let end = region.bottom().min(viewport.bottom());
    let overlap = end.saturating_sub(start);
    (overlap as f32 / basis as f32).min(1.0)
}

/// A threshold crossing reported by [`VisibilityObserver::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange<K> {
    Entered(K),
    Left(K),
}

/// Reports threshold crossings for a set of observed regions.
///
/// A region counts as intersecting when its [`visible_ratio`] is at least
/// `threshold`; a threshold of 0 means any overlap at all. Only changes are
/// reported, so repeated updates with the same scroll position are silent.
#[derive(Debug, Clone)]
pub struct VisibilityObserver<K> {
    threshold: f32,
    /// Observed keys and whether each was intersecting at the last update.
    observed: HashMap<K, bool>,
}

impl<K> VisibilityObserver<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates an observer. `threshold` is clamped to `[0, 1]`.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            observed: HashMap::new(),
        }
    }

    pub fn observe(&mut self, key: K) {
        self.observed.entry(key).or_insert(false);
    }

    pub fn unobserve(&mut self, key: K) {
        self.observed.remove(&key);
    }

    /// Forgets the last known state so the next update reports every
    /// visible region as entered again.
    pub fn reset(&mut self) {
        for intersecting in self.observed.values_mut() {
            *intersecting = false;
        }
    }

    /// Recomputes intersection for every observed key found in `regions`.
    ///
    /// Keys in `regions` that are not observed are skipped; changes come out
    /// in `regions` order.
    pub fn update<I>(&mut self, regions: I, viewport: Viewport) -> Vec<VisibilityChange<K>>
    where
        I: IntoIterator<Item = (K, Region)>,
    {
        let mut changes = Vec::new();
        for (key, region) in regions {
            let Some(was) = self.observed.get_mut(&key) else {
                continue;
            };
            let ratio = visible_ratio(region, viewport);
            let now = if self.threshold <= 0.0 {
                ratio > 0.0
            } else {
                ratio >= self.threshold
            };
            if now != *was {
                *was = now;
                changes.push(if now {
                    VisibilityChange::Entered(key)
                } else {
                    VisibilityChange::Left(key)
                });
            }
        }
        changes
    }
}

/// The last region whose top, less `buffer` rows, is at or above `offset`.
///
/// With `buffer > 0` a link lights up slightly before its section reaches the
/// top of the viewport. Returns `None` only for an empty iterator.
///
/// When no top has been reached yet the first region is returned rather than
/// nothing, so the nav bar always has one highlighted link.
pub fn active_section<K, I>(regions: I, offset: usize, buffer: usize) -> Option<K>
where
    I: IntoIterator<Item = (K, Region)>,
{
    let mut current = None;
    let mut first = None;
    for (key, region) in regions {
        if offset >= region.top.saturating_sub(buffer) {
            current = Some(key);
        } else if first.is_none() && current.is_none() {
            first = Some(key);
        }
    }
    current.or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_ratio_partial() {
        let region = Region::new(10, 10);
        assert!((visible_ratio(region, Viewport::new(0, 15)) - 0.5).abs() < f32::EPSILON);
        assert!((visible_ratio(region, Viewport::new(0, 10))).abs() < f32::EPSILON);
        assert!((visible_ratio(region, Viewport::new(10, 30)) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_visible_ratio_tall_region_fills_screen() {
        let region = Region::new(0, 100);
        let ratio = visible_ratio(region, Viewport::new(40, 20));
        assert!((ratio - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_visible_ratio_empty() {
        assert!(visible_ratio(Region::new(0, 0), Viewport::new(0, 10)).abs() < f32::EPSILON);
        assert!(visible_ratio(Region::new(0, 10), Viewport::new(0, 0)).abs() < f32::EPSILON);
    }

    #[test]
    fn test_observer_reports_only_crossings() {
        let mut observer = VisibilityObserver::new(0.5);
        observer.observe("home");
        let regions = [("home", Region::new(0, 10))];

        let changes = observer.update(regions, Viewport::new(0, 20));
        assert_eq!(changes, vec![VisibilityChange::Entered("home")]);

        assert!(observer.update(regions, Viewport::new(2, 20)).is_empty());

        let changes = observer.update(regions, Viewport::new(6, 20));
        assert_eq!(changes, vec![VisibilityChange::Left("home")]);

        let changes = observer.update(regions, Viewport::new(4, 20));
        assert_eq!(changes, vec![VisibilityChange::Entered("home")]);
    }

    #[test]
    fn test_observer_skips_unobserved() {
        let mut observer = VisibilityObserver::new(0.2);
        observer.observe(1);
        observer.observe(2);
        observer.unobserve(1);
        let regions = [(1, Region::new(0, 5)), (2, Region::new(5, 5))];

        let changes = observer.update(regions, Viewport::new(0, 10));
        assert_eq!(changes, vec![VisibilityChange::Entered(2)]);
    }

    #[test]
    fn test_observer_reset_reports_again() {
        let mut observer = VisibilityObserver::new(0.5);
        observer.observe('a');
        let regions = [('a', Region::new(0, 4))];
        assert_eq!(observer.update(regions, Viewport::new(0, 8)).len(), 1);
        observer.reset();
        assert_eq!(
            observer.update(regions, Viewport::new(0, 8)),
            vec![VisibilityChange::Entered('a')]
        );
    }

    #[test]
    fn test_zero_threshold_means_any_overlap() {
        let mut observer = VisibilityObserver::new(0.0);
        observer.observe(0);
        let regions = [(0, Region::new(9, 10))];
        assert_eq!(
            observer.update(regions, Viewport::new(0, 10)),
            vec![VisibilityChange::Entered(0)]
        );
    }

    #[test]
    fn test_active_section_uses_buffer() {
        let regions = [
            ("home", Region::new(0, 20)),
            ("about", Region::new(20, 15)),
            ("skills", Region::new(35, 10)),
        ];
        assert_eq!(active_section(regions, 0, 3), Some("home"));
        assert_eq!(active_section(regions, 16, 3), Some("home"));
        assert_eq!(active_section(regions, 17, 3), Some("about"));
        assert_eq!(active_section(regions, 40, 3), Some("skills"));
    }

    #[test]
    fn test_active_section_falls_back_to_first() {
        let regions = [("about", Region::new(10, 5))];
        assert_eq!(active_section(regions, 0, 0), Some("about"));
        assert_eq!(active_section::<&str, _>([], 0, 0), None);
    }
}
