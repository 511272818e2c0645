//! Clickable spans inside rendered lines.
//!
//! Line builders record where their clickable spans land; the reducer maps a
//! mouse position back through the same records, so what is drawn and what
//! is clickable come from one place.

use std::ops::Range;

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// A clickable column range on one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotspot<T> {
    pub row: usize,
    pub cols: Range<usize>,
    pub target: T,
}

/// Target of the first hotspot covering (`row`, `col`).
pub fn target_at<T: Copy>(hotspots: &[Hotspot<T>], row: usize, col: usize) -> Option<T> {
    hotspots
        .iter()
        .find(|spot| spot.row == row && spot.cols.contains(&col))
        .map(|spot| spot.target)
}

/// Builds one line span by span, remembering the columns of targeted spans.
#[derive(Debug)]
pub struct LineBuilder<T> {
    spans: Vec<Span<'static>>,
    width: usize,
    targets: Vec<(Range<usize>, T)>,
}

impl<T> Default for LineBuilder<T> {
    fn default() -> Self {
        Self {
            spans: Vec::new(),
            width: 0,
            targets: Vec::new(),
        }
    }
}

impl<T> LineBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns used so far.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn push(&mut self, span: Span<'static>) {
        self.width += span.content.width();
        self.spans.push(span);
    }

    pub fn push_target(&mut self, span: Span<'static>, target: T) {
        let start = self.width;
        self.push(span);
        self.targets.push((start..self.width, target));
    }

    /// Shifts the whole line `cols` columns to the right.
    pub fn indent(&mut self, cols: usize) {
        if cols == 0 {
            return;
        }
        self.spans.insert(0, Span::raw(" ".repeat(cols)));
        self.width += cols;
        for (range, _) in &mut self.targets {
            *range = range.start + cols..range.end + cols;
        }
    }

    /// The finished line, with its hotspots placed on `row`.
    pub fn finish(self, row: usize) -> (Line<'static>, Vec<Hotspot<T>>) {
        let hotspots = self
            .targets
            .into_iter()
            .map(|(cols, target)| Hotspot { row, cols, target })
            .collect();
        (Line::from(self.spans), hotspots)
    }
}
