//! Page scroll indicator.
//!
//! ratatui's built-in Scrollbar rounds the thumb ends separately, so the
//! thumb length wobbles while scrolling. This one fixes the thumb length up
//! front and places it so it touches the bottom at maximum scroll.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const THUMB: &str = "┃";
const TRACK: &str = "│";

/// Scroll indicator drawn in the rightmost column of its area.
#[derive(Debug, Clone, Copy)]
pub struct PageScrollbar {
    page_height: usize,
    viewport_height: usize,
    offset: usize,
}

impl PageScrollbar {
    pub fn new(page_height: usize, viewport_height: usize, offset: usize) -> Self {
        Self {
            page_height,
            viewport_height,
            offset,
        }
    }

    /// Row range of the thumb within a track of `track` rows, or `None`
    /// when the page fits on screen.
    fn thumb(&self, track: usize) -> Option<(usize, usize)> {
        let max_offset = self.page_height.saturating_sub(self.viewport_height);
        if track == 0 || max_offset == 0 {
            return None;
        }
        let len = (track * self.viewport_height)
            .div_ceil(self.page_height)
            .clamp(1, track);
        let start = self.offset.min(max_offset) * (track - len) / max_offset;
        Some((start, start + len))
    }
}

impl Widget for PageScrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((start, end)) = self.thumb(area.height as usize) else {
            return;
        };
        let x = area.right().saturating_sub(1);
        for (row, y) in (area.top()..area.bottom()).enumerate() {
            let (symbol, style) = if (start..end).contains(&row) {
                (THUMB, Style::default().fg(Color::Cyan))
            } else {
                (TRACK, Style::default().fg(Color::DarkGray))
            };
            buf.set_string(x, y, symbol, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_when_page_fits() {
        assert_eq!(PageScrollbar::new(20, 20, 0).thumb(20), None);
        assert_eq!(PageScrollbar::new(5, 20, 0).thumb(20), None);
    }

    #[test]
    fn test_thumb_spans_top_and_bottom() {
        let bar = PageScrollbar::new(100, 20, 0);
        assert_eq!(bar.thumb(20), Some((0, 4)));

        let bar = PageScrollbar::new(100, 20, 80);
        assert_eq!(bar.thumb(20), Some((16, 20)));
    }

    #[test]
    fn test_thumb_length_stable_while_scrolling() {
        let lengths: Vec<usize> = (0..=80)
            .map(|offset| {
                let (start, end) = PageScrollbar::new(100, 20, offset).thumb(20).unwrap();
                end - start
            })
            .collect();
        assert!(lengths.windows(2).all(|w| w[0] == w[1]));
    }
}
