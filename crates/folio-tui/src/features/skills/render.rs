//! Skills carousel rendering.

use folio_core::config::SlideConfig;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::common::text::{center_offset, pad_to_width};
use crate::common::{Hotspot, LineBuilder};
use crate::features::page::{PageTarget, heading};
use crate::state::{AppState, SectionId};

const SLIDE_GAP: usize = 2;

/// Width of the single centered slide in looping mode.
const SOLO_SLIDE_WIDTH: usize = 36;

/// Skills section lines: slides, then the prev/next controls and dots.
/// The arrows and dots are pushed to `hotspots`.
pub fn skills_lines(
    app: &AppState,
    width: usize,
    hotspots: &mut Vec<Hotspot<PageTarget>>,
) -> Vec<Line<'static>> {
    let slides = &app.config.skills.slides;
    let carousel = &app.carousel;
    let mut lines = heading(SectionId::Skills.title(), width);

    if slides.is_empty() {
        return lines;
    }

    let visible = carousel.visible();
    let count = visible.len().max(1);
    let (slide_width, indent) = if carousel.is_looping() {
        let w = SOLO_SLIDE_WIDTH.min(width);
        (w, center_offset(w, width))
    } else {
        let w = width.saturating_sub(SLIDE_GAP * (count - 1)) / count;
        (w, 0)
    };
    let item_rows = slides.iter().map(|s| s.items.len()).max().unwrap_or(0);

    let border = if carousel.is_transitioning() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let boxes: Vec<Vec<Vec<Span<'static>>>> = visible
        .iter()
        .filter_map(|&i| slides.get(i))
        .map(|slide| slide_box(slide, slide_width, item_rows, border))
        .collect();

    for row in 0..item_rows + 4 {
        let mut spans = vec![Span::raw(" ".repeat(indent))];
        for (n, slide) in boxes.iter().enumerate() {
            if n > 0 {
                spans.push(Span::raw(" ".repeat(SLIDE_GAP)));
            }
            spans.extend(slide[row].iter().cloned());
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    let (controls, spots) = controls(app, width).finish(lines.len());
    lines.push(controls);
    hotspots.extend(spots);
    lines.push(Line::default());
    lines
}

/// One bordered slide, `item_rows + 4` rows of exactly `width` columns.
fn slide_box(
    slide: &SlideConfig,
    width: usize,
    item_rows: usize,
    border: Style,
) -> Vec<Vec<Span<'static>>> {
    let inner = width.saturating_sub(4);
    let rule = "─".repeat(width.saturating_sub(2));
    let row = |content: Span<'static>| {
        vec![
            Span::styled("│ ", border),
            content,
            Span::styled(" │", border),
        ]
    };

    let mut rows = vec![vec![Span::styled(format!("╭{rule}╮"), border)]];
    rows.push(row(Span::styled(
        pad_to_width(&slide.title, inner),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    rows.push(vec![Span::styled(format!("├{rule}┤"), border)]);
    for i in 0..item_rows {
        let item = slide
            .items
            .get(i)
            .map(|item| format!("• {item}"))
            .unwrap_or_default();
        rows.push(row(Span::raw(pad_to_width(&item, inner))));
    }
    rows.push(vec![Span::styled(format!("╰{rule}╯"), border)]);
    rows
}

/// `‹ h  ● ○ ○  l ›`, with unavailable directions dimmed.
fn controls(app: &AppState, width: usize) -> LineBuilder<PageTarget> {
    let carousel = &app.carousel;
    let arrow = |enabled: bool| {
        if enabled {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let mut line = LineBuilder::new();
    line.push_target(
        Span::styled("‹ h", arrow(carousel.can_prev())),
        PageTarget::SlidePrev,
    );
    line.push(Span::raw("   "));
    for i in 0..carousel.page_count() {
        if i > 0 {
            line.push(Span::raw(" "));
        }
        let dot = if i == carousel.index() { "●" } else { "○" };
        line.push_target(
            Span::styled(dot, Style::default().fg(Color::Gray)),
            PageTarget::SlidePage(i),
        );
    }
    line.push(Span::raw("   "));
    line.push_target(
        Span::styled("l ›", arrow(carousel.can_next())),
        PageTarget::SlideNext,
    );
    line.indent(center_offset(line.width(), width));
    line
}
