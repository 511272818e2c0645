//! Nav bar and mobile menu rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::common::text::truncate_with_ellipsis;
use crate::common::{Hotspot, LineBuilder, target_at};
use crate::state::{AppState, SectionId};

/// Rows taken by the nav bar.
pub const NAV_HEIGHT: u16 = 1;

const MENU_CLOSED: &str = "☰";
const MENU_OPEN: &str = "✕";

/// Menu width including borders.
const MENU_WIDTH: u16 = 16;

/// What a click on the nav bar can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Link(SectionId),
    /// The compact-mode menu toggle.
    Toggle,
}

/// Draws the nav bar: name on the left, links (or the menu toggle) on the
/// right.
pub fn render_nav_bar(app: &AppState, frame: &mut Frame, area: Rect) {
    let (line, _) = nav_bar(app, area.width as usize);
    let bar = Paragraph::new(line).style(Style::default().bg(Color::Black));
    frame.render_widget(bar, area);
}

/// Nav bar target at column `col`.
pub fn nav_target_at(app: &AppState, col: u16) -> Option<NavTarget> {
    let (_, hotspots) = nav_bar(app, app.width as usize);
    target_at(&hotspots, 0, col as usize)
}

fn nav_bar(app: &AppState, width: usize) -> (Line<'static>, Vec<Hotspot<NavTarget>>) {
    let mut right: Vec<(Span<'static>, Option<NavTarget>)> = Vec::new();
    if app.is_compact() {
        let icon = if app.nav.is_menu_open() {
            MENU_OPEN
        } else {
            MENU_CLOSED
        };
        let toggle = Some(NavTarget::Toggle);
        right.push((Span::styled(" m ", Style::default().fg(Color::DarkGray)), toggle));
        right.push((
            Span::styled(
                icon,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            toggle,
        ));
        right.push((Span::raw(" "), None));
    } else {
        for section in SectionId::ALL {
            let link = Some(NavTarget::Link(section));
            right.push((
                Span::styled(
                    format!("{} ", section.index() + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                link,
            ));
            right.push((
                Span::styled(section.title(), link_style(section == app.nav.active)),
                link,
            ));
            right.push((Span::raw("  "), None));
        }
    }

    let right_width: usize = right.iter().map(|(s, _)| s.content.width()).sum();
    let name_width = width.saturating_sub(right_width + 2);
    let name = truncate_with_ellipsis(&app.config.profile.name, name_width);
    let gap = width.saturating_sub(name.width() + 1 + right_width);

    let mut line = LineBuilder::new();
    line.push(Span::raw(" "));
    line.push(Span::styled(
        name,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    line.push(Span::raw(" ".repeat(gap)));
    for (span, target) in right {
        match target {
            Some(target) => line.push_target(span, target),
            None => line.push(span),
        }
    }
    line.finish(0)
}

/// Dropdown rectangle of the mobile menu within the page area.
fn menu_area(area: Rect) -> Rect {
    let height = (SectionId::ALL.len() as u16 + 2).min(area.height);
    let width = MENU_WIDTH.min(area.width);
    Rect::new(area.right().saturating_sub(width), area.y, width, height)
}

/// Menu entry at screen (`col`, `row`), if the click landed inside the
/// dropdown's border.
pub fn menu_item_at(area: Rect, col: u16, row: u16) -> Option<SectionId> {
    let popup = menu_area(area);
    let inside_x = col > popup.x && col + 1 < popup.right();
    let inside_y = row > popup.y && row + 1 < popup.bottom();
    if !(inside_x && inside_y) {
        return None;
    }
    SectionId::from_index((row - popup.y - 1) as usize)
}

/// Draws the open mobile menu as a dropdown in the top-right of `area`.
pub fn render_menu(app: &AppState, frame: &mut Frame, area: Rect) {
    if !app.nav.is_menu_open() {
        return;
    }

    let popup = menu_area(area);

    let lines: Vec<Line<'static>> = SectionId::ALL
        .into_iter()
        .map(|section| {
            let marker = if section == app.nav.cursor() { "› " } else { "  " };
            let mut style = link_style(section == app.nav.active);
            if section == app.nav.cursor() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(section.title(), style),
            ])
        })
        .collect();

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn link_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    }
}
