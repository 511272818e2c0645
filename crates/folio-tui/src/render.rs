//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::common::PageScrollbar;
use crate::features::nav::{self, NAV_HEIGHT};
use crate::features::page::{self, PAGE_MARGIN};
use crate::state::AppState;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    if app.is_too_small() {
        render_too_small(app, frame, area);
        return;
    }

    let [nav_area, page_area] =
        Layout::vertical([Constraint::Length(NAV_HEIGHT), Constraint::Min(0)]).areas(area);

    nav::render_nav_bar(app, frame, nav_area);
    render_page(app, frame, page_area);
    nav::render_menu(app, frame, page_area);
}

/// Draws the visible slice of the composed page plus the scrollbar.
fn render_page(app: &AppState, frame: &mut Frame, area: Rect) {
    let viewport_height = area.height as usize;
    let composed = page::compose(app, page::content_width(area.width), viewport_height);

    let scroll = app.page.scroll().min(composed.height().saturating_sub(viewport_height));
    let visible: Vec<Line<'static>> = composed
        .lines
        .into_iter()
        .skip(scroll)
        .take(viewport_height)
        .collect();

    let content_area = Rect::new(
        area.x + PAGE_MARGIN,
        area.y,
        area.width.saturating_sub(PAGE_MARGIN * 2),
        area.height,
    );
    frame.render_widget(Paragraph::new(visible), content_area);
    frame.render_widget(
        PageScrollbar::new(app.page.page_height(), viewport_height, scroll),
        area,
    );
}

fn render_too_small(app: &AppState, frame: &mut Frame, area: Rect) {
    let layout = &app.config.layout;
    let lines = vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{}x{} (need {}x{})",
            app.width, app.height, layout.min_width, layout.min_height
        )),
        Line::from(Span::styled("q to quit", Style::default().fg(Color::DarkGray))),
    ];
    let height = (lines.len() as u16 + 2).min(area.height);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let notice = Paragraph::new(lines)
        .centered()
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(notice, middle);
}

#[cfg(test)]
mod tests {
    use folio_core::config::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::events::UiEvent;
    use crate::update::update;

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(app.width, app.height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn loaded(width: u16, height: u16) -> AppState {
        let mut app = AppState::new(Config::default(), width, height).unwrap();
        update(&mut app, UiEvent::Loaded);
        app
    }

    #[test]
    fn test_nav_bar_lists_links_on_wide_terminal() {
        let app = loaded(100, 30);
        let screen = draw(&app);
        let first = screen.lines().next().unwrap();
        assert!(first.contains("Avery Quinn"));
        assert!(first.contains("1 Home"));
        assert!(first.contains("4 Contact"));
        assert!(!first.contains("☰"));
    }

    #[test]
    fn test_nav_bar_collapses_on_narrow_terminal() {
        let app = loaded(60, 30);
        let first = draw(&app).lines().next().unwrap().to_string();
        assert!(first.contains("☰"));
        assert!(!first.contains("About"));
    }

    #[test]
    fn test_open_menu_lists_sections() {
        let mut app = loaded(60, 30);
        app.nav.toggle_menu();
        let screen = draw(&app);
        assert!(screen.lines().next().unwrap().contains("✕"));
        assert!(screen.contains("Skills"));
        assert!(screen.contains("Contact"));
    }

    #[test]
    fn test_hero_shows_name_on_first_screen() {
        let app = loaded(100, 30);
        let screen = draw(&app);
        assert!(screen.contains("I'm Avery Quinn"));
    }

    #[test]
    fn test_too_small_notice() {
        let app = loaded(30, 10);
        let screen = draw(&app);
        assert!(screen.contains("Terminal too small"));
        assert!(!screen.contains("Avery Quinn"));
    }
}
