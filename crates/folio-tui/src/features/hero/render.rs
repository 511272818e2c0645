//! Hero rendering.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::common::text::{center_offset, truncate_with_ellipsis, wrap_words};
use crate::state::AppState;

/// Cursor marker drawn after the typed text.
pub const CURSOR: &str = "▌";

const TAGLINE: usize = 0;
const DESCRIPTION: usize = 1;
const BUTTONS: usize = 2;

/// Hero lines, vertically centered in at least `min_height` rows.
pub fn hero_lines(app: &AppState, width: usize, min_height: usize) -> Vec<Line<'static>> {
    let profile = &app.config.profile;
    let hero = &app.hero;
    let mut body = Vec::new();

    body.extend(element(
        hero.is_shown(TAGLINE),
        vec![centered(
            vec![Span::styled(
                profile.tagline.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC),
            )],
            width,
        )],
    ));
    body.push(Line::default());
    body.push(centered(
        vec![
            Span::raw("I'm "),
            Span::styled(
                profile.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ],
        width,
    ));
    body.push(typed_line(app, width));
    body.push(Line::default());

    let description = wrap_words(&profile.description, width.min(72))
        .into_iter()
        .map(|line| centered(vec![Span::raw(line)], width))
        .collect();
    body.extend(element(hero.is_shown(DESCRIPTION), description));
    body.push(Line::default());
    body.extend(element(
        hero.is_shown(BUTTONS),
        vec![buttons(app, width)],
    ));

    let padding = min_height.saturating_sub(body.len());
    let top = padding / 2;
    let mut lines = vec![Line::default(); top];
    lines.extend(body);
    lines.resize(lines.len() + (padding - top), Line::default());
    lines
}

/// The typewriter slot: revealed text plus the cursor marker.
fn typed_line(app: &AppState, width: usize) -> Line<'static> {
    let Some(slot) = app.hero.slot.as_ref().filter(|slot| slot.is_visible()) else {
        return Line::default();
    };
    let text = truncate_with_ellipsis(slot.text(), width.saturating_sub(1));
    let mut spans = vec![Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    if slot.cursor_visible() {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }
    centered(spans, width)
}

fn buttons(app: &AppState, width: usize) -> Line<'static> {
    let button = Style::default().fg(Color::Black).bg(Color::Cyan);
    let key = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();
    if app.config.profile.resume_url.is_some() {
        spans.push(Span::styled(" Download CV ", button));
        spans.push(Span::styled(" o ", key));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(
        " Contact Me ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::REVERSED),
    ));
    spans.push(Span::styled(" c ", key));
    centered(spans, width)
}

/// Hidden elements keep their rows but draw nothing.
fn element(shown: bool, lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    if shown {
        lines
    } else {
        vec![Line::default(); lines.len()]
    }
}

fn centered(mut spans: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    let pad = center_offset(used, width);
    if pad > 0 {
        spans.insert(0, Span::raw(" ".repeat(pad)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use folio_core::config::Config;
    use folio_core::typewriter::TextSlot;

    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn app() -> AppState {
        AppState::new(Config::default(), 100, 30).unwrap()
    }

    #[test]
    fn test_hero_fills_min_height() {
        let app = app();
        assert_eq!(hero_lines(&app, 80, 29).len(), 29);
        assert!(hero_lines(&app, 80, 3).len() > 3);
    }

    #[test]
    fn test_elements_hidden_until_shown() {
        let mut app = app();
        let all = |app: &AppState| -> String {
            hero_lines(app, 80, 0).iter().map(text).collect::<Vec<_>>().join("\n")
        };
        assert!(!all(&app).contains("welcome"));
        assert!(!all(&app).contains("Contact Me"));
        assert!(all(&app).contains("Avery Quinn"));

        crate::features::hero::show_element(&mut app.hero, TAGLINE);
        assert!(all(&app).contains("welcome"));
        assert!(!all(&app).contains("Contact Me"));
    }

    #[test]
    fn test_typed_line_shows_text_and_cursor() {
        let mut app = app();
        let slot = app.hero.slot.as_mut().unwrap();
        slot.set_visible(true);
        slot.set_text("Creat");
        slot.set_cursor_visible(true);
        assert_eq!(text(&typed_line(&app, 20)).trim(), "Creat▌");

        app.hero.slot.as_mut().unwrap().set_cursor_visible(false);
        assert_eq!(text(&typed_line(&app, 20)).trim(), "Creat");

        app.hero.unmount_slot();
        assert_eq!(text(&typed_line(&app, 20)), "");
    }
}
