//! About section rendering.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::common::text::wrap_words;
use crate::common::{Hotspot, LineBuilder};
use crate::features::page::{PageTarget, heading};
use crate::state::{AppState, SectionId};

/// About section lines. Tab titles are pushed to `hotspots`.
///
/// The panel area is as tall as the tallest tab so switching tabs never
/// shifts the sections below.
pub fn about_lines(
    app: &AppState,
    width: usize,
    hotspots: &mut Vec<Hotspot<PageTarget>>,
) -> Vec<Line<'static>> {
    let about = &app.config.about;
    let mut lines = heading(SectionId::About.title(), width);

    lines.extend(wrap_words(&about.intro, width).into_iter().map(Line::from));
    lines.push(Line::default());

    if about.tabs.is_empty() {
        return lines;
    }

    let mut bar = LineBuilder::new();
    for (i, tab) in about.tabs.iter().enumerate() {
        if i > 0 {
            bar.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if i == app.tabs.active() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        bar.push_target(
            Span::styled(format!(" {} ", tab.title), style),
            PageTarget::Tab(i),
        );
    }
    bar.push(Span::styled("   Tab ⇆", Style::default().fg(Color::DarkGray)));
    let (bar, spots) = bar.finish(lines.len());
    lines.push(bar);
    hotspots.extend(spots);
    lines.push(Line::default());

    let panels: Vec<Vec<String>> = about
        .tabs
        .iter()
        .map(|tab| {
            tab.lines
                .iter()
                .flat_map(|line| wrap_words(line, width))
                .collect()
        })
        .collect();
    let panel_height = panels.iter().map(Vec::len).max().unwrap_or(0);

    let mut panel: Vec<Line<'static>> = panels
        .get(app.tabs.active())
        .map(|p| p.iter().cloned().map(Line::from).collect())
        .unwrap_or_default();
    panel.resize(panel_height, Line::default());
    lines.extend(panel);
    lines.push(Line::default());
    lines
}

#[cfg(test)]
mod tests {
    use folio_core::config::{Config, TabConfig};

    use super::*;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_shows_only_active_tab() {
        let mut app = AppState::new(Config::default(), 100, 30).unwrap();
        let out = text(&about_lines(&app, 80, &mut Vec::new()));
        assert!(out.contains("Brightline Studio"));
        assert!(!out.contains("State University"));

        app.tabs.select_next();
        let out = text(&about_lines(&app, 80, &mut Vec::new()));
        assert!(!out.contains("Brightline Studio"));
        assert!(out.contains("State University"));
    }

    #[test]
    fn test_tab_titles_are_clickable() {
        let app = AppState::new(Config::default(), 100, 30).unwrap();
        let mut spots = Vec::new();
        let lines = about_lines(&app, 80, &mut spots);

        let targets: Vec<PageTarget> = spots.iter().map(|spot| spot.target).collect();
        assert_eq!(targets, vec![PageTarget::Tab(0), PageTarget::Tab(1)]);
        let education = &spots[1];
        let label: String = text(&lines[education.row..=education.row])
            .chars()
            .skip(education.cols.start)
            .take(education.cols.len())
            .collect();
        assert_eq!(label, " Education ");
    }

    #[test]
    fn test_height_independent_of_active_tab() {
        let mut config = Config::default();
        config.about.tabs = vec![
            TabConfig {
                title: "A".into(),
                lines: vec!["one".into()],
            },
            TabConfig {
                title: "B".into(),
                lines: vec!["one".into(), "two".into(), "three".into()],
            },
        ];
        let mut app = AppState::new(config, 100, 30).unwrap();
        let first = about_lines(&app, 80, &mut Vec::new()).len();
        app.tabs.select_next();
        assert_eq!(about_lines(&app, 80, &mut Vec::new()).len(), first);
    }
}
