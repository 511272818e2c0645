//! Contact section.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::common::text::truncate_with_ellipsis;
use crate::features::page::heading;
use crate::state::{AppState, SectionId};

const LABEL_WIDTH: usize = 10;

/// Contact lines, padded to at least `min_height` rows so the section can
/// be scrolled to the top of the screen.
pub fn contact_lines(app: &AppState, width: usize, min_height: usize) -> Vec<Line<'static>> {
    let profile = &app.config.profile;
    let mut lines = heading(SectionId::Contact.title(), width);

    lines.push(Line::from("Have a project in mind? Let's talk."));
    lines.push(Line::default());

    let value_width = width.saturating_sub(LABEL_WIDTH);
    let entry = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(
                format!("{label:<LABEL_WIDTH$}"),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                truncate_with_ellipsis(value, value_width),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ])
    };

    if let Some(email) = &profile.email {
        lines.push(entry("Email", email));
    }
    for link in &profile.links {
        lines.push(entry(&link.label, &link.url));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("© {}  ·  q to quit", profile.name),
        Style::default().fg(Color::DarkGray),
    )));

    if lines.len() < min_height {
        lines.resize(min_height, Line::default());
    }
    lines
}

#[cfg(test)]
mod tests {
    use folio_core::config::Config;

    use super::*;

    #[test]
    fn test_lists_email_and_links() {
        let app = AppState::new(Config::default(), 100, 30).unwrap();
        let out: Vec<String> = contact_lines(&app, 80, 0)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(out.iter().any(|l| l.contains("hello@example.com")));
        assert!(out.iter().any(|l| l.starts_with("GitHub") && l.contains("github.com")));
    }

    #[test]
    fn test_padded_to_min_height() {
        let app = AppState::new(Config::default(), 100, 30).unwrap();
        assert_eq!(contact_lines(&app, 80, 40).len(), 40);
    }
}
