//! Stacks the sections into one scrollable column of lines.
//!
//! The same composition feeds the reducer (section regions for the observers
//! and the active link) and the renderer (the visible slice), so layout and
//! drawing cannot disagree.

use enum_map::EnumMap;
use folio_core::viewport::Region;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::Reveal;
use crate::common::Hotspot;
use crate::features::{about, contact, hero, skills};
use crate::state::{AppState, SectionId};

/// Columns kept free on each side of the page.
pub const PAGE_MARGIN: u16 = 1;

/// Column reserved for the scrollbar.
pub const SCROLLBAR_WIDTH: u16 = 1;

/// Width available to section content for a terminal `width` columns wide.
pub fn content_width(width: u16) -> usize {
    width.saturating_sub(PAGE_MARGIN * 2 + SCROLLBAR_WIDTH) as usize
}

/// What a click on the page can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Tab(usize),
    SlidePrev,
    SlideNext,
    /// A carousel pagination dot.
    SlidePage(usize),
}

/// The whole page, top to bottom.
pub struct ComposedPage {
    pub lines: Vec<Line<'static>>,
    pub regions: EnumMap<SectionId, Region>,
    /// Clickable spans in page rows. Hidden sections have none.
    pub hotspots: Vec<Hotspot<PageTarget>>,
}

impl ComposedPage {
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Renders every section at `width` columns.
///
/// Home and contact are at least `viewport_height` rows tall, so the hero
/// fills the first screen and every section can be scrolled to the top.
pub fn compose(app: &AppState, width: usize, viewport_height: usize) -> ComposedPage {
    let mut lines = Vec::new();
    let mut regions = EnumMap::default();
    let mut hotspots = Vec::new();

    for section in SectionId::ALL {
        let mut spots = Vec::new();
        let body = match section {
            SectionId::Home => hero::hero_lines(app, width, viewport_height),
            SectionId::About => about::about_lines(app, width, &mut spots),
            SectionId::Skills => skills::skills_lines(app, width, &mut spots),
            SectionId::Contact => contact::contact_lines(app, width, viewport_height),
        };
        let top = lines.len();
        let reveal = app.page.reveal(section);
        regions[section] = Region::new(top, body.len());
        lines.extend(apply_reveal(body, reveal));

        if reveal != Reveal::Hidden {
            hotspots.extend(spots.into_iter().map(|mut spot| {
                spot.row += top;
                spot
            }));
        }
    }

    ComposedPage {
        lines,
        regions,
        hotspots,
    }
}

fn apply_reveal(lines: Vec<Line<'static>>, reveal: Reveal) -> Vec<Line<'static>> {
    match reveal {
        Reveal::InView => lines,
        Reveal::Fading => lines
            .into_iter()
            .map(|line| line.patch_style(Style::default().add_modifier(Modifier::DIM)))
            .collect(),
        Reveal::Hidden => vec![Line::default(); lines.len()],
    }
}

/// Section heading: title plus an underline, followed by a blank row.
pub fn heading(title: &str, width: usize) -> Vec<Line<'static>> {
    let rule = "─".repeat(title.chars().count().min(width));
    vec![
        Line::from(Span::styled(
            title.to_uppercase(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(rule, Style::default().fg(Color::DarkGray))),
        Line::default(),
    ]
}

#[cfg(test)]
mod tests {
    use folio_core::config::Config;

    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_regions_tile_the_page() {
        let app = AppState::new(Config::default(), 100, 30).unwrap();
        let page = compose(&app, 96, 29);

        let mut expected_top = 0;
        for section in SectionId::ALL {
            let region = page.regions[section];
            assert_eq!(region.top, expected_top, "{section:?}");
            assert!(region.height > 0, "{section:?}");
            expected_top = region.bottom();
        }
        assert_eq!(expected_top, page.height());
        assert!(page.regions[SectionId::Home].height >= 29);
        assert!(page.regions[SectionId::Contact].height >= 29);
    }

    #[test]
    fn test_hidden_sections_keep_their_height() {
        let app = AppState::new(Config::default(), 100, 30).unwrap();
        let page = compose(&app, 96, 29);
        let about = page.regions[SectionId::About];

        assert_eq!(app.page.reveal(SectionId::About), Reveal::Hidden);
        for line in &page.lines[about.top..about.bottom()] {
            assert!(text(line).is_empty());
        }
    }

    #[test]
    fn test_hotspots_only_for_revealed_sections() {
        let mut app = AppState::new(Config::default(), 100, 30).unwrap();
        let page = compose(&app, 96, 29);
        assert!(page.hotspots.is_empty());

        app.page.set_layout(page.regions, page.height(), 29);
        app.page.scroll_to(SectionId::About);
        assert_eq!(app.page.observe_fade_in(), vec![SectionId::About]);
        let page = compose(&app, 96, 29);
        let about = page.regions[SectionId::About];
        let tab = page
            .hotspots
            .iter()
            .find(|spot| spot.target == PageTarget::Tab(1))
            .unwrap();
        assert!(about.top <= tab.row && tab.row < about.bottom());
        assert!(text(&page.lines[tab.row]).contains("Education"));
    }

    #[test]
    fn test_fading_lines_are_dimmed() {
        let lines = vec![Line::from("About")];
        let dimmed = apply_reveal(lines, Reveal::Fading);
        assert!(dimmed[0].style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_content_width_reserves_margins() {
        assert_eq!(content_width(100), 97);
        assert_eq!(content_width(2), 0);
    }
}
