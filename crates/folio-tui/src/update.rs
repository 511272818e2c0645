//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. After every event the page is
//! re-laid-out and the visibility observers run, the way scroll and resize
//! listeners would in a browser.

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use folio_core::viewport::active_section;
use ratatui::layout::Rect;
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::{Timer, UiEvent};
use crate::features::nav::{self, NAV_HEIGHT, NavTarget};
use crate::features::page::{PAGE_MARGIN, PageTarget};
use crate::features::{hero, page, skills};
use crate::state::{AppState, SectionId};

/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: isize = 3;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let mut effects = Vec::new();

    match event {
        UiEvent::Loaded => {
            hero::on_loaded(&mut app.hero, &app.config.reveal, &mut effects);
        }
        UiEvent::Frame { width, height } => {
            app.width = width;
            app.height = height;
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event, &mut effects),
        UiEvent::Timer(timer) => handle_timer(app, timer, &mut effects),
    }

    sync_page(app, &mut effects);
    effects
}

fn handle_timer(app: &mut AppState, timer: Timer, effects: &mut Vec<UiEffect>) {
    match timer {
        Timer::Typewriter(tick) => hero::on_tick(&mut app.hero, tick, effects),
        Timer::HeroElement(element) => hero::show_element(&mut app.hero, element),
        Timer::SectionFaded(section) => app.page.finish_fade(section),
        Timer::CarouselSettled(id) => {
            app.carousel.settle(id);
        }
    }
}

// ============================================================================
// Input
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event, effects: &mut Vec<UiEffect>) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key, effects),
        Event::Mouse(mouse) => handle_mouse(app, mouse, effects),
        _ => {}
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent, effects: &mut Vec<UiEffect>) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        effects.push(UiEffect::Quit);
        return;
    }

    if app.is_too_small() {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            effects.push(UiEffect::Quit);
        }
        return;
    }

    if app.nav.is_menu_open() {
        handle_menu_key(app, key, effects);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => effects.push(UiEffect::Quit),
        KeyCode::Char('j') | KeyCode::Down => app.page.scroll_by(1),
        KeyCode::Char('k') | KeyCode::Up => app.page.scroll_by(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page.scroll_by(app.page.page_step()),
        KeyCode::PageUp => app.page.scroll_by(-app.page.page_step()),
        KeyCode::Char('g') | KeyCode::Home => app.page.scroll_to_row(0),
        KeyCode::Char('G') | KeyCode::End => app.page.scroll_to_row(usize::MAX),
        KeyCode::Char(digit @ '1'..='4') => {
            if let Some(section) = section_for_digit(digit) {
                app.page.scroll_to(section);
            }
        }
        KeyCode::Char('m') if app.is_compact() => app.nav.toggle_menu(),
        // Tabs and carousel only take keys while their section is on screen.
        KeyCode::Tab if app.page.is_on_screen(SectionId::About) => app.tabs.select_next(),
        KeyCode::BackTab if app.page.is_on_screen(SectionId::About) => app.tabs.select_prev(),
        KeyCode::Char('h') | KeyCode::Left if app.page.is_on_screen(SectionId::Skills) => {
            let started = app.carousel.slide_prev();
            schedule_settle(app, started, effects);
        }
        KeyCode::Char('l') | KeyCode::Right if app.page.is_on_screen(SectionId::Skills) => {
            let started = app.carousel.slide_next();
            schedule_settle(app, started, effects);
        }
        KeyCode::Char('c') => app.page.scroll_to(SectionId::Contact),
        KeyCode::Char('o') => {
            if let Some(url) = &app.config.profile.resume_url {
                effects.push(UiEffect::OpenUrl { url: url.clone() });
            }
        }
        _ => {}
    }
}

fn handle_menu_key(app: &mut AppState, key: KeyEvent, effects: &mut Vec<UiEffect>) {
    match key.code {
        KeyCode::Char('q') => effects.push(UiEffect::Quit),
        KeyCode::Esc | KeyCode::Char('m') => app.nav.close_menu(),
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.nav.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.nav.move_cursor(-1),
        KeyCode::Enter => {
            let section = app.nav.cursor();
            follow_link(app, section);
        }
        KeyCode::Char(digit @ '1'..='4') => {
            if let Some(section) = section_for_digit(digit) {
                follow_link(app, section);
            }
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent, effects: &mut Vec<UiEffect>) {
    if app.is_too_small() {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollDown => app.page.scroll_by(WHEEL_STEP),
        MouseEventKind::ScrollUp => app.page.scroll_by(-WHEEL_STEP),
        MouseEventKind::Down(MouseButton::Left) => {
            handle_click(app, mouse.column, mouse.row, effects);
        }
        _ => {}
    }
}

/// Left click: nav bar first, then the open menu, then the page.
///
/// While the menu is open a click anywhere else just closes it.
fn handle_click(app: &mut AppState, col: u16, row: u16, effects: &mut Vec<UiEffect>) {
    if row < NAV_HEIGHT {
        match nav::nav_target_at(app, col) {
            Some(NavTarget::Toggle) => app.nav.toggle_menu(),
            Some(NavTarget::Link(section)) => follow_link(app, section),
            None => {}
        }
        return;
    }

    if app.nav.is_menu_open() {
        match nav::menu_item_at(page_area(app), col, row) {
            Some(section) => follow_link(app, section),
            None => app.nav.close_menu(),
        }
        return;
    }

    let Some((page_row, page_col)) = screen_to_page_pos(app, col, row) else {
        return;
    };
    match app.page.target_at(page_row, page_col) {
        Some(PageTarget::Tab(index)) => app.tabs.select(index),
        Some(PageTarget::SlidePrev) => {
            let started = app.carousel.slide_prev();
            schedule_settle(app, started, effects);
        }
        Some(PageTarget::SlideNext) => {
            let started = app.carousel.slide_next();
            schedule_settle(app, started, effects);
        }
        Some(PageTarget::SlidePage(index)) => {
            let started = app.carousel.slide_to(index);
            schedule_settle(app, started, effects);
        }
        None => {}
    }
}

/// Screen area below the nav bar.
fn page_area(app: &AppState) -> Rect {
    Rect::new(0, NAV_HEIGHT, app.width, app.height.saturating_sub(NAV_HEIGHT))
}

/// Converts a screen position to (page row, content column).
///
/// Returns `None` outside the page content (nav bar, margins, scrollbar).
fn screen_to_page_pos(app: &AppState, col: u16, row: u16) -> Option<(usize, usize)> {
    let row = row.checked_sub(NAV_HEIGHT)? as usize;
    let col = col.checked_sub(PAGE_MARGIN)? as usize;
    if row >= app.page.viewport_height() || col >= page::content_width(app.width) {
        return None;
    }
    Some((app.page.scroll() + row, col))
}

/// Following a link scrolls to the section and closes the menu.
fn follow_link(app: &mut AppState, section: SectionId) {
    app.page.scroll_to(section);
    app.nav.close_menu();
}

fn section_for_digit(digit: char) -> Option<SectionId> {
    let n = digit.to_digit(10)? as usize;
    SectionId::from_index(n.checked_sub(1)?)
}

fn schedule_settle(app: &AppState, started: Option<u64>, effects: &mut Vec<UiEffect>) {
    if let Some(id) = started {
        effects.push(UiEffect::Schedule {
            delay: Duration::from_millis(app.config.skills.transition_ms),
            timer: Timer::CarouselSettled(id),
        });
    }
}

// ============================================================================
// Layout & observers
// ============================================================================

/// Re-lays-out the page and runs everything that reacts to scroll/resize.
fn sync_page(app: &mut AppState, effects: &mut Vec<UiEffect>) {
    let too_small = app.is_too_small();
    if too_small == app.hero.slot.is_some() {
        debug!(mounted = !too_small, "hero slot mount changed");
        hero::on_slot_mount_change(&mut app.hero, !too_small);
        if too_small {
            app.page.reset_home();
            app.nav.close_menu();
        }
    }
    if too_small {
        return;
    }

    if !app.is_compact() {
        app.nav.close_menu();
    }
    let (per_view, looping) = skills::slides_per_view(app.width, &app.config.layout);
    app.carousel.configure(per_view, looping);

    let viewport_height = app.height.saturating_sub(NAV_HEIGHT) as usize;
    let composed = page::compose(app, page::content_width(app.width), viewport_height);
    app.page
        .set_layout(composed.regions, composed.height(), viewport_height);
    app.page.set_hotspots(composed.hotspots);

    let revealed = app.page.observe_fade_in();
    for &section in &revealed {
        debug!(?section, "section revealed");
        effects.push(UiEffect::Schedule {
            delay: Duration::from_millis(app.config.reveal.fade_ms),
            timer: Timer::SectionFaded(section),
        });
    }
    if !revealed.is_empty() {
        // Revealing keeps every height, only the clickable spans change.
        let composed = page::compose(app, page::content_width(app.width), viewport_height);
        app.page.set_hotspots(composed.hotspots);
    }

    if app.page.observe_home() {
        hero::on_home_visible(&mut app.hero, effects);
    }

    app.nav.active = active_section(
        app.page.regions(),
        app.page.scroll(),
        app.config.layout.highlight_offset_rows,
    )
    .unwrap_or(SectionId::Home);
}
