//! Tests for mouse event handling.

use super::*;
use crate::model::{ContentEntry, DisplayPreferences, EntryId, PageContentStore};
use crate::pagination::{GestureAdapter, ManualClock, DEFAULT_TRANSITION_COOLDOWN};
use crossterm::event::KeyModifiers;

fn reader(pages: usize, start: usize) -> (AppState<ManualClock>, ManualClock) {
    let entries = (0..pages)
        .map(|i| ContentEntry::new(EntryId::new(format!("page-{i}")).unwrap(), "text"))
        .collect();
    let clock = ManualClock::new();
    let state = AppState::new(
        PageContentStore::new(entries).unwrap(),
        start,
        DisplayPreferences::default(),
        GestureAdapter::with_clock(clock.clone()).with_swipe_threshold(6.0),
    );
    (state, clock)
}

fn regions() -> HitRegions {
    HitRegions {
        page: Rect::new(0, 0, 80, 20),
        progress_bar: Some(Rect::new(10, 22, 60, 1)),
        prev_button: Some(Rect::new(0, 22, 8, 1)),
        next_button: Some(Rect::new(72, 22, 8, 1)),
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn press(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn drag(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

fn release(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

// ===== hit_test =====

#[test]
fn hit_test_classifies_regions() {
    let r = regions();
    assert_eq!(r.hit_test(2, 22), ClickTarget::Button(Direction::Backward));
    assert_eq!(r.hit_test(75, 22), ClickTarget::Button(Direction::Forward));
    assert_eq!(r.hit_test(40, 10), ClickTarget::Page);
    assert_eq!(r.hit_test(40, 23), ClickTarget::Outside);
}

#[test]
fn hit_test_progress_bar_reports_fraction() {
    let r = regions();
    assert_eq!(r.hit_test(10, 22), ClickTarget::ProgressBar(0.0));
    assert_eq!(r.hit_test(40, 22), ClickTarget::ProgressBar(0.5));
}

#[test]
fn hidden_chrome_is_not_clickable() {
    let r = HitRegions {
        page: Rect::new(0, 0, 80, 24),
        ..HitRegions::default()
    };
    assert_eq!(r.hit_test(2, 22), ClickTarget::Page);
}

// ===== handle_mouse =====

#[test]
fn next_button_click_advances() {
    let (mut state, _) = reader(3, 0);
    assert!(handle_mouse(&mut state, press(75, 22), &regions()));
    assert_eq!(state.controller.current_index(), 1);
}

#[test]
fn prev_button_on_first_page_is_noop() {
    let (mut state, _) = reader(3, 0);
    assert!(!handle_mouse(&mut state, press(2, 22), &regions()));
    assert_eq!(state.controller.current_index(), 0);
}

#[test]
fn progress_bar_click_jumps_to_page_under_pointer() {
    let (mut state, _) = reader(10, 0);
    // Column 40 is halfway along the bar: floor(0.5 * 10) = 5.
    assert!(handle_mouse(&mut state, press(40, 22), &regions()));
    assert_eq!(state.controller.current_index(), 5);
}

#[test]
fn drag_left_past_threshold_advances() {
    let (mut state, _) = reader(3, 0);
    handle_mouse(&mut state, press(50, 10), &regions());
    handle_mouse(&mut state, drag(45, 10), &regions());
    handle_mouse(&mut state, drag(40, 10), &regions());
    assert!(handle_mouse(&mut state, release(40, 10), &regions()));
    assert_eq!(state.controller.current_index(), 1);
}

#[test]
fn drag_right_past_threshold_goes_back() {
    let (mut state, _) = reader(3, 2);
    handle_mouse(&mut state, press(20, 10), &regions());
    handle_mouse(&mut state, drag(30, 10), &regions());
    assert!(handle_mouse(&mut state, release(30, 10), &regions()));
    assert_eq!(state.controller.current_index(), 1);
}

#[test]
fn short_drag_is_ignored() {
    let (mut state, _) = reader(3, 0);
    handle_mouse(&mut state, press(50, 10), &regions());
    handle_mouse(&mut state, drag(47, 10), &regions());
    assert!(!handle_mouse(&mut state, release(47, 10), &regions()));
    assert_eq!(state.controller.current_index(), 0);
}

#[test]
fn plain_click_on_page_is_ignored() {
    let (mut state, _) = reader(3, 0);
    handle_mouse(&mut state, press(50, 10), &regions());
    assert!(!handle_mouse(&mut state, release(50, 10), &regions()));
    assert_eq!(state.controller.current_index(), 0);
}

#[test]
fn drag_without_press_on_page_is_ignored() {
    let (mut state, _) = reader(3, 0);
    handle_mouse(&mut state, press(75, 22), &regions());
    handle_mouse(&mut state, drag(10, 10), &regions());
    assert!(!handle_mouse(&mut state, release(10, 10), &regions()));
}

#[test]
fn scroll_wheel_turns_pages_through_the_gate() {
    let (mut state, clock) = reader(3, 0);
    let down = mouse(MouseEventKind::ScrollDown, 40, 10);

    assert!(handle_mouse(&mut state, down, &regions()));
    assert!(!handle_mouse(&mut state, down, &regions()));
    assert_eq!(state.controller.current_index(), 1);

    clock.advance(DEFAULT_TRANSITION_COOLDOWN);
    let up = mouse(MouseEventKind::ScrollUp, 40, 10);
    assert!(handle_mouse(&mut state, up, &regions()));
    assert_eq!(state.controller.current_index(), 0);
}

#[test]
fn mouse_is_ignored_while_overlay_open() {
    let (mut state, _) = reader(3, 0);
    state.toggle_overlay(Overlay::Settings);
    assert!(!handle_mouse(&mut state, press(75, 22), &regions()));
    assert_eq!(state.controller.current_index(), 0);
}
