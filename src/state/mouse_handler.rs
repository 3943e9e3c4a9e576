//! Mouse event handler.
//!
//! Maps crossterm mouse events onto gesture adapter inputs using the screen
//! regions the last frame was drawn into. A press-drag-release over the page
//! behaves like a touch swipe, measured in terminal columns.

use crate::pagination::{Clock, Direction};
use crate::state::{AppState, Overlay};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Clickable regions from the most recent render.
///
/// Hidden chrome has no region, so clicks where it would be fall through to
/// the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitRegions {
    /// Page body.
    pub page: Rect,
    /// Progress bar track.
    pub progress_bar: Option<Rect>,
    /// "Previous" button.
    pub prev_button: Option<Rect>,
    /// "Next" button.
    pub next_button: Option<Rect>,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickTarget {
    /// A navigation button.
    Button(Direction),
    /// The progress bar, at a normalized position in `[0, 1)`.
    ProgressBar(f64),
    /// The page body.
    Page,
    /// Anything else.
    Outside,
}

impl HitRegions {
    /// Classify a click at (`column`, `row`).
    ///
    /// Buttons and the progress bar win over the page they may overlap.
    pub fn hit_test(&self, column: u16, row: u16) -> ClickTarget {
        let position = Position::new(column, row);

        if self.prev_button.is_some_and(|r| r.contains(position)) {
            return ClickTarget::Button(Direction::Backward);
        }
        if self.next_button.is_some_and(|r| r.contains(position)) {
            return ClickTarget::Button(Direction::Forward);
        }
        if let Some(bar) = self.progress_bar.filter(|r| r.contains(position)) {
            let fraction = f64::from(column - bar.x) / f64::from(bar.width);
            return ClickTarget::ProgressBar(fraction);
        }
        if self.page.contains(position) {
            return ClickTarget::Page;
        }
        ClickTarget::Outside
    }
}

/// Apply a mouse event. Returns true when the state changed in a way that
/// needs a redraw.
///
/// Ignored while an overlay is open.
pub fn handle_mouse<C: Clock>(
    state: &mut AppState<C>,
    event: MouseEvent,
    regions: &HitRegions,
) -> bool {
    if state.overlay != Overlay::None {
        return false;
    }

    let AppState {
        controller,
        gestures,
        ..
    } = state;

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match regions.hit_test(event.column, event.row) {
                ClickTarget::Button(direction) => gestures.on_button(controller, direction),
                ClickTarget::ProgressBar(fraction) => {
                    gestures.on_progress_bar_click(controller, fraction)
                }
                ClickTarget::Page => {
                    gestures.on_touch_start(f64::from(event.column));
                    false
                }
                ClickTarget::Outside => false,
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if gestures.is_tracking_swipe() {
                gestures.on_touch_move(f64::from(event.column));
            }
            false
        }
        MouseEventKind::Up(MouseButton::Left) => gestures.on_touch_end(controller),
        MouseEventKind::ScrollDown => gestures.on_key(controller, Direction::Forward),
        MouseEventKind::ScrollUp => gestures.on_key(controller, Direction::Backward),
        _ => false,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
