//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It is pure: the
//! view reads it to draw, handlers mutate it, and anything that must reach
//! the outside world (saving preferences, recording the reading position) is
//! left as a flag for the shell to collect.

use crate::model::{DisplayPreferences, PageContentStore};
use crate::pagination::{
    Clock, Direction, GestureAdapter, PaginationController, PaginationSnapshot, SystemClock,
};
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Which overlay, if any, sits on top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// Just the page.
    #[default]
    None,
    /// Display settings panel.
    Settings,
    /// Table of contents.
    Contents,
    /// Keyboard shortcuts.
    Help,
}

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Overlay**: None ⇄ Settings | Contents | Help (one at a time; toggling
///   the open one closes it, toggling another replaces it)
/// - **Page**: owned by the controller; moves only through the gesture
///   adapter, or through `jump_to_section` for contents-overlay jumps
#[derive(Debug)]
pub struct AppState<C: Clock = SystemClock> {
    /// Owner of the current page index.
    pub controller: PaginationController,
    /// Input translation and transition lock.
    pub gestures: GestureAdapter<C>,
    /// Presentation hints applied by the view.
    pub preferences: DisplayPreferences,
    /// Open overlay.
    pub overlay: Overlay,
    /// Selected row in the settings panel.
    pub settings_cursor: usize,
    /// Selected row in the contents overlay.
    pub contents_cursor: usize,
    /// First visible line of the help overlay.
    pub help_scroll_offset: u16,
    preferences_dirty: bool,
    position: Rc<Cell<Option<usize>>>,
}

impl<C: Clock> AppState<C> {
    /// Build state over `store`, opening on `start_index` (clamped).
    pub fn new(
        store: PageContentStore,
        start_index: usize,
        preferences: DisplayPreferences,
        gestures: GestureAdapter<C>,
    ) -> Self {
        let position = Rc::new(Cell::new(None));
        let sink = Rc::clone(&position);
        let controller = PaginationController::new(store)
            .with_start_index(start_index)
            .on_change(move |index| {
                debug!(index, "Page changed");
                sink.set(Some(index));
            });

        Self {
            controller,
            gestures,
            preferences,
            overlay: Overlay::None,
            settings_cursor: 0,
            contents_cursor: 0,
            help_scroll_offset: 0,
            preferences_dirty: false,
            position,
        }
    }

    /// Derived pagination state with the transition flag filled in.
    pub fn snapshot(&self) -> PaginationSnapshot<'_> {
        self.controller
            .snapshot()
            .with_animating(self.gestures.is_animating())
    }

    /// Release the transition lock if its cooldown has elapsed.
    pub fn tick(&mut self) -> bool {
        self.gestures.tick()
    }

    /// Step one page through the transition gate.
    pub fn turn_page(&mut self, direction: Direction) -> bool {
        self.gestures.on_key(&mut self.controller, direction)
    }

    /// Request an absolute page through the transition gate.
    pub fn request_page(&mut self, index: usize) -> bool {
        self.gestures.request_transition(&mut self.controller, index)
    }

    /// Request the last page through the transition gate.
    pub fn request_last_page(&mut self) -> bool {
        match self.controller.total_pages().checked_sub(1) {
            Some(last) => self.request_page(last),
            None => false,
        }
    }

    /// Jump straight to `index` without animating.
    ///
    /// Uses the controller's start-index re-synchronization, which does not
    /// fire the change callback, so the new position is recorded here.
    pub fn jump_to_section(&mut self, index: usize) {
        self.controller.sync_start_index(index);
        self.position.set(Some(self.controller.current_index()));
    }

    /// Page index changed since the last call, if it did.
    pub fn take_position_change(&mut self) -> Option<usize> {
        self.position.take()
    }

    /// Flag preferences as needing a save.
    pub fn mark_preferences_dirty(&mut self) {
        self.preferences_dirty = true;
    }

    /// True once per batch of preference changes.
    pub fn take_preferences_dirty(&mut self) -> bool {
        std::mem::take(&mut self.preferences_dirty)
    }

    /// Open `overlay`, or close it if it is already open.
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        if self.overlay == overlay {
            self.overlay = Overlay::None;
            return;
        }

        self.overlay = overlay;
        match overlay {
            Overlay::Contents => self.contents_cursor = self.current_chapter_row(),
            Overlay::Help => self.help_scroll_offset = 0,
            Overlay::Settings | Overlay::None => {}
        }
    }

    /// Close whatever overlay is open.
    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Row of the chapter containing the current page.
    fn current_chapter_row(&self) -> usize {
        let current = self.controller.current_index();
        self.controller
            .store()
            .chapters()
            .take_while(|(index, _)| *index <= current)
            .count()
            .saturating_sub(1)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
