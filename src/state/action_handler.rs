//! Keyboard action dispatch.
//!
//! Routes a resolved KeyAction to whichever handler owns input right now:
//! the open overlay, or the page itself.

use crate::model::KeyAction;
use crate::pagination::{Clock, Direction};
use crate::state::{handle_contents_action, handle_settings_action, AppState, Overlay};

/// Apply `action` to `state`. Returns true when the reader should quit.
pub fn handle_action<C: Clock>(state: &mut AppState<C>, action: KeyAction) -> bool {
    match action {
        KeyAction::Quit => return true,
        KeyAction::ToggleSettings => {
            state.toggle_overlay(Overlay::Settings);
            return false;
        }
        KeyAction::ToggleContents => {
            state.toggle_overlay(Overlay::Contents);
            return false;
        }
        KeyAction::ToggleHelp => {
            state.toggle_overlay(Overlay::Help);
            return false;
        }
        KeyAction::ToggleTheme => {
            state.preferences.theme = state.preferences.theme.toggle();
            state.mark_preferences_dirty();
            return false;
        }
        _ => {}
    }

    match state.overlay {
        Overlay::Settings => handle_settings_action(state, action),
        Overlay::Contents => handle_contents_action(state, action),
        Overlay::Help => handle_help_action(state, action),
        Overlay::None => handle_page_action(state, action),
    }
    false
}

fn handle_help_action<C: Clock>(state: &mut AppState<C>, action: KeyAction) {
    match action {
        KeyAction::CursorUp => {
            state.help_scroll_offset = state.help_scroll_offset.saturating_sub(1);
        }
        KeyAction::CursorDown => {
            state.help_scroll_offset = state.help_scroll_offset.saturating_add(1);
        }
        KeyAction::Close => state.close_overlay(),
        _ => {}
    }
}

fn handle_page_action<C: Clock>(state: &mut AppState<C>, action: KeyAction) {
    match action {
        KeyAction::NextPage => {
            state.turn_page(Direction::Forward);
        }
        KeyAction::PrevPage => {
            state.turn_page(Direction::Backward);
        }
        KeyAction::FirstPage => {
            state.request_page(0);
        }
        KeyAction::LastPage => {
            state.request_last_page();
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "action_handler_tests.rs"]
mod tests;
