//! Table-of-contents overlay handler.
//!
//! Rows are the titled pages of the store, in order. Selecting a row jumps
//! straight to that page without an animated transition.

use crate::model::KeyAction;
use crate::pagination::Clock;
use crate::state::AppState;

/// Handle a key action while the contents overlay is open.
pub fn handle_contents_action<C: Clock>(state: &mut AppState<C>, action: KeyAction) {
    let rows = state.controller.store().chapters().count();

    match action {
        KeyAction::CursorUp | KeyAction::PrevPage => {
            state.contents_cursor = state.contents_cursor.saturating_sub(1);
        }
        KeyAction::CursorDown | KeyAction::NextPage => {
            if state.contents_cursor + 1 < rows {
                state.contents_cursor += 1;
            }
        }
        KeyAction::FirstPage => state.contents_cursor = 0,
        KeyAction::LastPage => state.contents_cursor = rows.saturating_sub(1),
        KeyAction::Select => {
            let target = state
                .controller
                .store()
                .chapters()
                .nth(state.contents_cursor)
                .map(|(index, _)| index);
            if let Some(index) = target {
                state.jump_to_section(index);
            }
            state.close_overlay();
        }
        KeyAction::Close => state.close_overlay(),
        _ => {}
    }
}
