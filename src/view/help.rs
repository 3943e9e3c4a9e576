//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with the active key bindings grouped by
//! category. Triggered by '?', dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use crate::config::KeyBindings;
use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const KEY_COLUMN_WIDTH: usize = 22;

/// Render the help overlay centered on the screen.
///
/// The scroll_offset parameter controls which line is shown at the top.
pub fn render_help_overlay(
    frame: &mut Frame,
    scroll_offset: u16,
    bindings: &KeyBindings,
    palette: &Palette,
) {
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(bindings, palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_type(palette.border_type)
                .border_style(palette.accent)
                .style(palette.chrome),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Largest useful scroll offset for the help overlay on a screen of `area`.
pub fn max_help_scroll(area: Rect, bindings: &KeyBindings) -> u16 {
    let popup = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);
    let visible = popup.height.saturating_sub(2);
    let lines = build_help_content(bindings, &Palette::plain()).len();
    u16::try_from(lines)
        .unwrap_or(u16::MAX)
        .saturating_sub(visible)
}

/// Calculate a centered rect.
///
/// Returns a Rect that is centered within `area` with the specified
/// percentage of width and height.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Display form of a single key, e.g. `→`, `Space`, `Ctrl+c`, `G`.
pub fn key_label(key: KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        other => format!("{other:?}"),
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{base}")
    } else {
        base
    }
}

fn keys_label(bindings: &KeyBindings, action: KeyAction) -> String {
    bindings
        .keys_for(action)
        .into_iter()
        .map(key_label)
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the help content lines grouped by category.
fn build_help_content(bindings: &KeyBindings, palette: &Palette) -> Vec<Line<'static>> {
    let category_style = palette.accent.add_modifier(Modifier::UNDERLINED);
    let key_style = palette.accent;
    let desc_style = palette.chrome;

    let row = |keys: String, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<KEY_COLUMN_WIDTH$}"), key_style),
            Span::styled(desc, desc_style),
        ])
    };
    let bound = |action: KeyAction, desc: &'static str| row(keys_label(bindings, action), desc);
    let header = |title: &'static str| Line::from(Span::styled(title, category_style));

    vec![
        header("Reading"),
        bound(KeyAction::NextPage, "Next page"),
        bound(KeyAction::PrevPage, "Previous page"),
        bound(KeyAction::FirstPage, "First page"),
        bound(KeyAction::LastPage, "Last page"),
        Line::default(),
        header("Mouse"),
        row("Click buttons".to_string(), "Previous / next page"),
        row("Click progress bar".to_string(), "Jump to that position"),
        row("Drag across page".to_string(), "Swipe to turn"),
        row("Wheel".to_string(), "Turn pages"),
        Line::default(),
        header("Panels"),
        bound(KeyAction::ToggleContents, "Table of contents"),
        bound(KeyAction::ToggleSettings, "Display settings"),
        bound(KeyAction::ToggleHelp, "This help"),
        bound(KeyAction::CursorUp, "Move selection up"),
        bound(KeyAction::CursorDown, "Move selection down"),
        bound(KeyAction::Select, "Open / change"),
        bound(KeyAction::Close, "Close panel"),
        Line::default(),
        header("Application"),
        bound(KeyAction::ToggleTheme, "Toggle light/dark"),
        bound(KeyAction::Quit, "Quit"),
    ]
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
