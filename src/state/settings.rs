//! Display settings panel: rows, values, and the key handler.

use crate::content::sanitize_body;
use crate::model::{DisplayPreferences, KeyAction};
use crate::pagination::Clock;
use crate::state::AppState;

/// One editable row of the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    /// Flip or fade.
    AnimationType,
    /// Page number visibility.
    ShowPageNumbers,
    /// Chapter title visibility.
    ShowChapterTitle,
    /// Navigation button visibility.
    ShowNavigation,
    /// Progress bar visibility.
    ShowProgress,
    /// Paper color palette entry.
    PaperColor,
    /// Paper grain strength.
    TextureOpacity,
    /// Rounded corners.
    CornerRadius,
    /// Spine gutter width.
    SpineWidth,
    /// Light or dark chrome.
    Theme,
}

impl SettingField {
    /// Rows in display order.
    pub const ALL: [SettingField; 10] = [
        SettingField::AnimationType,
        SettingField::ShowPageNumbers,
        SettingField::ShowChapterTitle,
        SettingField::ShowNavigation,
        SettingField::ShowProgress,
        SettingField::PaperColor,
        SettingField::TextureOpacity,
        SettingField::CornerRadius,
        SettingField::SpineWidth,
        SettingField::Theme,
    ];

    /// Row label.
    pub fn label(self) -> &'static str {
        match self {
            Self::AnimationType => "Animation",
            Self::ShowPageNumbers => "Page numbers",
            Self::ShowChapterTitle => "Chapter title",
            Self::ShowNavigation => "Navigation",
            Self::ShowProgress => "Progress bar",
            Self::PaperColor => "Paper color",
            Self::TextureOpacity => "Texture",
            Self::CornerRadius => "Corner radius",
            Self::SpineWidth => "Spine width",
            Self::Theme => "Theme",
        }
    }

    /// Current value rendered for the panel.
    pub fn value_label(self, prefs: &DisplayPreferences) -> String {
        let on_off = |b: bool| if b { "on" } else { "off" }.to_string();
        match self {
            Self::AnimationType => prefs.animation_type.label().to_string(),
            Self::ShowPageNumbers => on_off(prefs.show_page_numbers),
            Self::ShowChapterTitle => on_off(prefs.show_chapter_title),
            Self::ShowNavigation => on_off(prefs.show_navigation),
            Self::ShowProgress => on_off(prefs.show_progress),
            Self::PaperColor => sanitize_body(&prefs.paper_color).into_owned(),
            Self::TextureOpacity => format!("{:.0}%", prefs.texture_opacity * 100.0),
            Self::CornerRadius => prefs.corner_radius.to_string(),
            Self::SpineWidth => prefs.spine_width.to_string(),
            Self::Theme => prefs.theme.label().to_string(),
        }
    }

    /// Change the value one step. Booleans and two-way choices flip either way.
    pub fn adjust(self, prefs: &mut DisplayPreferences, forward: bool) {
        let step: i8 = if forward { 1 } else { -1 };
        match self {
            Self::AnimationType => prefs.animation_type = prefs.animation_type.toggle(),
            Self::ShowPageNumbers => prefs.show_page_numbers = !prefs.show_page_numbers,
            Self::ShowChapterTitle => prefs.show_chapter_title = !prefs.show_chapter_title,
            Self::ShowNavigation => prefs.show_navigation = !prefs.show_navigation,
            Self::ShowProgress => prefs.show_progress = !prefs.show_progress,
            Self::PaperColor => prefs.cycle_paper_color(forward),
            Self::TextureOpacity => prefs.adjust_texture_opacity(step),
            Self::CornerRadius => prefs.adjust_corner_radius(step),
            Self::SpineWidth => prefs.adjust_spine_width(step),
            Self::Theme => prefs.theme = prefs.theme.toggle(),
        }
    }
}

/// Handle a key action while the settings panel is open.
///
/// Up/down move the cursor (wrapping), left/right and Enter change the
/// selected value, Esc closes the panel.
pub fn handle_settings_action<C: Clock>(state: &mut AppState<C>, action: KeyAction) {
    let rows = SettingField::ALL.len();
    let field = SettingField::ALL[state.settings_cursor.min(rows - 1)];

    match action {
        KeyAction::CursorUp => {
            state.settings_cursor = (state.settings_cursor + rows - 1) % rows;
        }
        KeyAction::CursorDown => {
            state.settings_cursor = (state.settings_cursor + 1) % rows;
        }
        KeyAction::NextPage | KeyAction::Select => {
            field.adjust(&mut state.preferences, true);
            state.mark_preferences_dirty();
        }
        KeyAction::PrevPage => {
            field.adjust(&mut state.preferences, false);
            state.mark_preferences_dirty();
        }
        KeyAction::Close => state.close_overlay(),
        _ => {}
    }
}
