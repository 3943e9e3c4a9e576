//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Some actions are context dependent: with the settings panel open,
/// `NextPage`/`PrevPage` adjust the selected setting instead of turning pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Page navigation
    /// Turn to the next page. Default: →/l/Space/Page Down
    NextPage,
    /// Turn to the previous page. Default: ←/h/Backspace/Page Up
    PrevPage,
    /// Jump to the first page. Default: g/Home
    FirstPage,
    /// Jump to the last page. Default: G/End
    LastPage,

    // Overlay navigation
    /// Move the overlay cursor up. Default: ↑/k
    CursorUp,
    /// Move the overlay cursor down. Default: ↓/j
    CursorDown,
    /// Activate the overlay item under the cursor. Default: Enter
    Select,
    /// Close the open overlay. Default: Esc
    Close,

    // Overlays
    /// Show or hide the display settings panel. Default: s
    ToggleSettings,
    /// Show or hide the table of contents. Default: t
    ToggleContents,
    /// Show or hide the help overlay. Default: ?
    ToggleHelp,
    /// Switch between light and dark chrome. Default: T/Shift+t
    ToggleTheme,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// True for actions that move between pages when no overlay is open.
    pub fn is_page_turn(self) -> bool {
        matches!(
            self,
            Self::NextPage | Self::PrevPage | Self::FirstPage | Self::LastPage
        )
    }
}
