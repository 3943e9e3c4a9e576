//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default arrow and vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Event kind and state are ignored, so repeats and releases reported by
    /// enhanced keyboard protocols resolve like presses.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    /// Every key bound to `action`, for the help overlay.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        let mut keys: Vec<_> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_key(|k| format!("{:?}", k.code));
        keys
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);

        // Page turning
        bindings.insert(plain(KeyCode::Right), KeyAction::NextPage);
        bindings.insert(plain(KeyCode::Char('l')), KeyAction::NextPage);
        bindings.insert(plain(KeyCode::Char(' ')), KeyAction::NextPage);
        bindings.insert(plain(KeyCode::PageDown), KeyAction::NextPage);
        bindings.insert(plain(KeyCode::Left), KeyAction::PrevPage);
        bindings.insert(plain(KeyCode::Char('h')), KeyAction::PrevPage);
        bindings.insert(plain(KeyCode::Backspace), KeyAction::PrevPage);
        bindings.insert(plain(KeyCode::PageUp), KeyAction::PrevPage);
        bindings.insert(plain(KeyCode::Home), KeyAction::FirstPage);
        bindings.insert(plain(KeyCode::Char('g')), KeyAction::FirstPage);
        bindings.insert(plain(KeyCode::End), KeyAction::LastPage);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::LastPage,
        );

        // Overlay cursor
        bindings.insert(plain(KeyCode::Up), KeyAction::CursorUp);
        bindings.insert(plain(KeyCode::Char('k')), KeyAction::CursorUp);
        bindings.insert(plain(KeyCode::Down), KeyAction::CursorDown);
        bindings.insert(plain(KeyCode::Char('j')), KeyAction::CursorDown);
        bindings.insert(plain(KeyCode::Enter), KeyAction::Select);
        bindings.insert(plain(KeyCode::Esc), KeyAction::Close);

        // Overlays
        bindings.insert(plain(KeyCode::Char('s')), KeyAction::ToggleSettings);
        bindings.insert(plain(KeyCode::Char('t')), KeyAction::ToggleContents);
        bindings.insert(plain(KeyCode::Char('?')), KeyAction::ToggleHelp);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT),
            KeyAction::ToggleTheme,
        );

        // Application controls
        bindings.insert(plain(KeyCode::Char('q')), KeyAction::Quit);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
