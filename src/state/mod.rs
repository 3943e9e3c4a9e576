//! UI state machine (pure).
//!
//! All state transitions are plain functions over AppState, testable without
//! a terminal.

pub mod action_handler;
pub mod app_state;
pub mod contents;
pub mod mouse_handler;
pub mod settings;

// Re-export for convenience
pub use action_handler::handle_action;
pub use app_state::{AppState, Overlay};
pub use contents::handle_contents_action;
pub use mouse_handler::{handle_mouse, ClickTarget, HitRegions};
pub use settings::{handle_settings_action, SettingField};
