//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values to enable
//! consistent tuning across the reader.

use std::time::Duration;

/// Height of the header bar in lines (book title and chapter).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the footer in lines (buttons, page number, progress bar).
pub const FOOTER_HEIGHT: u16 = 1;

/// Width of each navigation button, including its brackets.
pub const BUTTON_WIDTH: u16 = 8;

/// Horizontal padding inside the page frame.
pub const PAGE_PADDING: u16 = 2;

/// Width percentage for the help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for the help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the settings and contents popups.
pub const PANEL_POPUP_WIDTH_PERCENT: u16 = 50;

/// Height percentage for the settings and contents popups.
pub const PANEL_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Event poll timeout when no transition is in flight.
///
/// Idle redraws are not needed; this only bounds how long a stale frame can
/// survive an event crossterm failed to report.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);
