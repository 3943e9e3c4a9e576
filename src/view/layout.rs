//! Screen layout.
//!
//! Pure layout logic: splits the frame into header, spine, page and footer,
//! and the footer into buttons, page label and progress bar. The same
//! regions drive rendering and mouse hit testing.

use super::constants::{BUTTON_WIDTH, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::model::DisplayPreferences;
use crate::state::HitRegions;
use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Where each part of the reader goes this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderLayout {
    /// Book title and current chapter.
    pub header: Rect,
    /// Binding gutter, absent at zero spine width.
    pub spine: Option<Rect>,
    /// The page itself.
    pub page: Rect,
    /// Whole footer row, absent when all footer chrome is hidden.
    pub footer: Option<Rect>,
    /// "Previous" button.
    pub prev_button: Option<Rect>,
    /// "n / N" label.
    pub page_label: Option<Rect>,
    /// Progress bar track.
    pub progress_bar: Option<Rect>,
    /// "Next" button.
    pub next_button: Option<Rect>,
}

impl ReaderLayout {
    /// Lay out `area` for a book of `total_pages` under `prefs`.
    pub fn compute(area: Rect, prefs: &DisplayPreferences, total_pages: usize) -> Self {
        let nav = prefs.show_navigation;
        let label = prefs.show_page_numbers;
        let progress = prefs.show_progress;
        let has_footer = nav || label || progress;

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(if has_footer { FOOTER_HEIGHT } else { 0 }),
        ])
        .areas(area);

        let [spine, page] = Layout::horizontal([
            Constraint::Length(u16::from(prefs.spine_width)),
            Constraint::Min(0),
        ])
        .areas(body);

        let mut layout = Self {
            header,
            spine: (spine.width > 0).then_some(spine),
            page,
            ..Self::default()
        };

        if !has_footer {
            return layout;
        }
        layout.footer = Some(footer);

        let label_width = page_label(total_pages.saturating_sub(1), total_pages).width() as u16 + 2;
        let mut constraints = Vec::with_capacity(4);
        if nav {
            constraints.push(Constraint::Length(BUTTON_WIDTH));
        }
        if label {
            constraints.push(Constraint::Length(label_width));
        }
        constraints.push(Constraint::Min(0));
        if nav {
            constraints.push(Constraint::Length(BUTTON_WIDTH));
        }

        let chunks = Layout::horizontal(constraints).split(footer);
        let mut chunks = chunks.iter().copied();
        layout.prev_button = if nav { chunks.next() } else { None };
        layout.page_label = if label { chunks.next() } else { None };
        let track = chunks.next();
        layout.progress_bar = track.filter(|r| progress && r.width > 0);
        layout.next_button = if nav { chunks.next() } else { None };

        layout
    }

    /// Regions the mouse handler tests clicks against.
    pub fn hit_regions(&self) -> HitRegions {
        HitRegions {
            page: self.page,
            progress_bar: self.progress_bar,
            prev_button: self.prev_button,
            next_button: self.next_button,
        }
    }
}

/// One-based "n / N" label, "0 / 0" for an empty book.
pub fn page_label(index: usize, total_pages: usize) -> String {
    if total_pages == 0 {
        return "0 / 0".to_string();
    }
    format!("{} / {}", index + 1, total_pages)
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
