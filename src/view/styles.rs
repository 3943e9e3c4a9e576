//! Reader styling.
//!
//! Turns DisplayPreferences into ratatui styles: the chrome theme, the paper
//! color with its grain, and the page frame.

use crate::model::{DisplayPreferences, Theme, PAPER_COLORS};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use std::str::FromStr;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Paper =====

/// Parse a `#rrggbb` paper color.
pub fn parse_paper_color(raw: &str) -> Option<(u8, u8, u8)> {
    match Color::from_str(raw.trim()) {
        Ok(Color::Rgb(r, g, b)) => Some((r, g, b)),
        _ => None,
    }
}

/// Darken `rgb` by the texture grain. Full opacity darkens by 15%.
pub fn apply_texture((r, g, b): (u8, u8, u8), opacity: f32) -> (u8, u8, u8) {
    let factor = 1.0 - 0.15 * opacity.clamp(0.0, 1.0);
    let scale = |c: u8| (f32::from(c) * factor).round() as u8;
    (scale(r), scale(g), scale(b))
}

/// Dark ink on light paper, light ink on dark paper.
pub fn ink_for((r, g, b): (u8, u8, u8)) -> Color {
    let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
    if luma >= 128.0 {
        Color::Rgb(40, 36, 30)
    } else {
        Color::Rgb(230, 225, 215)
    }
}

// ===== Palette =====

/// Every style the reader draws with, resolved once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Header and footer text.
    pub chrome: Style,
    /// Titles, enabled buttons, the selected overlay row.
    pub accent: Style,
    /// Disabled buttons and hints.
    pub muted: Style,
    /// Page background and body text.
    pub paper: Style,
    /// Gutter between the page edge and the binding.
    pub spine: Style,
    /// Read portion of the progress bar.
    pub progress_filled: Style,
    /// Unread portion of the progress bar.
    pub progress_empty: Style,
    /// Page frame corners.
    pub border_type: BorderType,
}

impl Palette {
    /// Default preferences without colors.
    pub fn plain() -> Self {
        Self::new(
            &DisplayPreferences::default(),
            ColorConfig { enabled: false },
        )
    }

    /// Resolve styles for `prefs`. With colors disabled only modifiers remain.
    pub fn new(prefs: &DisplayPreferences, colors: ColorConfig) -> Self {
        let border_type = if prefs.corner_radius > 0 {
            BorderType::Rounded
        } else {
            BorderType::Plain
        };

        if !colors.colors_enabled() {
            return Self {
                chrome: Style::default(),
                accent: Style::default().add_modifier(Modifier::BOLD),
                muted: Style::default().add_modifier(Modifier::DIM),
                paper: Style::default(),
                spine: Style::default(),
                progress_filled: Style::default().add_modifier(Modifier::REVERSED),
                progress_empty: Style::default(),
                border_type,
            };
        }

        let (chrome_fg, chrome_bg, accent) = match prefs.theme {
            Theme::Dark => (Color::Gray, Color::Reset, Color::Cyan),
            Theme::Light => (Color::Black, Color::White, Color::Blue),
        };

        let base = parse_paper_color(&prefs.paper_color)
            .or_else(|| parse_paper_color(PAPER_COLORS[0]))
            .unwrap_or((245, 240, 230));
        let (r, g, b) = apply_texture(base, prefs.texture_opacity);

        Self {
            chrome: Style::default().fg(chrome_fg).bg(chrome_bg),
            accent: Style::default()
                .fg(accent)
                .bg(chrome_bg)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray).bg(chrome_bg),
            paper: Style::default().fg(ink_for(base)).bg(Color::Rgb(r, g, b)),
            spine: Style::default().bg(Color::Rgb(
                r.saturating_sub(40),
                g.saturating_sub(40),
                b.saturating_sub(40),
            )),
            progress_filled: Style::default().fg(accent).bg(chrome_bg),
            progress_empty: Style::default().fg(Color::DarkGray).bg(chrome_bg),
            border_type,
        }
    }
}

// ===== Tests =====
