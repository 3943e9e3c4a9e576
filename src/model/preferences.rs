//! Display preferences: cosmetic settings applied by the rendering layer.
//!
//! The pagination core never reads these. They are loaded once at startup,
//! mutated by the settings panel, and written back through
//! [`PreferencesRepository`](crate::storage::PreferencesRepository) on change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Paper colors offered by the settings panel, cycled in order.
pub const PAPER_COLORS: &[&str] = &["#f5f0e6", "#fffdf7", "#e8dcc4", "#d9e4ec", "#1e1e2e"];

/// Upper bound for the rounded-corner setting.
pub const MAX_CORNER_RADIUS: u8 = 24;

/// Upper bound for the spine gutter width, in columns.
pub const MAX_SPINE_WIDTH: u8 = 8;

/// Visual style used while a page transition is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    /// Page-turn marker along the outer edge.
    #[default]
    Flip,
    /// Text is dimmed until the transition settles.
    Fade,
}

impl AnimationType {
    /// The other animation style.
    pub fn toggle(self) -> Self {
        match self {
            Self::Flip => Self::Fade,
            Self::Fade => Self::Flip,
        }
    }

    /// Lowercase label shown in the settings panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Flip => "flip",
            Self::Fade => "fade",
        }
    }
}

/// Light or dark page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light text on dark chrome.
    #[default]
    Dark,
    /// Dark text on light chrome.
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Lowercase name, as accepted by `--theme` and the config file.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?} (expected \"dark\" or \"light\")")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Flat record of independent presentation hints.
///
/// Missing fields in stored data fall back to their defaults, so older or
/// partial records keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayPreferences {
    /// Transition style.
    pub animation_type: AnimationType,
    /// Show "page N of M".
    pub show_page_numbers: bool,
    /// Show the entry title above the body.
    pub show_chapter_title: bool,
    /// Show the prev/next buttons.
    pub show_navigation: bool,
    /// Show the progress bar.
    pub show_progress: bool,
    /// Page background as `#rrggbb`.
    pub paper_color: String,
    /// Strength of the paper grain in the margins, `0.0..=1.0`.
    pub texture_opacity: f32,
    /// Rounded page corners when non-zero.
    pub corner_radius: u8,
    /// Width of the gutter drawn along the spine, in columns.
    pub spine_width: u8,
    /// Page chrome theme.
    pub theme: Theme,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            animation_type: AnimationType::Flip,
            show_page_numbers: true,
            show_chapter_title: true,
            show_navigation: true,
            show_progress: true,
            paper_color: PAPER_COLORS[0].to_string(),
            texture_opacity: 0.3,
            corner_radius: 8,
            spine_width: 2,
            theme: Theme::Dark,
        }
    }
}

impl DisplayPreferences {
    /// Advance to the next color in [`PAPER_COLORS`].
    ///
    /// A color outside the palette restarts the cycle.
    pub fn cycle_paper_color(&mut self, forward: bool) {
        let len = PAPER_COLORS.len();
        let next = match PAPER_COLORS
            .iter()
            .position(|c| c.eq_ignore_ascii_case(&self.paper_color))
        {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.paper_color = PAPER_COLORS[next].to_string();
    }

    /// Step texture opacity by tenths, clamped to `0.0..=1.0`.
    pub fn adjust_texture_opacity(&mut self, steps: i8) {
        let tenths = (self.texture_opacity * 10.0).round() as i32 + i32::from(steps);
        self.texture_opacity = tenths.clamp(0, 10) as f32 / 10.0;
    }

    /// Step corner radius by 2, clamped to `0..=MAX_CORNER_RADIUS`.
    pub fn adjust_corner_radius(&mut self, steps: i8) {
        let value = i32::from(self.corner_radius) + 2 * i32::from(steps);
        self.corner_radius = value.clamp(0, i32::from(MAX_CORNER_RADIUS)) as u8;
    }

    /// Step spine width by 1, clamped to `0..=MAX_SPINE_WIDTH`.
    pub fn adjust_spine_width(&mut self, steps: i8) {
        let value = i32::from(self.spine_width) + i32::from(steps);
        self.spine_width = value.clamp(0, i32::from(MAX_SPINE_WIDTH)) as u8;
    }
}
