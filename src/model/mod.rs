//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod entry;
pub mod error;
pub mod key_action;
pub mod preferences;

// Re-export for convenience
pub use entry::{ContentEntry, EntryId, PageContentStore};
pub use error::{ContentError, InvalidEntryId};
pub use key_action::KeyAction;
pub use preferences::{
    AnimationType, DisplayPreferences, Theme, UnknownTheme, MAX_CORNER_RADIUS, MAX_SPINE_WIDTH,
    PAPER_COLORS,
};
