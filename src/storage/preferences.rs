//! Load-at-startup / save-on-change persistence for reader settings.

use super::{KeyValueStore, StorageError};
use crate::model::DisplayPreferences;
use tracing::{debug, warn};

/// Key holding the serialized [`DisplayPreferences`].
pub const PREFERENCES_KEY: &str = "folio.display-preferences";

/// Key holding the zero-based index of the last page read.
pub const LAST_PAGE_KEY: &str = "folio.last-page";

/// Reads and writes reader settings through a [`KeyValueStore`].
#[derive(Debug)]
pub struct PreferencesRepository<S> {
    store: S,
}

impl<S: KeyValueStore> PreferencesRepository<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored preferences, or defaults when absent or unreadable.
    ///
    /// A corrupt record is logged and ignored; it is overwritten on the next
    /// save.
    pub fn load(&self) -> DisplayPreferences {
        let raw = match self.store.get(PREFERENCES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored display preferences, using defaults");
                return DisplayPreferences::default();
            }
            Err(err) => {
                warn!(error = %err, "Failed to read display preferences, using defaults");
                return DisplayPreferences::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(error = %err, "Stored display preferences are corrupt, using defaults");
            DisplayPreferences::default()
        })
    }

    /// Persist `prefs`.
    pub fn save(&mut self, prefs: &DisplayPreferences) -> Result<(), StorageError> {
        let json = serde_json::to_string(prefs).map_err(|source| StorageError::Value {
            key: PREFERENCES_KEY.to_string(),
            source,
        })?;
        self.store.set(PREFERENCES_KEY, json)
    }

    /// Forget stored preferences.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.store.remove(PREFERENCES_KEY)
    }

    /// Last page read, if one was recorded and parses.
    pub fn load_last_page(&self) -> Option<usize> {
        match self.store.get(LAST_PAGE_KEY) {
            Ok(Some(raw)) => raw.trim().parse().ok(),
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "Failed to read last page");
                None
            }
        }
    }

    /// Record the last page read.
    pub fn save_last_page(&mut self, index: usize) -> Result<(), StorageError> {
        self.store.set(LAST_PAGE_KEY, index.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnimationType, Theme};
    use crate::storage::MemoryStore;

    #[test]
    fn load_without_record_returns_defaults() {
        let repo = PreferencesRepository::new(MemoryStore::new());
        assert_eq!(repo.load(), DisplayPreferences::default());
    }

    #[test]
    fn save_then_load_returns_same_preferences() {
        let mut repo = PreferencesRepository::new(MemoryStore::new());
        let prefs = DisplayPreferences {
            animation_type: AnimationType::Fade,
            show_progress: false,
            theme: Theme::Light,
            spine_width: 5,
            ..DisplayPreferences::default()
        };

        repo.save(&prefs).unwrap();
        assert_eq!(repo.load(), prefs);
    }

    #[test]
    fn saves_under_single_named_key() {
        let mut repo = PreferencesRepository::new(MemoryStore::new());
        repo.save(&DisplayPreferences::default()).unwrap();
        let raw = repo.store().get(PREFERENCES_KEY).unwrap();
        assert!(raw.is_some_and(|r| r.contains("\"animationType\":\"flip\"")));
    }

    #[test]
    fn corrupt_record_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store
            .set(PREFERENCES_KEY, "{ definitely not json".to_string())
            .unwrap();
        let repo = PreferencesRepository::new(store);
        assert_eq!(repo.load(), DisplayPreferences::default());
    }

    #[test]
    fn reset_removes_record() {
        let mut repo = PreferencesRepository::new(MemoryStore::new());
        let prefs = DisplayPreferences {
            theme: Theme::Light,
            ..DisplayPreferences::default()
        };
        repo.save(&prefs).unwrap();
        repo.reset().unwrap();
        assert_eq!(repo.load(), DisplayPreferences::default());
    }

    #[test]
    fn last_page_round_trips() {
        let mut repo = PreferencesRepository::new(MemoryStore::new());
        assert_eq!(repo.load_last_page(), None);
        repo.save_last_page(7).unwrap();
        assert_eq!(repo.load_last_page(), Some(7));
    }

    #[test]
    fn garbage_last_page_is_ignored() {
        let mut store = MemoryStore::new();
        store.set(LAST_PAGE_KEY, "seven".to_string()).unwrap();
        let repo = PreferencesRepository::new(store);
        assert_eq!(repo.load_last_page(), None);
    }
}
