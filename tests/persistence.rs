//! Preferences and reading position survive a restart through the file store.

use folio::model::{AnimationType, DisplayPreferences, Theme};
use folio::storage::{FileStore, KeyValueStore, PreferencesRepository, PREFERENCES_KEY};
use std::fs;
use std::path::PathBuf;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("folio_persistence_{name}"));
    let _ = fs::remove_dir_all(&dir);
    dir.join("nested").join("storage.json")
}

#[test]
fn preferences_and_position_round_trip_across_reopen() {
    let path = scratch("round_trip");

    let prefs = DisplayPreferences {
        animation_type: AnimationType::Fade,
        show_progress: false,
        paper_color: "#d9e4ec".to_string(),
        spine_width: 5,
        theme: Theme::Light,
        ..DisplayPreferences::default()
    };

    {
        let mut repository = PreferencesRepository::new(FileStore::open(&path).unwrap());
        repository.save(&prefs).unwrap();
        repository.save_last_page(4).unwrap();
    }

    let repository = PreferencesRepository::new(FileStore::open(&path).unwrap());
    assert_eq!(repository.load(), prefs);
    assert_eq!(repository.load_last_page(), Some(4));

    let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
}

#[test]
fn corrupt_preference_value_falls_back_to_defaults() {
    let path = scratch("corrupt_value");

    {
        let mut store = FileStore::open(&path).unwrap();
        store
            .set(PREFERENCES_KEY, "{not json".to_string())
            .unwrap();
    }

    let repository = PreferencesRepository::new(FileStore::open(&path).unwrap());
    assert_eq!(repository.load(), DisplayPreferences::default());

    let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
}

#[test]
fn partial_record_fills_missing_fields_with_defaults() {
    let path = scratch("partial");

    {
        let mut store = FileStore::open(&path).unwrap();
        store
            .set(PREFERENCES_KEY, r#"{"animationType":"fade"}"#.to_string())
            .unwrap();
    }

    let loaded = PreferencesRepository::new(FileStore::open(&path).unwrap()).load();
    assert_eq!(loaded.animation_type, AnimationType::Fade);
    assert!(loaded.show_page_numbers);
    assert_eq!(loaded.spine_width, DisplayPreferences::default().spine_width);

    let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
}

#[test]
fn reset_forgets_preferences_but_keeps_position() {
    let path = scratch("reset");

    let mut repository = PreferencesRepository::new(FileStore::open(&path).unwrap());
    repository
        .save(&DisplayPreferences {
            theme: Theme::Light,
            ..DisplayPreferences::default()
        })
        .unwrap();
    repository.save_last_page(2).unwrap();
    repository.reset().unwrap();

    let reopened = PreferencesRepository::new(FileStore::open(&path).unwrap());
    assert_eq!(reopened.load(), DisplayPreferences::default());
    assert_eq!(reopened.load_last_page(), Some(2));

    let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
}
