use super::*;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory store; clones share the same backing map, standing in for two
/// sessions against the same origin storage.
#[derive(Clone, Default)]
struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}

/// Store whose writes always fail, as under exhausted quota.
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError)
    }
}

#[test]
fn initialize_defaults_to_dark_when_nothing_stored() {
    let manager = ThemeManager::initialize(MemoryStore::default());
    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(DEFAULT_THEME, Theme::Dark);
}

#[test]
fn initialize_rejects_unrecognized_stored_values() {
    let store = MemoryStore::default();
    store.set(THEME_KEY, "solarized").unwrap();

    let manager = ThemeManager::initialize(store);
    assert_eq!(manager.current(), Theme::Dark);
}

#[test]
fn set_persists_and_a_fresh_initialize_reads_it_back() {
    let store = MemoryStore::default();

    let mut manager = ThemeManager::initialize(store.clone());
    manager.set(Theme::Light);
    assert_eq!(manager.current(), Theme::Light);

    let reloaded = ThemeManager::initialize(store);
    assert_eq!(reloaded.current(), Theme::Light);
}

#[test]
fn toggle_twice_returns_to_the_original_mode() {
    let mut manager = ThemeManager::initialize(MemoryStore::default());
    let original = manager.current();

    let flipped = manager.toggle();
    assert_eq!(flipped, original.toggled());
    assert_ne!(manager.current(), original);

    manager.toggle();
    assert_eq!(manager.current(), original);
}

#[test]
fn failed_store_write_still_updates_the_session_mode() {
    let mut manager = ThemeManager::initialize(BrokenStore);
    manager.set(Theme::Light);
    assert_eq!(manager.current(), Theme::Light);

    let toggled = manager.toggle();
    assert_eq!(toggled, Theme::Dark);
    assert_eq!(manager.current(), Theme::Dark);
}

#[test]
fn string_round_trip() {
    assert_eq!(Theme::from_str("light"), Some(Theme::Light));
    assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_str("Dark"), None);
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn dark_emphasizes_the_moon_indicator() {
    assert_eq!(Theme::Dark.moon_opacity(), "1");
    assert_eq!(Theme::Dark.sun_opacity(), "0.5");
    assert_eq!(Theme::Light.sun_opacity(), "1");
    assert_eq!(Theme::Light.moon_opacity(), "0.5");
}

#[test]
fn toggle_metadata_tracks_the_mode() {
    assert!(Theme::Dark.pressed());
    assert!(!Theme::Light.pressed());
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
}
