//! Loading, repairing and saving the settings file.

use std::fs;

use segment_clock::settings::DEFAULT_TIMEZONE;
use segment_clock::{Brightness, Settings, SettingsStore};
use tempfile::TempDir;

fn store() -> (TempDir, SettingsStore) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = SettingsStore::new(dir.path().join("clock_settings.json"));
    (dir, store)
}

#[test]
fn missing_file_is_created_with_defaults() {
    let (_dir, store) = store();
    let settings = store.load();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.timezone, DEFAULT_TIMEZONE);
    assert!(settings.flash_colon);
    assert_eq!(
        store.try_load().expect("readable"),
        Some(Settings::default())
    );
}

#[test]
fn malformed_file_is_replaced_with_defaults() {
    let (_dir, store) = store();
    fs::write(store.path(), "{ brightness: ").expect("write");
    assert!(store.try_load().is_err());

    assert_eq!(store.load(), Settings::default());
    assert_eq!(
        store.try_load().expect("repaired"),
        Some(Settings::default())
    );
}

#[test]
fn wrong_types_count_as_malformed() {
    let (_dir, store) = store();
    fs::write(store.path(), r#"{"brightness": "high"}"#).expect("write");
    assert_eq!(store.load(), Settings::default());
}

#[test]
fn missing_keys_take_defaults() {
    let (_dir, store) = store();
    fs::write(store.path(), r#"{"hour_24": true}"#).expect("write");
    let settings = store.load();
    assert!(settings.hour_24);
    assert_eq!(settings.brightness, Brightness::MIN);
    assert_eq!(settings.timezone, DEFAULT_TIMEZONE);
    assert!(settings.flash_colon);
}

#[test]
fn brightness_is_clamped_on_load() {
    let (_dir, store) = store();
    fs::write(store.path(), r#"{"brightness": 99}"#).expect("write");
    assert_eq!(store.load().brightness, Brightness::MAX);

    fs::write(store.path(), r#"{"brightness": -4}"#).expect("write");
    assert_eq!(store.load().brightness, Brightness::MIN);
}

#[test]
fn save_writes_indented_json() {
    let (_dir, store) = store();
    let settings = Settings {
        brightness: Brightness::new(9),
        timezone: "UTC".to_owned(),
        hour_24: true,
        flash_colon: false,
    };
    store.save(&settings).expect("save");

    let text = fs::read_to_string(store.path()).expect("read");
    assert_eq!(
        text,
        "{\n  \"brightness\": 9,\n  \"timezone\": \"UTC\",\n  \"hour_24\": true,\n  \"flash_colon\": false\n}\n"
    );
    assert_eq!(store.load(), settings);
}

#[test]
fn brightness_steps_stay_in_range() {
    assert_eq!(Brightness::MAX.brighter(), Brightness::MAX);
    assert_eq!(Brightness::MIN.dimmer(), Brightness::MIN);
    assert_eq!(Brightness::new(3).brighter().level(), 4);
    assert_eq!(Brightness::new(3).toggled(), Brightness::MIN);
    assert_eq!(Brightness::MIN.toggled(), Brightness::MAX);
    for level in -20..40 {
        assert!(Brightness::new(level).level() <= 15);
    }
}
