//! Configuration from environment-style variables.

use std::collections::HashMap;
use std::path::PathBuf;

use embassy_time::Duration;
use segment_clock::{Config, ControllerOptions, Error, Geometry};

fn config(vars: &[(&str, &str)]) -> segment_clock::Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|&(name, value)| (name.to_owned(), value.to_owned()))
        .collect();
    Config::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn defaults_match_the_reference_wiring() {
    let config = config(&[]).expect("defaults are valid");
    assert_eq!(config, Config::default());
    assert_eq!(config.settings_path, PathBuf::from("clock_settings.json"));
    assert_eq!(config.i2c_address, 0x70);
    assert_eq!(config.geometry, Geometry::FourteenSegment);
    assert_eq!(config.scroll_delay, Duration::from_millis(500));
    assert_eq!(config.dwell, Duration::from_secs(2));
    assert_eq!(config.save_debounce_ticks, 10);
    assert_eq!(config.wifi_interface, "wlan0");
    assert_eq!(
        (config.pins.encoder_a, config.pins.encoder_b, config.pins.confirm),
        (17, 18, 4)
    );
    assert_eq!(
        (config.pins.up, config.pins.down, config.pins.left, config.pins.right),
        (27, 23, 22, 24)
    );
    assert!(config.gpio);
    assert!(!config.keyboard);
    assert!(!config.auto_dim);
}

#[test]
fn overrides_are_parsed() {
    let config = config(&[
        ("CLOCK_SETTINGS_PATH", "/var/lib/clock/settings.json"),
        ("CLOCK_I2C_ADDRESS", "0x71"),
        ("CLOCK_GEOMETRY", "7"),
        ("CLOCK_SCROLL_DELAY_MS", "250"),
        ("CLOCK_SAVE_DEBOUNCE_TICKS", " 3 "),
        ("CLOCK_PIN_CONFIRM", "5"),
        ("CLOCK_KEYBOARD", "yes"),
        ("CLOCK_GPIO", "off"),
        ("CLOCK_AUTO_DIM", "TRUE"),
        ("CLOCK_LATITUDE", "47.6"),
    ])
    .expect("valid overrides");
    assert_eq!(
        config.settings_path,
        PathBuf::from("/var/lib/clock/settings.json")
    );
    assert_eq!(config.i2c_address, 0x71);
    assert_eq!(config.geometry, Geometry::SevenSegment);
    assert_eq!(config.scroll_delay, Duration::from_millis(250));
    assert_eq!(config.save_debounce_ticks, 3);
    assert_eq!(config.pins.confirm, 5);
    assert!(config.keyboard);
    assert!(!config.gpio);
    assert!(config.auto_dim);
    assert!((config.location.latitude - 47.6).abs() < f64::EPSILON);

    let options = ControllerOptions::from(&config);
    assert_eq!(options.save_debounce_ticks, 3);
    assert_eq!(options.auto_dim, Some(config.location));
}

#[test]
fn decimal_address_is_accepted() {
    assert_eq!(
        config(&[("CLOCK_I2C_ADDRESS", "112")]).expect("valid").i2c_address,
        0x70
    );
}

#[test]
fn invalid_values_name_the_variable() {
    for (name, value) in [
        ("CLOCK_GEOMETRY", "16"),
        ("CLOCK_I2C_ADDRESS", "0x170"),
        ("CLOCK_DWELL_MS", "-1"),
        ("CLOCK_AUTO_DIM", "maybe"),
        ("CLOCK_PIN_A", "GPIO17"),
    ] {
        match config(&[(name, value)]) {
            Err(Error::InvalidConfig {
                name: reported,
                value: reported_value,
            }) => {
                assert_eq!(reported, name);
                assert_eq!(reported_value, value);
            }
            other => panic!("{name}={value} gave {other:?}"),
        }
    }
}
