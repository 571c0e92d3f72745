//! Runtime configuration from environment variables.
//!
//! An optional `.env` file in the working directory is loaded first, so a device can keep
//! its wiring in one place. Every variable has a default matching the reference wiring of
//! a Raspberry Pi with an HT16K33 backpack on bus 1.

use core::str::FromStr;
use std::path::PathBuf;

use embassy_time::Duration;

use crate::glyph::Geometry;
use crate::segment_writer::DEFAULT_ADDRESS;
use crate::solar::Location;
use crate::{Error, Result};

/// BCM line offsets of the encoder and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    pub encoder_a: u32,
    pub encoder_b: u32,
    pub confirm: u32,
    pub up: u32,
    pub down: u32,
    pub left: u32,
    pub right: u32,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            encoder_a: 17,
            encoder_b: 18,
            confirm: 4,
            up: 27,
            down: 23,
            left: 22,
            right: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub settings_path: PathBuf,
    pub i2c_bus: PathBuf,
    pub i2c_address: u8,
    pub geometry: Geometry,
    /// Pause between scroll windows.
    pub scroll_delay: Duration,
    /// How long announcements stay up.
    pub dwell: Duration,
    /// Ticks after the last brightness change before it is saved.
    pub save_debounce_ticks: u32,
    pub wifi_interface: String,
    pub gpio_chip: PathBuf,
    pub pins: PinConfig,
    pub gpio: bool,
    /// Read stdin as well. Forced on when the GPIO panel cannot be opened.
    pub keyboard: bool,
    /// Switch between the dimmest and brightest levels at dusk and dawn.
    pub auto_dim: bool,
    pub location: Location,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from("clock_settings.json"),
            i2c_bus: PathBuf::from("/dev/i2c-1"),
            i2c_address: DEFAULT_ADDRESS,
            geometry: Geometry::FourteenSegment,
            scroll_delay: Duration::from_millis(500),
            dwell: Duration::from_millis(2000),
            save_debounce_ticks: 10,
            wifi_interface: "wlan0".to_owned(),
            gpio_chip: PathBuf::from("/dev/gpiochip0"),
            pins: PinConfig::default(),
            gpio: true,
            keyboard: false,
            auto_dim: false,
            location: Location::default(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a variable that is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from any variable source. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a variable that is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let vars = Vars(&lookup);
        Ok(Self {
            settings_path: vars.path("CLOCK_SETTINGS_PATH", defaults.settings_path),
            i2c_bus: vars.path("CLOCK_I2C_BUS", defaults.i2c_bus),
            i2c_address: vars.get_with("CLOCK_I2C_ADDRESS", defaults.i2c_address, parse_address)?,
            geometry: vars.get_with("CLOCK_GEOMETRY", defaults.geometry, parse_geometry)?,
            scroll_delay: vars.millis("CLOCK_SCROLL_DELAY_MS", defaults.scroll_delay)?,
            dwell: vars.millis("CLOCK_DWELL_MS", defaults.dwell)?,
            save_debounce_ticks: vars.get("CLOCK_SAVE_DEBOUNCE_TICKS", defaults.save_debounce_ticks)?,
            wifi_interface: lookup("CLOCK_WIFI_INTERFACE").unwrap_or(defaults.wifi_interface),
            gpio_chip: vars.path("CLOCK_GPIO_CHIP", defaults.gpio_chip),
            pins: PinConfig {
                encoder_a: vars.get("CLOCK_PIN_A", defaults.pins.encoder_a)?,
                encoder_b: vars.get("CLOCK_PIN_B", defaults.pins.encoder_b)?,
                confirm: vars.get("CLOCK_PIN_CONFIRM", defaults.pins.confirm)?,
                up: vars.get("CLOCK_PIN_UP", defaults.pins.up)?,
                down: vars.get("CLOCK_PIN_DOWN", defaults.pins.down)?,
                left: vars.get("CLOCK_PIN_LEFT", defaults.pins.left)?,
                right: vars.get("CLOCK_PIN_RIGHT", defaults.pins.right)?,
            },
            gpio: vars.get_with("CLOCK_GPIO", defaults.gpio, parse_bool)?,
            keyboard: vars.get_with("CLOCK_KEYBOARD", defaults.keyboard, parse_bool)?,
            auto_dim: vars.get_with("CLOCK_AUTO_DIM", defaults.auto_dim, parse_bool)?,
            location: Location {
                latitude: vars.get("CLOCK_LATITUDE", defaults.location.latitude)?,
                longitude: vars.get("CLOCK_LONGITUDE", defaults.location.longitude)?,
            },
        })
    }
}

struct Vars<'a, F>(&'a F);

impl<F: Fn(&str) -> Option<String>> Vars<'_, F> {
    fn get_with<T>(
        &self,
        name: &'static str,
        default: T,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T> {
        let Some(value) = (self.0)(name) else {
            return Ok(default);
        };
        parse(value.trim()).ok_or(Error::InvalidConfig { name, value })
    }

    fn get<T: FromStr>(&self, name: &'static str, default: T) -> Result<T> {
        self.get_with(name, default, |value| value.parse().ok())
    }

    fn millis(&self, name: &'static str, default: Duration) -> Result<Duration> {
        self.get_with(name, default, |value| value.parse().ok().map(Duration::from_millis))
    }

    fn path(&self, name: &'static str, default: PathBuf) -> PathBuf {
        (self.0)(name).map_or(default, PathBuf::from)
    }
}

fn parse_address(value: &str) -> Option<u8> {
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    }
}

fn parse_geometry(value: &str) -> Option<Geometry> {
    match value {
        "7" => Some(Geometry::SevenSegment),
        "14" => Some(Geometry::FourteenSegment),
        _ => None,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
