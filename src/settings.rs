//! Persistent clock settings stored as a small JSON file.
//!
//! The file is rewritten with defaults when it is missing or cannot be parsed, so a
//! corrupted file never stops the clock from starting.
//!
//! # Example
//!
//! ```no_run
//! use segment_clock::settings::SettingsStore;
//!
//! # fn example() -> segment_clock::Result<()> {
//! let store = SettingsStore::new("clock_settings.json");
//! let mut settings = store.load();
//! settings.hour_24 = true;
//! store.save(&settings)?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Timezone used when none is stored.
pub const DEFAULT_TIMEZONE: &str = "America/Chicago";

/// Display dimming level, always within `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Brightness(u8);

impl Brightness {
    /// Dimmest level. The display is still lit.
    pub const MIN: Self = Self(0);
    /// Brightest level.
    pub const MAX: Self = Self(15);

    /// Build a level, clamping anything outside `0..=15`.
    #[must_use]
    pub fn new(level: i64) -> Self {
        let clamped = level.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        Self(u8::try_from(clamped).unwrap_or(Self::MAX.0))
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// One step brighter, stopping at [`Brightness::MAX`].
    #[must_use]
    pub fn brighter(self) -> Self {
        Self::new(i64::from(self.0).saturating_add(1))
    }

    /// One step dimmer, stopping at [`Brightness::MIN`].
    #[must_use]
    pub fn dimmer(self) -> Self {
        Self::new(i64::from(self.0).saturating_sub(1))
    }

    /// Jump between the extremes: anything lit above minimum goes to minimum, minimum goes to maximum.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self > Self::MIN { Self::MIN } else { Self::MAX }
    }
}

impl From<i64> for Brightness {
    fn from(level: i64) -> Self {
        Self::new(level)
    }
}

impl From<Brightness> for u8 {
    fn from(brightness: Brightness) -> Self {
        brightness.0
    }
}

/// User-adjustable clock settings.
///
/// Keys missing from the file take their default individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub brightness: Brightness,
    /// IANA timezone identifier, for example `America/Chicago`.
    pub timezone: String,
    pub hour_24: bool,
    pub flash_colon: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brightness: Brightness::MIN,
            timezone: DEFAULT_TIMEZONE.to_owned(),
            hour_24: false,
            flash_colon: true,
        }
    }
}

/// Loads and saves [`Settings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored settings.
    ///
    /// A missing file is created with defaults. A file that cannot be parsed is replaced
    /// with defaults. Failures to write the replacement are logged; the defaults are still
    /// returned.
    #[must_use]
    pub fn load(&self) -> Settings {
        match self.try_load() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                info!("No settings at {}; writing defaults", self.path.display());
                self.save_defaults()
            }
            Err(err) => {
                warn!("Error loading settings: {err}. Using defaults.");
                self.save_defaults()
            }
        }
    }

    /// Read the file without repairing it.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid settings JSON.
    pub fn try_load(&self) -> Result<Option<Settings>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Write the settings with stable, indented formatting.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let mut text = serde_json::to_string_pretty(settings)?;
        text.push('\n');
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn save_defaults(&self) -> Settings {
        let settings = Settings::default();
        if let Err(err) = self.save(&settings) {
            warn!("Error saving settings: {err}");
        }
        settings
    }
}
