//! Wall-clock time of day in a named timezone.
//!
//! [`ZoneClock`] is the seam between the clock and the system time so the renderer can be
//! exercised with a fixed time. [`SystemZoneClock`] reads the system clock and converts it
//! with the `chrono-tz` database.

use core::str::FromStr;

use chrono::{Datelike, Timelike, Utc};
use chrono_tz::Tz;
use embassy_time::Duration;
use log::warn;

use crate::settings::DEFAULT_TIMEZONE;
use crate::{Error, Result};

/// Duration representing one second.
pub const ONE_SECOND: Duration = Duration::from_secs(1);

/// Local time of day, plus the day of the year for solar calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    /// 0..=23
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// 1..=366
    pub day_of_year: u16,
}

impl ClockReading {
    /// A reading on the first day of the year, handy for fixed clocks.
    #[must_use]
    pub const fn at(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            day_of_year: 1,
        }
    }
}

/// Source of the current local time.
pub trait ZoneClock {
    /// Current local time in `timezone`, an IANA identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTimezone`] if the identifier is not recognized.
    fn local_time(&self, timezone: &str) -> Result<ClockReading>;

    /// Time until the next whole wall-clock second, for phase-aligned ticks.
    fn until_next_second(&self) -> Duration {
        ONE_SECOND
    }

    /// Like [`ZoneClock::local_time`] but never fails: an unknown zone is logged and
    /// [`DEFAULT_TIMEZONE`] is used instead.
    fn local_time_or_default(&self, timezone: &str) -> ClockReading {
        self.local_time(timezone).unwrap_or_else(|err| {
            warn!("{err}; falling back to {DEFAULT_TIMEZONE}");
            self.local_time(DEFAULT_TIMEZONE)
                .unwrap_or(ClockReading::at(0, 0, 0))
        })
    }
}

/// Reads the system clock and converts it with the `chrono-tz` database.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemZoneClock;

impl ZoneClock for SystemZoneClock {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "chrono returns hours < 24, minutes and seconds < 60, ordinals <= 366"
    )]
    fn local_time(&self, timezone: &str) -> Result<ClockReading> {
        let tz = Tz::from_str(timezone).map_err(|_| Error::UnknownTimezone(timezone.to_owned()))?;
        let now = Utc::now().with_timezone(&tz);
        Ok(ClockReading {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
            day_of_year: now.ordinal() as u16,
        })
    }

    fn until_next_second(&self) -> Duration {
        let subsec_micros = u64::from(Utc::now().timestamp_subsec_micros()).min(999_999);
        Duration::from_micros(1_000_000_u64.saturating_sub(subsec_micros))
    }
}
