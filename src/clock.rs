//! Formats the time of day for a 4-cell display.

use crate::clock_time::ClockReading;
use crate::settings::Settings;

/// What the clock face shows for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    /// Hour space-padded to two cells, minute zero-padded to two cells.
    pub text: String,
    pub colon: bool,
}

impl ClockFace {
    /// Apply the hour-format and colon rules to a reading.
    #[must_use]
    pub fn render(reading: ClockReading, settings: &Settings) -> Self {
        let hour = display_hour(reading.hour, settings.hour_24);
        Self {
            text: format!("{hour:>2}{:02}", reading.minute),
            colon: colon_lit(reading.second, settings.flash_colon),
        }
    }
}

/// Map a 0..=23 hour to what the clock shows.
///
/// In 12-hour mode midnight and noon show as 12.
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    reason = "Hours are < 24"
)]
pub const fn display_hour(hour: u8, hour_24: bool) -> u8 {
    if hour_24 {
        return hour;
    }
    match hour % 12 {
        0 => 12,
        twelve_hour => twelve_hour,
    }
}

/// The colon is lit on even seconds when flashing, otherwise always.
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    reason = "Parity check"
)]
pub const fn colon_lit(second: u8, flash_colon: bool) -> bool {
    !flash_colon || second % 2 == 0
}
