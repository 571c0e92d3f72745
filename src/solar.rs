//! Rough day/night estimate used by auto-dimming.
//!
//! Sunrise and sunset are placed symmetrically around 12:00 local time using the NOAA
//! declination approximation. That is good to within the better part of an hour, which is
//! plenty for choosing between the dimmest and brightest levels.

use crate::clock_time::ClockReading;

/// Observer position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    /// Accepted for completeness; the estimate is centred on local noon and does not use it.
    pub longitude: f64,
}

impl Default for Location {
    /// Central Texas.
    fn default() -> Self {
        Self {
            latitude: 30.0,
            longitude: -97.8,
        }
    }
}

const AXIAL_TILT_DEGREES: f64 = 23.44;
const SOLAR_NOON_HOURS: f64 = 12.0;
const DEGREES_PER_HOUR: f64 = 15.0;

/// Solar declination in radians for a day of the year.
#[must_use]
pub fn declination(day_of_year: u16) -> f64 {
    let angle = 360.0 / 365.0 * (f64::from(day_of_year) - 81.0);
    AXIAL_TILT_DEGREES.to_radians() * angle.to_radians().sin()
}

/// Hours of daylight at `latitude` on `day_of_year`, between 0 and 24.
///
/// Polar day and polar night clamp instead of producing NaN.
#[must_use]
pub fn daylight_hours(latitude: f64, day_of_year: u16) -> f64 {
    let cos_hour_angle =
        (-latitude.to_radians().tan() * declination(day_of_year).tan()).clamp(-1.0, 1.0);
    2.0 * cos_hour_angle.acos().to_degrees() / DEGREES_PER_HOUR
}

/// Whether `now` falls outside the estimated sunrise..=sunset window.
#[must_use]
pub fn is_dark(location: Location, now: ClockReading) -> bool {
    let half_day = daylight_hours(location.latitude, now.day_of_year) / 2.0;
    let sunrise = SOLAR_NOON_HOURS - half_day;
    let sunset = SOLAR_NOON_HOURS + half_day;
    let local_hours = f64::from(now.hour) + f64::from(now.minute) / 60.0;
    !(sunrise..=sunset).contains(&local_hours)
}
