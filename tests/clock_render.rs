//! Clock face formatting, zone lookup and the day/night estimate.

use segment_clock::clock::{colon_lit, display_hour};
use segment_clock::solar::{self, Location};
use segment_clock::{ClockFace, ClockReading, Settings, SystemZoneClock, ZoneClock};

fn settings(hour_24: bool, flash_colon: bool) -> Settings {
    Settings {
        hour_24,
        flash_colon,
        ..Settings::default()
    }
}

#[test]
fn twelve_hour_mapping() {
    let expected = [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
    for (hour, &shown) in (0..24).zip(&expected) {
        assert_eq!(display_hour(hour, false), shown, "hour {hour}");
        assert_eq!(display_hour(hour, true), hour);
    }
}

#[test]
fn colon_rule() {
    assert!(colon_lit(0, true));
    assert!(!colon_lit(1, true));
    assert!(colon_lit(58, true));
    for second in 0..60 {
        assert!(colon_lit(second, false));
    }
}

#[test]
fn just_after_midnight_in_twelve_hour_mode() {
    let face = ClockFace::render(ClockReading::at(0, 5, 30), &settings(false, true));
    assert_eq!(face.text, "1205");
    assert!(face.colon);

    let face = ClockFace::render(ClockReading::at(0, 5, 31), &settings(false, true));
    assert!(!face.colon);
}

#[test]
fn hours_are_space_padded_and_minutes_zero_padded() {
    let face = ClockFace::render(ClockReading::at(21, 7, 3), &settings(false, false));
    assert_eq!(face.text, " 907");
    assert!(face.colon);

    let face = ClockFace::render(ClockReading::at(21, 7, 3), &settings(true, true));
    assert_eq!(face.text, "2107");

    let face = ClockFace::render(ClockReading::at(0, 0, 0), &settings(true, true));
    assert_eq!(face.text, " 000");
}

#[test]
fn system_clock_knows_iana_zones() {
    let reading = SystemZoneClock
        .local_time("America/Denver")
        .expect("zone exists");
    assert!(reading.hour < 24);
    assert!(reading.minute < 60);
    assert!((1..=366).contains(&reading.day_of_year));
}

#[test]
fn unknown_zone_is_an_error_with_fallback() {
    assert!(SystemZoneClock.local_time("Mars/Olympus_Mons").is_err());
    let reading = SystemZoneClock.local_time_or_default("Mars/Olympus_Mons");
    assert!(reading.hour < 24);
}

#[test]
fn next_second_is_at_most_one_second_away() {
    let wait = SystemZoneClock.until_next_second();
    assert!(wait.as_micros() <= 1_000_000);
    assert!(wait.as_micros() > 0);
}

#[test]
fn noon_is_light_and_midnight_is_dark() {
    let location = Location::default();
    for day_of_year in [1, 81, 172, 355] {
        let noon = ClockReading {
            day_of_year,
            ..ClockReading::at(12, 0, 0)
        };
        let midnight = ClockReading {
            day_of_year,
            ..ClockReading::at(0, 30, 0)
        };
        assert!(!solar::is_dark(location, noon), "noon on day {day_of_year}");
        assert!(solar::is_dark(location, midnight), "midnight on day {day_of_year}");
    }
}

#[test]
fn summer_days_are_longer_than_winter_days() {
    let summer = solar::daylight_hours(30.0, 172);
    let winter = solar::daylight_hours(30.0, 355);
    assert!(summer > 13.5 && summer < 14.5, "{summer}");
    assert!(winter > 9.5 && winter < 10.5, "{winter}");
    assert!((solar::daylight_hours(0.0, 40) - 12.0).abs() < 1e-9);
}

#[test]
fn polar_latitudes_do_not_produce_nan() {
    assert!((solar::daylight_hours(80.0, 172) - 24.0).abs() < 1e-9);
    assert!(solar::daylight_hours(80.0, 355).abs() < 1e-9);
    let polar_night = ClockReading {
        day_of_year: 355,
        ..ClockReading::at(11, 0, 0)
    };
    let arctic = Location {
        latitude: 80.0,
        longitude: 15.0,
    };
    assert!(solar::is_dark(arctic, polar_night));
}
