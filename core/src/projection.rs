//! Clock projection: an instant seen through a timezone.
//!
//! Resolution goes through the compiled-in IANA database (`chrono-tz`).
//! An identifier missing from the database is an error; there is no fallback
//! to UTC or to the host's local zone.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use worldclock_types::{CivilTime, ClockProjection, HandAngles, LocationRecord, ProjectionError};

/// 12-hour clock with two-digit hour, e.g. `09:05 AM`.
const DIGITAL_TIME_FORMAT: &str = "%I:%M %p";
/// Full English weekday name, e.g. `Monday`.
const WEEKDAY_FORMAT: &str = "%A";

const DEGREES_PER_SECOND: f64 = 6.0;
const DEGREES_PER_MINUTE: f64 = 6.0;
const MINUTE_HAND_DEGREES_PER_SECOND: f64 = 0.1;
const DEGREES_PER_HOUR: f64 = 30.0;
const HOUR_HAND_DEGREES_PER_MINUTE: f64 = 0.5;

pub fn resolve_zone(zone: &str) -> Result<Tz, ProjectionError> {
    zone.parse::<Tz>().map_err(|_| {
        tracing::debug!(zone, "Timezone identifier not found in IANA database");
        ProjectionError::unknown_timezone(zone)
    })
}

/// Hour, minute, and second of `instant` on a wall clock in `tz`.
#[must_use]
pub fn civil_time(instant: DateTime<Utc>, tz: Tz) -> CivilTime {
    let local = instant.with_timezone(&tz);
    CivilTime::new(local.hour(), local.minute(), local.second())
}

/// Hand rotations for a wall-clock reading.
///
/// The minute hand creeps with the seconds and the hour hand creeps with the
/// minutes, so neither jumps at the top of its unit.
#[must_use]
pub fn hand_angles(time: &CivilTime) -> HandAngles {
    let hour = f64::from(time.hour % 12);
    let minute = f64::from(time.minute);
    let second = f64::from(time.second);

    HandAngles {
        hour_deg: hour * DEGREES_PER_HOUR + minute * HOUR_HAND_DEGREES_PER_MINUTE,
        minute_deg: minute * DEGREES_PER_MINUTE + second * MINUTE_HAND_DEGREES_PER_SECOND,
        second_deg: second * DEGREES_PER_SECOND,
    }
}

/// Project `instant` onto a clock face in `zone`.
///
/// # Errors
///
/// Returns [`ProjectionError::UnknownTimezone`] when `zone` is not an IANA
/// identifier known to the timezone database.
pub fn project(instant: DateTime<Utc>, zone: &str) -> Result<ClockProjection, ProjectionError> {
    let tz = resolve_zone(zone)?;
    let local = instant.with_timezone(&tz);
    let civil = civil_time(instant, tz);

    Ok(ClockProjection {
        angles: hand_angles(&civil),
        digital_time: local.format(DIGITAL_TIME_FORMAT).to_string(),
        weekday_name: local.format(WEEKDAY_FORMAT).to_string(),
    })
}

pub fn project_location(
    instant: DateTime<Utc>,
    location: &LocationRecord,
) -> Result<ClockProjection, ProjectionError> {
    project(instant, location.zone)
}
