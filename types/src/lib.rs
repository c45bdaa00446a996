//! Core domain types for World Clock.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod sanitize;
pub mod ui;

pub use sanitize::sanitize_query;

use thiserror::Error;

// ============================================================================
// Locations
// ============================================================================

/// A city shown on the clock grid.
///
/// Records are compiled into the binary and never mutated, so every field is a
/// `&'static str` and the whole record is `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationRecord {
    pub city: &'static str,
    pub country: &'static str,
    /// IANA timezone identifier, e.g. `Europe/London`.
    pub zone: &'static str,
    pub region: &'static str,
}

impl LocationRecord {
    #[must_use]
    pub const fn new(
        city: &'static str,
        country: &'static str,
        zone: &'static str,
        region: &'static str,
    ) -> Self {
        Self {
            city,
            country,
            zone,
            region,
        }
    }

    /// The fields a search query is matched against, in display order.
    #[must_use]
    pub const fn searchable_fields(&self) -> [&'static str; 3] {
        [self.city, self.country, self.region]
    }
}

// ============================================================================
// Clock projection
// ============================================================================

/// Wall-clock fields of an instant as observed in some timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    /// 0-23
    pub hour: u32,
    /// 0-59
    pub minute: u32,
    /// 0-59
    pub second: u32,
}

impl CivilTime {
    #[must_use]
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

/// Rotation of each analog hand in degrees, clockwise from 12 o'clock.
///
/// All three values lie in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandAngles {
    pub hour_deg: f64,
    pub minute_deg: f64,
    pub second_deg: f64,
}

/// Everything a clock card needs to render one location at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockProjection {
    pub angles: HandAngles,
    /// 12-hour `hh:mm AM|PM` in the target timezone.
    pub digital_time: String,
    /// Full weekday name in the target timezone.
    pub weekday_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("unknown timezone: {zone}")]
    UnknownTimezone { zone: String },
}

impl ProjectionError {
    #[must_use]
    pub fn unknown_timezone(zone: impl Into<String>) -> Self {
        Self::UnknownTimezone { zone: zone.into() }
    }

    #[must_use]
    pub fn zone(&self) -> &str {
        match self {
            Self::UnknownTimezone { zone } => zone,
        }
    }
}
