//! Core domain logic for World Clock.
//!
//! Two pure computations drive the whole application:
//!
//! - [`filter_locations`]: case-insensitive substring search over the catalog.
//! - [`project`]: an instant and an IANA zone become hand angles plus the
//!   digital time and weekday shown on a clock card.
//!
//! The wall clock itself sits behind the [`Clock`] trait so callers can pin
//! time in tests.

pub mod catalog;
mod clock;
pub mod filter;
pub mod projection;

pub use catalog::{LOCATIONS, locations};
pub use clock::{Clock, FixedClock, SystemClock};
pub use filter::{filter_locations, matches};
pub use projection::{civil_time, hand_angles, project, project_location, resolve_zone};

pub use worldclock_types::{
    CivilTime, ClockProjection, HandAngles, LocationRecord, ProjectionError,
};
