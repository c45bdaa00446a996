//! The fixed set of cities shown on the grid.

use worldclock_types::LocationRecord;

/// Every location the application knows about, in display order.
pub const LOCATIONS: [LocationRecord; 16] = [
    LocationRecord::new("New York", "USA", "America/New_York", "Americas"),
    LocationRecord::new("London", "UK", "Europe/London", "Europe"),
    LocationRecord::new("Paris", "France", "Europe/Paris", "Europe"),
    LocationRecord::new("Tokyo", "Japan", "Asia/Tokyo", "Asia"),
    LocationRecord::new("New Delhi", "India", "Asia/Kolkata", "Asia"),
    LocationRecord::new("Sydney", "Australia", "Australia/Sydney", "Oceania"),
    LocationRecord::new("Dubai", "UAE", "Asia/Dubai", "Asia"),
    LocationRecord::new("Los Angeles", "USA", "America/Los_Angeles", "Americas"),
    LocationRecord::new("Moscow", "Russia", "Europe/Moscow", "Europe"),
    LocationRecord::new("Singapore", "Singapore", "Asia/Singapore", "Asia"),
    LocationRecord::new("Shanghai", "China", "Asia/Shanghai", "Asia"),
    LocationRecord::new("São Paulo", "Brazil", "America/Sao_Paulo", "Americas"),
    LocationRecord::new("Istanbul", "Turkey", "Europe/Istanbul", "Europe"),
    LocationRecord::new("Seoul", "South Korea", "Asia/Seoul", "Asia"),
    LocationRecord::new("Bangkok", "Thailand", "Asia/Bangkok", "Asia"),
    LocationRecord::new("Berlin", "Germany", "Europe/Berlin", "Europe"),
];

#[must_use]
pub fn locations() -> &'static [LocationRecord] {
    &LOCATIONS
}
