//! Clock projection through the engine at pinned instants.

use worldclock_core::{Clock, FixedClock, project};
use worldclock_engine::ProjectionError;

use crate::common::{catalog_app, new_year_noon, utc};

#[test]
fn london_at_new_year_noon() {
    let projection = project(new_year_noon(), "Europe/London").unwrap();
    assert_eq!(projection.digital_time, "12:00 PM");
    assert_eq!(projection.weekday_name, "Monday");
    assert_eq!(projection.angles.hour_deg, 0.0);
    assert_eq!(projection.angles.minute_deg, 0.0);
    assert_eq!(projection.angles.second_deg, 0.0);
}

#[test]
fn every_catalog_card_projects() {
    let app = catalog_app(new_year_noon(), "");
    assert_eq!(app.cards().len(), 16);
    for card in app.cards() {
        assert!(
            card.projection.is_ok(),
            "{} failed: {:?}",
            card.location.city,
            card.projection
        );
    }
}

#[test]
fn cards_follow_the_clock() {
    let mut app = catalog_app(new_year_noon(), "tokyo");
    let clock = FixedClock::new(utc(2024, 1, 1, 15, 0, 0));
    app.tick(clock.now());

    let card = &app.cards()[0];
    let projection = card.projection.as_ref().unwrap();
    assert_eq!(card.location.city, "Tokyo");
    assert_eq!(projection.digital_time, "12:00 AM");
    assert_eq!(projection.weekday_name, "Tuesday");
    assert_eq!(app.tick_count(), 1);
}

#[test]
fn southern_hemisphere_daylight_saving() {
    // Sydney is on summer time (UTC+11) in January; São Paulo stays at UTC-3.
    let sydney = project(new_year_noon(), "Australia/Sydney").unwrap();
    assert_eq!(sydney.digital_time, "11:00 PM");
    let sao_paulo = project(new_year_noon(), "America/Sao_Paulo").unwrap();
    assert_eq!(sao_paulo.digital_time, "09:00 AM");
}

#[test]
fn unknown_zone_is_an_error() {
    assert_eq!(
        project(new_year_noon(), "Mars/Olympus_Mons"),
        Err(ProjectionError::unknown_timezone("Mars/Olympus_Mons"))
    );
}
