//! Full-screen rendering of the catalog.

use crate::common::{catalog_app, new_year_noon, render_text};

#[test]
fn first_rows_of_the_catalog() {
    let mut app = catalog_app(new_year_noon(), "");
    let text = render_text(&mut app, 120, 40);

    for city in ["New York", "London", "Paris", "Tokyo", "New Delhi", "Los Angeles"] {
        assert!(text.contains(city), "{city} missing");
    }
    // Third row onwards is scrolled out.
    assert!(!text.contains("Moscow"));
    assert!(text.contains("07:00 AM"));
    assert!(text.contains("05:30 PM"));
    assert!(text.contains("16/16 locations"));
}

#[test]
fn scrolling_reaches_the_last_row() {
    let mut app = catalog_app(new_year_noon(), "");
    render_text(&mut app, 120, 40);
    app.scroll_down(u16::MAX);
    let text = render_text(&mut app, 120, 40);

    assert!(text.contains("Berlin"));
    assert!(text.contains("Bangkok"));
    assert!(!text.contains("New York"));
}

#[test]
fn query_narrows_the_grid() {
    let mut app = catalog_app(new_year_noon(), "ondo");
    let text = render_text(&mut app, 80, 30);

    assert!(text.contains("London"));
    assert!(text.contains("EUROPE"));
    assert!(text.contains("1/16 locations"));
    assert!(!text.contains("Paris"));
}

#[test]
fn no_match_message() {
    let mut app = catalog_app(new_year_noon(), "xyz123");
    let text = render_text(&mut app, 80, 30);
    assert!(text.contains("No locations found matching \"xyz123\""));
}
