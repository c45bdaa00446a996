//! Search behavior over the built-in catalog.

use worldclock_core::{filter_locations, locations};

use crate::common::{catalog_app, new_year_noon};

fn cities(query: &str) -> Vec<&'static str> {
    filter_locations(query, locations())
        .into_iter()
        .map(|record| record.city)
        .collect()
}

#[test]
fn empty_query_keeps_catalog_order() {
    let all = cities("");
    assert_eq!(all.len(), 16);
    assert_eq!(all.first(), Some(&"New York"));
    assert_eq!(all.last(), Some(&"Berlin"));
}

#[test]
fn region_match_is_case_insensitive() {
    let expected = [
        "Tokyo",
        "New Delhi",
        "Dubai",
        "Singapore",
        "Shanghai",
        "Seoul",
        "Bangkok",
    ];
    assert_eq!(cities("ASIA"), expected);
    assert_eq!(cities("asia"), expected);
    assert_eq!(cities("aSiA"), expected);
}

#[test]
fn country_and_city_fields_match() {
    assert_eq!(cities("usa"), ["New York", "Los Angeles"]);
    assert_eq!(cities("ondo"), ["London"]);
    assert_eq!(cities("korea"), ["Seoul"]);
}

#[test]
fn unmatched_query_is_empty() {
    assert!(cities("xyz123").is_empty());
}

#[test]
fn results_are_a_subsequence_of_the_catalog() {
    for query in ["e", "an", "o", "paulo", "EUROPE"] {
        let matched = cities(query);
        let mut catalog = locations().iter().map(|record| record.city);
        for city in &matched {
            assert!(
                catalog.any(|candidate| candidate == *city),
                "{query:?}: {city} out of order"
            );
        }
    }
}

#[test]
fn app_filter_tracks_edits() {
    let mut app = catalog_app(new_year_noon(), "");
    assert_eq!(app.match_count(), 16);

    for c in "euro".chars() {
        app.enter_char(c);
    }
    let europe: Vec<_> = app.visible_locations().iter().map(|r| r.city).collect();
    assert_eq!(
        europe,
        ["London", "Paris", "Moscow", "Istanbul", "Berlin"]
    );

    app.clear_query();
    assert_eq!(app.match_count(), 16);
}
