//! Search over location records.
//!
//! Matching is a plain case-insensitive substring test against city, country,
//! and region. The query is not trimmed or tokenized, and the zone identifier
//! is not searched.

use worldclock_types::LocationRecord;

/// Whether `record` matches an already-lowercased query.
fn matches_folded(record: &LocationRecord, folded_query: &str) -> bool {
    record
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(folded_query))
}

/// Whether `record` matches `query`.
///
/// An empty query matches every record.
#[must_use]
pub fn matches(record: &LocationRecord, query: &str) -> bool {
    matches_folded(record, &query.to_lowercase())
}

/// Records matching `query`, in their original order.
#[must_use]
pub fn filter_locations<'a>(query: &str, locations: &'a [LocationRecord]) -> Vec<&'a LocationRecord> {
    if query.is_empty() {
        return locations.iter().collect();
    }
    let folded = query.to_lowercase();
    locations
        .iter()
        .filter(|record| matches_folded(record, &folded))
        .collect()
}
