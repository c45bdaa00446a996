//! Core engine for World Clock - application state without TUI dependencies.
//!
//! [`App`] owns the only mutable state in the program: the search query, the
//! current instant, and the grid scroll position. Two events drive it:
//!
//! - query edits re-run the filter immediately (no debouncing);
//! - [`App::tick`], called once per second, re-projects every visible clock.
//!
//! The filter is never re-evaluated on a tick.

mod search;

use std::collections::HashSet;

use chrono::{DateTime, Utc};

pub use search::SearchInput;
pub use worldclock_core::{
    ClockProjection, HandAngles, LocationRecord, ProjectionError, filter_locations,
    project_location,
};
pub use worldclock_types::ui::{ScrollState, UiOptions};

/// One cell of the clock grid.
///
/// Projection failure is kept per card so one bad zone only affects its own
/// card.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockCard {
    pub location: LocationRecord,
    pub projection: Result<ClockProjection, ProjectionError>,
}

impl ClockCard {
    fn project(location: LocationRecord, now: DateTime<Utc>) -> Self {
        Self {
            location,
            projection: project_location(now, &location),
        }
    }
}

pub struct App {
    locations: &'static [LocationRecord],
    search: SearchInput,
    visible: Vec<LocationRecord>,
    cards: Vec<ClockCard>,
    now: DateTime<Utc>,
    tick: u64,
    options: UiOptions,
    scroll: ScrollState,
    /// Zones whose projection failure has already been logged.
    reported_failures: HashSet<String>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(locations: &'static [LocationRecord], now: DateTime<Utc>, options: UiOptions) -> Self {
        Self::with_query(locations, now, options, "")
    }

    #[must_use]
    pub fn with_query(
        locations: &'static [LocationRecord],
        now: DateTime<Utc>,
        options: UiOptions,
        query: &str,
    ) -> Self {
        let mut app = Self {
            locations,
            search: SearchInput::with_text(query),
            visible: Vec::new(),
            cards: Vec::new(),
            now,
            tick: 0,
            options,
            scroll: ScrollState::default(),
            reported_failures: HashSet::new(),
            should_quit: false,
        };
        app.apply_filter();
        app
    }

    // ------------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------------

    /// Advance to `now` and re-project every visible location.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.now = now;
        self.tick = self.tick.wrapping_add(1);
        self.refresh_cards();
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn cards(&self) -> &[ClockCard] {
        &self.cards
    }

    fn refresh_cards(&mut self) {
        let now = self.now;
        let cards: Vec<ClockCard> = self
            .visible
            .iter()
            .map(|location| ClockCard::project(*location, now))
            .collect();

        for card in &cards {
            if let Err(err) = &card.projection
                && !self.reported_failures.contains(err.zone())
            {
                tracing::warn!(
                    city = card.location.city,
                    zone = err.zone(),
                    "Clock projection failed: {err}"
                );
                self.reported_failures.insert(err.zone().to_owned());
            }
        }

        self.cards = cards;
    }

    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn query(&self) -> &str {
        self.search.text()
    }

    #[must_use]
    pub fn search(&self) -> &SearchInput {
        &self.search
    }

    #[must_use]
    pub fn locations(&self) -> &'static [LocationRecord] {
        self.locations
    }

    #[must_use]
    pub fn visible_locations(&self) -> &[LocationRecord] {
        &self.visible
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.visible.len()
    }

    pub fn enter_char(&mut self, c: char) {
        self.edit_query(|search| search.enter_char(c));
    }

    pub fn enter_text(&mut self, text: &str) {
        self.edit_query(|search| search.enter_text(text));
    }

    pub fn delete_char(&mut self) {
        self.edit_query(SearchInput::delete_char);
    }

    pub fn delete_char_forward(&mut self) {
        self.edit_query(SearchInput::delete_char_forward);
    }

    pub fn delete_word_backwards(&mut self) {
        self.edit_query(SearchInput::delete_word_backwards);
    }

    pub fn clear_query(&mut self) {
        self.edit_query(SearchInput::clear);
    }

    pub fn move_cursor_left(&mut self) {
        self.search.move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.search.move_cursor_right();
    }

    pub fn move_cursor_home(&mut self) {
        self.search.move_cursor_home();
    }

    pub fn move_cursor_end(&mut self) {
        self.search.move_cursor_end();
    }

    /// Esc: clear a non-empty query, otherwise quit.
    pub fn clear_query_or_quit(&mut self) {
        if self.search.text().is_empty() {
            self.request_quit();
        } else {
            self.clear_query();
        }
    }

    fn edit_query(&mut self, edit: impl FnOnce(&mut SearchInput)) {
        let before = self.search.text().to_owned();
        edit(&mut self.search);
        if self.search.text() != before {
            self.apply_filter();
        }
    }

    fn apply_filter(&mut self) {
        self.visible = filter_locations(self.search.text(), self.locations)
            .into_iter()
            .copied()
            .collect();
        self.scroll.reset();
        tracing::debug!(
            query = self.search.text(),
            matches = self.visible.len(),
            "Search filter applied"
        );
        self.refresh_cards();
    }

    // ------------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// Called by the renderer once the grid layout is known.
    pub fn update_scroll_max(&mut self, max_rows: u16) {
        self.scroll.set_max(max_rows);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll.scroll_up(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll.scroll_down(rows);
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
