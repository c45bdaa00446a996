//! Shared test utilities and fixtures

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use ratatui::{Terminal, backend::TestBackend, buffer::Cell};

use worldclock_core::locations;
use worldclock_engine::{App, UiOptions};

/// 2024-01-01T12:00:00Z, a Monday.
pub fn new_year_noon() -> DateTime<Utc> {
    utc(2024, 1, 1, 12, 0, 0)
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .expect("valid UTC instant")
}

/// App over the full catalog, frozen at `now`.
pub fn catalog_app(now: DateTime<Utc>, query: &str) -> App {
    App::with_query(locations(), now, UiOptions::default(), query)
}

/// Render one frame and return the screen as newline-joined rows.
pub fn render_text(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| worldclock_tui::draw(frame, app))
        .expect("draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
