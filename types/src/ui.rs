//! UI state types shared by the engine and the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs and canvas markers.
    pub ascii_only: bool,
    /// Use the high-contrast palette.
    pub high_contrast: bool,
}

/// Vertical scroll position over the rows of the clock grid.
///
/// `max` is reported by the renderer after layout; the offset is clamped to it
/// on every update so a shrinking result set never leaves the view past the
/// last row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
    max: u16,
}

impl ScrollState {
    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    #[must_use]
    pub const fn max(&self) -> u16 {
        self.max
    }

    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset.saturating_add(rows).min(self.max);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
