//! TUI rendering for World Clock using ratatui.
//!
//! ```text
//! ┌ header ─────────────────────────────────────────┐
//! │ World Clock / Current time across the globe     │
//! ├ search ─────────────────────────────────────────┤
//! ├ grid of clock cards (scrolls by row) ───────────┤
//! └ status bar ─────────────────────────────────────┘
//! ```

pub mod face;
mod input;
mod theme;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use worldclock_engine::{App, ClockCard, ClockProjection, ProjectionError};

/// Card footprint in terminal cells, including borders.
pub const CARD_WIDTH: u16 = 26;
pub const CARD_HEIGHT: u16 = 14;

const HEADER_HEIGHT: u16 = 2;
const SEARCH_HEIGHT: u16 = 3;
const SEARCH_PLACEHOLDER: &str = "Search country or city...";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Title
            Constraint::Length(SEARCH_HEIGHT), // Search
            Constraint::Min(1),                // Grid
            Constraint::Length(1),             // Status bar
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], &palette);
    draw_search(frame, app, chunks[1], &palette, &glyphs);
    draw_grid(frame, app, chunks[2], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);
}

fn draw_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled("World Clock", styles::title(palette))),
        Line::from(Span::styled(
            "Current time across the globe",
            Style::default().fg(palette.text_muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_search(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .title(Span::styled(" Search ", Style::default().fg(palette.accent)));
    let inner = block.inner(area);

    let prompt = format!("{} ", glyphs.search);
    let query = app.query();
    let body = if query.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(palette.text_muted))
    } else {
        Span::styled(query, Style::default().fg(palette.text_primary))
    };
    let line = Line::from(vec![
        Span::styled(prompt.clone(), Style::default().fg(palette.accent)),
        body,
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let before_cursor = prompt.width() + app.search().text_before_cursor().width();
    let before_cursor = u16::try_from(before_cursor).unwrap_or(u16::MAX);
    let max_x = inner.x + inner.width.saturating_sub(1);
    let cursor_x = inner.x.saturating_add(before_cursor).min(max_x);
    frame.set_cursor_position((cursor_x, inner.y));
}

/// Grid geometry for `count` cards in `area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u16,
    pub rows: u16,
    pub visible_rows: u16,
    pub card_width: u16,
}

impl GridLayout {
    #[must_use]
    pub fn compute(area: Rect, count: usize) -> Self {
        let columns = (area.width / CARD_WIDTH).max(1);
        let count = u16::try_from(count).unwrap_or(u16::MAX);
        let rows = count.div_ceil(columns);
        let visible_rows = (area.height / CARD_HEIGHT).max(1);
        Self {
            columns,
            rows,
            visible_rows,
            card_width: area.width / columns,
        }
    }

    #[must_use]
    pub fn scroll_max(&self) -> u16 {
        self.rows.saturating_sub(self.visible_rows)
    }
}

fn draw_grid(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    if app.cards().is_empty() {
        app.update_scroll_max(0);
        let message = format!("No locations found matching \"{}\"", app.query());
        let empty = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(palette.text_muted),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::top(area.height / 3)));
        frame.render_widget(empty, area);
        return;
    }

    let grid = GridLayout::compute(area, app.cards().len());
    app.update_scroll_max(grid.scroll_max());
    let first_row = app.scroll().offset();

    for (index, card) in app.cards().iter().enumerate() {
        let index = u16::try_from(index).unwrap_or(u16::MAX);
        let row = index / grid.columns;
        let column = index % grid.columns;
        if row < first_row || row >= first_row + grid.visible_rows {
            continue;
        }

        let y = area.y + (row - first_row) * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        let card_area = Rect {
            x: area.x + column * grid.card_width,
            y,
            width: grid.card_width,
            height,
        };
        draw_card(frame, card, card_area, palette, glyphs);
    }
}

fn draw_card(frame: &mut Frame, card: &ClockCard, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let location = &card.location;
    let border_color = if card.projection.is_ok() {
        palette.bg_border
    } else {
        palette.error
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            format!(" {} ", location.city),
            styles::city_name(palette),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Country / region
            Constraint::Min(1),    // Face
            Constraint::Length(1), // Digital time
            Constraint::Length(1), // Weekday
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(location.country, Style::default().fg(palette.accent))),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            location.region.to_uppercase(),
            Style::default().fg(palette.text_muted),
        ))
        .alignment(Alignment::Right),
        rows[0],
    );

    match &card.projection {
        Ok(projection) => draw_projection(frame, projection, &rows, palette, glyphs),
        Err(err) => draw_projection_error(frame, err, rows[1], palette, glyphs),
    }
}

fn draw_projection(
    frame: &mut Frame,
    projection: &ClockProjection,
    rows: &[Rect],
    palette: &Palette,
    glyphs: &Glyphs,
) {
    frame.render_widget(
        face::clock_face(projection.angles, palette, glyphs),
        face::face_area(rows[1]),
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            projection.digital_time.as_str(),
            styles::digital_time(palette),
        ))
        .alignment(Alignment::Center),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            projection.weekday_name.as_str(),
            Style::default().fg(palette.text_secondary),
        ))
        .alignment(Alignment::Center),
        rows[3],
    );
}

fn draw_projection_error(
    frame: &mut Frame,
    err: &ProjectionError,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let message = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", glyphs.error),
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(err.to_string(), Style::default().fg(palette.error)),
    ]))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().padding(Padding::top(area.height / 3)));
    frame.render_widget(message, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let separator = format!(" {} ", glyphs.separator);
    let left = Line::from(vec![
        Span::styled(
            format!(" {}/{} locations", app.match_count(), app.locations().len()),
            Style::default().fg(palette.text_secondary),
        ),
        Span::styled(separator, Style::default().fg(palette.text_muted)),
        Span::styled(
            app.now().format("UTC %H:%M:%S").to_string(),
            Style::default().fg(palette.text_muted),
        ),
    ]);

    let mut hints = Vec::new();
    if app.scroll().max() > 0 {
        hints.push(Span::styled(
            format!("{}{}", glyphs.arrow_up, glyphs.arrow_down),
            styles::key_highlight(palette),
        ));
        hints.push(Span::styled(" scroll  ", styles::key_hint(palette)));
    }
    hints.push(Span::styled("Esc", styles::key_highlight(palette)));
    hints.push(Span::styled(" clear/quit  ", styles::key_hint(palette)));
    hints.push(Span::styled("Ctrl+C", styles::key_highlight(palette)));
    hints.push(Span::styled(" quit ", styles::key_hint(palette)));

    frame.render_widget(Paragraph::new(left), area);
    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Right),
        area,
    );
}
