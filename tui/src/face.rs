//! Analog clock face drawn on a ratatui canvas.
//!
//! The canvas uses a unit coordinate system centered on the face: 12 o'clock
//! is `(0, 1)` and 3 o'clock is `(1, 0)`.

use ratatui::{
    layout::Rect,
    style::Color,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

use worldclock_engine::HandAngles;

use crate::theme::{Glyphs, Palette};

const BOUNDS: [f64; 2] = [-1.1, 1.1];
const RIM_RADIUS: f64 = 1.0;
const TICK_INNER_RADIUS: f64 = 0.85;
const HOUR_HAND_LENGTH: f64 = 0.5;
const MINUTE_HAND_LENGTH: f64 = 0.75;
const SECOND_HAND_LENGTH: f64 = 0.85;
const HUB_RADIUS: f64 = 0.06;

/// Tip of a hand of `length` rotated `angle_deg` clockwise from 12 o'clock.
#[must_use]
pub fn hand_endpoint(angle_deg: f64, length: f64) -> (f64, f64) {
    let radians = angle_deg.to_radians();
    (length * radians.sin(), length * radians.cos())
}

fn radial_segment(angle_deg: f64, from: f64, to: f64, color: Color) -> CanvasLine {
    let (x1, y1) = hand_endpoint(angle_deg, from);
    let (x2, y2) = hand_endpoint(angle_deg, to);
    CanvasLine {
        x1,
        y1,
        x2,
        y2,
        color,
    }
}

/// Canvas widget showing the rim, twelve hour ticks, the three hands and
/// the center hub.
#[must_use]
pub fn clock_face(angles: HandAngles, palette: &Palette, glyphs: &Glyphs) -> impl Widget {
    let palette = *palette;
    Canvas::default()
        .marker(glyphs.face_marker)
        .x_bounds(BOUNDS)
        .y_bounds(BOUNDS)
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RIM_RADIUS,
                color: palette.face_ticks,
            });
            for hour in 0..12 {
                let angle = f64::from(hour) * 30.0;
                ctx.draw(&radial_segment(
                    angle,
                    TICK_INNER_RADIUS,
                    RIM_RADIUS,
                    palette.face_ticks,
                ));
            }

            ctx.layer();
            ctx.draw(&radial_segment(
                angles.hour_deg,
                0.0,
                HOUR_HAND_LENGTH,
                palette.hour_hand,
            ));
            ctx.draw(&radial_segment(
                angles.minute_deg,
                0.0,
                MINUTE_HAND_LENGTH,
                palette.minute_hand,
            ));
            ctx.layer();
            ctx.draw(&radial_segment(
                angles.second_deg,
                0.0,
                SECOND_HAND_LENGTH,
                palette.second_hand,
            ));
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: HUB_RADIUS,
                color: palette.accent,
            });
        })
}

/// Largest area inside `area` whose cell aspect keeps the face round.
///
/// Terminal cells are roughly twice as tall as they are wide, so a round face
/// needs twice as many columns as rows.
#[must_use]
pub fn face_area(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height.saturating_mul(2);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
