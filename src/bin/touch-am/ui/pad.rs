//! Touch pad widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};
use touch_am::CONTROL_AXES;

use crate::sensor::PointerState;

/// Render the pad and return its inner area for mouse hit-testing
///
/// The pointer is drawn where it sits; the crosshair marks the targets the
/// engine is holding (vertical control is measured from the bottom edge).
pub fn render_pad(
    frame: &mut Frame,
    area: Rect,
    pointer: &PointerState,
    controls: &[f32; CONTROL_AXES],
) -> Rect {
    let (title, color) = if pointer.is_pressed() {
        (" Pad (touching) ", Color::Green)
    } else {
        (" Pad ", Color::DarkGray)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);

    let pointer_xy = [(pointer.x() as f64, 1.0 - pointer.y() as f64)];
    let held_x = controls[1] as f64;
    let held_y = controls[0] as f64;

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, 1.0])
        .y_bounds([0.0, 1.0])
        .paint(|ctx| {
            ctx.draw(&CanvasLine {
                x1: held_x,
                y1: 0.0,
                x2: held_x,
                y2: 1.0,
                color: Color::DarkGray,
            });
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: held_y,
                x2: 1.0,
                y2: held_y,
                color: Color::DarkGray,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &pointer_xy,
                color,
            });
        });

    frame.render_widget(canvas, area);
    inner
}
