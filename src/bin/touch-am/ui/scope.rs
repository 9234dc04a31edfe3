//! Scope widget - engine output and the held control targets

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use touch_am::engine::ScopeFrame;

use super::ScopeHistory;

/// Render the three telemetry traces
pub fn render_scope(frame: &mut Frame, area: Rect, scope: &ScopeHistory) {
    let block = Block::default().title(" Scope ").borders(Borders::ALL);

    let len = scope.frames().len().max(1) as f64;
    let trace = |pick: fn(&ScopeFrame) -> f32| -> Vec<(f64, f64)> {
        scope
            .frames()
            .enumerate()
            .map(|(i, frame)| (i as f64 / len, pick(frame) as f64))
            .collect()
    };
    let output = trace(|f| f.output);
    let vertical = trace(|f| f.controls[0]);
    let horizontal = trace(|f| f.controls[1]);

    let datasets = vec![
        Dataset::default()
            .name("out")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&output),
        Dataset::default()
            .name("y")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&vertical),
        Dataset::default()
            .name("x")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&horizontal),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
