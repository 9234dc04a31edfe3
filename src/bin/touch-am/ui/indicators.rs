//! Indicator LEDs and the level slider

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use touch_am::engine::{LevelPanel, SharedIndicators};

/// Render presence, per-axis intensity and the output level
pub fn render_indicators(
    frame: &mut Frame,
    area: Rect,
    indicators: &SharedIndicators,
    level: &LevelPanel,
) {
    let block = Block::default().title(" Panel ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend((0..indicators.axes()).map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let presence = if indicators.presence() {
        Span::styled(" ● touch", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ no touch", Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(Paragraph::new(presence), rows[0]);

    for axis in 0..indicators.axes() {
        let intensity = indicators.intensity(axis);
        let label = if axis == 0 { "Carrier" } else { "Mod" };
        let gauge = Gauge::default()
            .block(Block::default().title(format!(" {label} LED ")).borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Yellow))
            .ratio(intensity.clamp(0.0, 1.0) as f64)
            .label(format!("{intensity:.2}"));
        frame.render_widget(gauge, rows[1 + axis]);
    }

    let db = level.db();
    let gauge = Gauge::default()
        .block(Block::default().title(" Level [+/-] ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(level.position().clamp(0.0, 1.0) as f64)
        .label(format!("{db:.0} dB"));
    frame.render_widget(gauge, rows[1 + indicators.axes()]);
}
