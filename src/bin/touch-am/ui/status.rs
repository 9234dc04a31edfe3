//! Status bar widget - device format, pitches and output level

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// Render the status bar
///
/// `frequencies` holds the target pitch of each axis: carrier first, then modulators.
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    sample_rate: f32,
    channels: usize,
    frequencies: &[f32],
    audio_stats: &AudioStats,
) {
    let block = Block::default().title(" touch-am ").borders(Borders::ALL);

    let mut spans = Vec::with_capacity(frequencies.len() + 3);
    for (axis, hz) in frequencies.iter().enumerate() {
        let (label, color) = if axis == 0 {
            ("Carrier", Color::Yellow)
        } else {
            ("Mod", Color::Magenta)
        };
        spans.push(Span::styled(
            format!(" {label}: {hz:>6.1} Hz "),
            Style::default().fg(color),
        ));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("{:.1}kHz x{}  ", sample_rate / 1000.0, channels),
        Style::default().fg(Color::DarkGray),
    ));
    spans.push(Span::styled(
        format!("Peak: {:.2}  RMS: {:.2}", audio_stats.peak, audio_stats.rms),
        Style::default().fg(Color::Cyan),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
