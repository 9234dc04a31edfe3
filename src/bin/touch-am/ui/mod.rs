//! TUI module for touch-am
//!
//! The pad stands in for the touch sensor, the side panel for the level
//! slider and indicator LEDs, and the scope plots the engine telemetry.

mod indicators;
mod pad;
mod scope;
mod status;

use std::{collections::VecDeque, sync::Arc, time::Duration};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use touch_am::{
    dsp::Range,
    engine::{LevelPanel, ScopeFrame, SharedIndicators},
    CONTROL_AXES,
};

use super::{app::TouchAm, sensor::PointerState};
use indicators::render_indicators;
use pad::render_pad;
use scope::render_scope;
use status::{render_status, AudioStats};

/// Scope history length in samples
const SCOPE_LEN: usize = 1024;
/// Level change per key press in dB
const LEVEL_STEP_DB: f32 = 1.0;
/// Pointer movement per arrow key press
const POINTER_STEP: f32 = 0.02;

/// Rolling window of telemetry frames for the scope
pub struct ScopeHistory {
    frames: VecDeque<ScopeFrame>,
    capacity: usize,
}

impl ScopeHistory {
    fn new(capacity: usize) -> Self {
        let mut frames = VecDeque::with_capacity(capacity);
        frames.resize(capacity, ScopeFrame::default());
        Self { frames, capacity }
    }

    fn push(&mut self, frame: ScopeFrame) {
        if self.frames.len() == self.capacity {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
    }

    pub fn frames(&self) -> impl ExactSizeIterator<Item = &ScopeFrame> {
        self.frames.iter()
    }

    /// Most recent held control targets
    pub fn latest_controls(&self) -> [f32; CONTROL_AXES] {
        self.frames
            .back()
            .map_or([0.0; CONTROL_AXES], |frame| frame.controls)
    }
}

/// UI application state
pub struct UiApp {
    scope_rx: Consumer<ScopeFrame>,
    scope: ScopeHistory,
    pointer: Arc<PointerState>,
    level: Arc<LevelPanel>,
    indicators: Arc<SharedIndicators>,
    control_range: Range,
    frequency_range: Range,
    sample_rate: f32,
    channels: usize,
    /// Inner pad area from the last draw, for mouse hit-testing
    pad_area: Rect,
    should_quit: bool,
}

impl UiApp {
    pub fn new(synth: &TouchAm, scope_rx: Consumer<ScopeFrame>) -> Self {
        let config = synth.config();
        Self {
            scope_rx,
            scope: ScopeHistory::new(SCOPE_LEN),
            pointer: synth.pointer(),
            level: synth.level(),
            indicators: synth.indicators(),
            control_range: config.control_range,
            frequency_range: config.frequency_range,
            sample_rate: config.sample_rate,
            channels: synth.channels(),
            pad_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_scope();

            terminal.draw(|frame| self.render(frame))?;

            // Non-blocking input, ~60fps
            if event::poll(Duration::from_millis(16))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code)
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Drain telemetry frames from the audio thread
    fn poll_scope(&mut self) {
        while let Ok(frame) = self.scope_rx.pop() {
            self.scope.push(frame);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.level.nudge(LEVEL_STEP_DB);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.level.nudge(-LEVEL_STEP_DB);
            }
            KeyCode::Char(' ') => self.pointer.toggle(),
            KeyCode::Left => self.pointer.nudge(-POINTER_STEP, 0.0),
            KeyCode::Right => self.pointer.nudge(POINTER_STEP, 0.0),
            KeyCode::Up => self.pointer.nudge(0.0, -POINTER_STEP),
            KeyCode::Down => self.pointer.nudge(0.0, POINTER_STEP),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                if let Some((x, y)) = pad_position(self.pad_area, mouse.column, mouse.row) {
                    self.pointer.press(x, y);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.pointer.release(),
            _ => {}
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // status, body (pad | panel), scope, help
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(10),
                Constraint::Length(1),
            ])
            .split(area);
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        let controls = self.scope.latest_controls();
        let frequencies = controls.map(|c| self.control_range.map_to(c, self.frequency_range));
        let output: Vec<f32> = self.scope.frames().map(|f| f.output).collect();

        render_status(
            frame,
            rows[0],
            self.sample_rate,
            self.channels,
            &frequencies,
            &AudioStats::from_buffer(&output),
        );
        self.pad_area = render_pad(frame, body[0], &self.pointer, &controls);
        render_indicators(frame, body[1], &self.indicators, &self.level);
        render_scope(frame, rows[2], &self.scope);

        let help = Paragraph::new(
            " [Drag] Touch  [Space] Latch touch  [Arrows] Move  [+/-] Level  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, rows[3]);
    }
}

/// Convert a terminal cell into 0..1 pad coordinates (y measured from the top)
fn pad_position(area: Rect, column: u16, row: u16) -> Option<(f32, f32)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
        return None;
    }
    let span = |extent: u16| extent.saturating_sub(1).max(1) as f32;
    let x = (column - area.x) as f32 / span(area.width);
    let y = (row - area.y) as f32 / span(area.height);
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_position_maps_corners() {
        let area = Rect::new(10, 5, 21, 11);
        assert_eq!(pad_position(area, 10, 5), Some((0.0, 0.0)));
        assert_eq!(pad_position(area, 30, 15), Some((1.0, 1.0)));
        assert_eq!(pad_position(area, 20, 10), Some((0.5, 0.5)));
        assert_eq!(pad_position(area, 9, 5), None);
        assert_eq!(pad_position(area, 31, 5), None);
        assert_eq!(pad_position(Rect::default(), 0, 0), None);
    }

    #[test]
    fn scope_history_keeps_latest_frames() {
        let mut scope = ScopeHistory::new(4);
        for i in 0..6 {
            scope.push(ScopeFrame {
                output: i as f32,
                controls: [i as f32, 0.0],
            });
        }
        let outputs: Vec<f32> = scope.frames().map(|f| f.output).collect();
        assert_eq!(outputs, vec![2.0, 3.0, 4.0, 5.0]);
        assert_eq!(scope.latest_controls(), [5.0, 0.0]);
    }
}
