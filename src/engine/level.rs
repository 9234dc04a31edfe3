//! Output level control.

use std::sync::Arc;

use crate::{control::AtomicF32, dsp::Range};

/// Default level slider position in dB.
pub const DEFAULT_LEVEL_DB: f32 = -6.0;
/// Default level slider range in dB.
pub const DEFAULT_LEVEL_RANGE: Range = Range::new(-60.0, 0.0);

/// Source of the output level, read once per audio block.
pub trait LevelControl: Send {
    fn level_db(&self) -> f32;
}

/// A constant level.
impl LevelControl for f32 {
    fn level_db(&self) -> f32 {
        *self
    }
}

impl<T: LevelControl + Sync + ?Sized> LevelControl for Arc<T> {
    fn level_db(&self) -> f32 {
        (**self).level_db()
    }
}

/// Level slider shared between a control surface and the audio thread.
///
/// Writes are clamped into the panel range.
#[derive(Debug)]
pub struct LevelPanel {
    db: AtomicF32,
    range: Range,
}

impl LevelPanel {
    pub fn new(initial_db: f32, range: Range) -> Self {
        Self {
            db: AtomicF32::new(range.clamp(initial_db)),
            range,
        }
    }

    pub fn db(&self) -> f32 {
        self.db.load()
    }

    pub fn set_db(&self, db: f32) {
        self.db.store(self.range.clamp(db));
    }

    /// Move the slider by `delta_db` and return the new position.
    pub fn nudge(&self, delta_db: f32) -> f32 {
        let db = self.range.clamp(self.db() + delta_db);
        self.db.store(db);
        db
    }

    pub fn range(&self) -> Range {
        self.range
    }

    /// Slider position as a 0..1 fraction of the range.
    pub fn position(&self) -> f32 {
        self.range.map_to(self.db(), Range::new(0.0, 1.0))
    }
}

impl Default for LevelPanel {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_DB, DEFAULT_LEVEL_RANGE)
    }
}

impl LevelControl for LevelPanel {
    fn level_db(&self) -> f32 {
        self.db()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_minus_six_db() {
        let panel = LevelPanel::default();
        assert_eq!(panel.level_db(), -6.0);
        assert!((panel.position() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn clamps_into_range() {
        let panel = LevelPanel::default();
        panel.set_db(12.0);
        assert_eq!(panel.db(), 0.0);
        panel.set_db(-100.0);
        assert_eq!(panel.db(), -60.0);

        assert_eq!(LevelPanel::new(-90.0, DEFAULT_LEVEL_RANGE).db(), -60.0);
    }

    #[test]
    fn nudge_moves_and_saturates() {
        let panel = LevelPanel::default();
        assert_eq!(panel.nudge(-3.0), -9.0);
        assert_eq!(panel.nudge(20.0), 0.0);
        assert_eq!(panel.nudge(1.0), 0.0);
    }

    #[test]
    fn shared_panel_is_a_level_control() {
        let panel = Arc::new(LevelPanel::default());
        let control: Box<dyn LevelControl> = Box::new(panel.clone());
        panel.set_db(-20.0);
        assert_eq!(control.level_db(), -20.0);
        assert_eq!((-3.0f32).level_db(), -3.0);
    }
}
