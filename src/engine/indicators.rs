//! Indicator outputs: touch presence plus one intensity per axis.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::control::AtomicF32;

/// Receives indicator state once per audio block.
pub trait IndicatorSink: Send {
    fn set_presence(&mut self, present: bool);

    fn set_intensity(&mut self, axis: usize, intensity: f32);
}

/// Discard indicator output.
impl IndicatorSink for () {
    fn set_presence(&mut self, _present: bool) {}

    fn set_intensity(&mut self, _axis: usize, _intensity: f32) {}
}

/// Indicator state readable from other threads (e.g. a UI drawing LEDs).
#[derive(Debug)]
pub struct SharedIndicators {
    presence: AtomicBool,
    intensity: Box<[AtomicF32]>,
}

impl SharedIndicators {
    pub fn new(axes: usize) -> Self {
        Self {
            presence: AtomicBool::new(false),
            intensity: (0..axes).map(|_| AtomicF32::new(0.0)).collect(),
        }
    }

    pub fn presence(&self) -> bool {
        self.presence.load(Ordering::Relaxed)
    }

    pub fn intensity(&self, axis: usize) -> f32 {
        self.intensity.get(axis).map_or(0.0, AtomicF32::load)
    }

    pub fn axes(&self) -> usize {
        self.intensity.len()
    }
}

impl IndicatorSink for Arc<SharedIndicators> {
    fn set_presence(&mut self, present: bool) {
        self.presence.store(present, Ordering::Relaxed);
    }

    fn set_intensity(&mut self, axis: usize, intensity: f32) {
        if let Some(slot) = self.intensity.get(axis) {
            slot.store(intensity);
        }
    }
}
