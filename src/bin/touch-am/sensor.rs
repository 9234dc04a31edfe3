//! Pointer-driven touch sensor
//!
//! The UI thread writes mouse/keyboard "touches" into a [`PointerState`];
//! the poller thread scans it like it would scan touch hardware.

use std::sync::Arc;

use touch_am::{
    control::{SensorError, TouchSensor},
    AtomicF32,
};

/// Touch size reported while the pointer is pressed.
const PRESSED_SIZE: f32 = 0.5;

/// Latest pointer position, written by the UI thread
#[derive(Debug)]
pub struct PointerState {
    size: AtomicF32,
    /// Horizontal, 0 = left edge
    x: AtomicF32,
    /// Vertical, 0 = top edge
    y: AtomicF32,
}

impl PointerState {
    /// Press (or drag) at the given pad position
    pub fn press(&self, x: f32, y: f32) {
        self.x.store(x.clamp(0.0, 1.0));
        self.y.store(y.clamp(0.0, 1.0));
        self.size.store(PRESSED_SIZE);
    }

    pub fn release(&self) {
        self.size.store(0.0);
    }

    pub fn is_pressed(&self) -> bool {
        self.size.load() > 0.0
    }

    pub fn toggle(&self) {
        if self.is_pressed() {
            self.release();
        } else {
            self.press(self.x(), self.y());
        }
    }

    /// Move by a delta, keeping the press state
    pub fn nudge(&self, dx: f32, dy: f32) {
        self.x.store((self.x() + dx).clamp(0.0, 1.0));
        self.y.store((self.y() + dy).clamp(0.0, 1.0));
    }

    pub fn x(&self) -> f32 {
        self.x.load()
    }

    pub fn y(&self) -> f32 {
        self.y.load()
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            size: AtomicF32::new(0.0),
            x: AtomicF32::new(0.5),
            y: AtomicF32::new(0.5),
        }
    }
}

/// [`TouchSensor`] that snapshots a shared [`PointerState`] on every scan
pub struct PointerSensor {
    pointer: Arc<PointerState>,
    size: f32,
    x: f32,
    y: f32,
}

impl PointerSensor {
    pub fn new(pointer: Arc<PointerState>) -> Self {
        Self {
            pointer,
            size: 0.0,
            x: 0.5,
            y: 0.5,
        }
    }
}

impl TouchSensor for PointerSensor {
    fn scan(&mut self) -> Result<(), SensorError> {
        self.size = self.pointer.size.load();
        self.x = self.pointer.x();
        self.y = self.pointer.y();
        Ok(())
    }

    fn touch_size(&self) -> f32 {
        self.size
    }

    fn location_x(&self) -> f32 {
        self.x
    }

    fn location_y(&self) -> f32 {
        self.y
    }
}
