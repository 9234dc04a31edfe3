//! Touch control: lock-free shared touch state and presence gating.
//!
//! Two activities touch this state. The sensor poller thread owns the raw
//! readings (`touch_size`, `location`); the audio callback owns the held
//! targets inside [`TouchGate`]. Every shared field has exactly one writer and
//! is an [`AtomicF32`] accessed with `Relaxed` ordering: only visibility is
//! needed, and the smoother downstream absorbs a reading that is one poll
//! interval stale. No locks, so the audio path never blocks.

/// Background thread that polls a touch sensor into [`TouchState`].
pub mod poller;

use std::sync::atomic::{AtomicU32, Ordering};

pub use poller::{AxisMap, PollerConfig, SensorError, SensorPoller, TouchSensor};

/// Touch size above which a touch counts as present.
pub const DEFAULT_TOUCH_THRESHOLD: f32 = 0.05;

/// An `f32` stored in an `AtomicU32` by bit pattern.
#[derive(Debug, Default)]
pub struct AtomicF32(AtomicU32);

impl AtomicF32 {
    pub fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed)
    }
}

/// Latest raw touch reading, shared between the poller and the engine.
#[derive(Debug)]
pub struct TouchState {
    touch_size: AtomicF32,
    location: Box<[AtomicF32]>,
}

impl TouchState {
    /// Create state for `axes` touch axes, all zeroed.
    pub fn new(axes: usize) -> Self {
        Self {
            touch_size: AtomicF32::new(0.0),
            location: (0..axes).map(|_| AtomicF32::new(0.0)).collect(),
        }
    }

    pub fn axes(&self) -> usize {
        self.location.len()
    }

    #[inline]
    pub fn touch_size(&self) -> f32 {
        self.touch_size.load()
    }

    /// Location on `axis` in sensor-native units; 0 for an unknown axis.
    #[inline]
    pub fn location(&self, axis: usize) -> f32 {
        self.location.get(axis).map_or(0.0, AtomicF32::load)
    }

    /// Publish a new reading. Only the sensor poller should call this.
    pub fn publish(&self, touch_size: f32, location: &[f32]) {
        for (slot, &value) in self.location.iter().zip(location) {
            slot.store(value);
        }
        self.touch_size.store(touch_size);
    }
}

/// Presence gate holding the last touched position per axis.
///
/// Owned by the engine; the only writer of the targets.
#[derive(Debug, Clone)]
pub struct TouchGate {
    threshold: f32,
    targets: Vec<f32>,
    present: bool,
}

impl TouchGate {
    /// `initial` sets the number of axes and the targets used before any touch.
    pub fn new(threshold: f32, initial: &[f32]) -> Self {
        Self {
            threshold,
            targets: initial.to_vec(),
            present: false,
        }
    }

    /// Sample the touch state once. Returns whether a touch is present.
    ///
    /// With a touch above threshold every target follows the current location;
    /// otherwise the targets keep their last values.
    #[inline]
    pub fn update(&mut self, touch: &TouchState) -> bool {
        self.present = touch.touch_size() > self.threshold;
        if self.present {
            for (axis, target) in self.targets.iter_mut().enumerate() {
                *target = touch.location(axis);
            }
        }
        self.present
    }

    #[inline]
    pub fn target(&self, axis: usize) -> f32 {
        self.targets.get(axis).copied().unwrap_or(0.0)
    }

    pub fn targets(&self) -> &[f32] {
        &self.targets
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}
