//! Engine configuration, fixed once audio starts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::{
    control::DEFAULT_TOUCH_THRESHOLD,
    dsp::{Range, TableShape},
    CONTROL_AXES,
};

/// Everything the engine needs before the first block.
///
/// Defaults reproduce the classic patch: a 1024-point interpolated sine,
/// 18 Hz control smoothing, touch mapped onto 55-880 Hz, indicator
/// intensities in 0.3-1.0 and 6 dB of headroom.
///
/// ```
/// use touch_am::{dsp::TableShape, EngineConfig};
///
/// let config = EngineConfig::default()
///     .with_sample_rate(44_100.0)
///     .with_table(TableShape::Triangle, 512)
///     .with_smoothing_cutoff(10.0);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub sample_rate: f32,
    pub table_shape: TableShape,
    /// Points per generated table (ignored for [`TableShape::Custom`]).
    pub table_size: usize,
    pub interpolate: bool,
    pub smoothing_cutoff_hz: f32,
    /// Touch size a touch must exceed to move the targets.
    pub touch_threshold: f32,
    /// Targets before the first touch; its length sets the number of axes.
    pub initial_targets: Vec<f32>,
    /// Range of the touch coordinates.
    pub control_range: Range,
    /// Oscillator frequency range in Hz.
    pub frequency_range: Range,
    /// Indicator intensity range.
    pub indicator_range: Range,
    /// Fixed attenuation applied after the level gain.
    pub headroom: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            table_shape: TableShape::Sine,
            table_size: 1024,
            interpolate: true,
            smoothing_cutoff_hz: 18.0,
            touch_threshold: DEFAULT_TOUCH_THRESHOLD,
            initial_targets: vec![0.5; CONTROL_AXES],
            control_range: Range::new(0.0, 1.0),
            frequency_range: Range::new(55.0, 880.0),
            indicator_range: Range::new(0.3, 1.0),
            headroom: 0.5,
        }
    }
}

impl EngineConfig {
    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_table(mut self, shape: TableShape, size: usize) -> Self {
        self.table_shape = shape;
        self.table_size = size;
        self
    }

    pub fn with_interpolation(mut self, interpolate: bool) -> Self {
        self.interpolate = interpolate;
        self
    }

    pub fn with_smoothing_cutoff(mut self, cutoff_hz: f32) -> Self {
        self.smoothing_cutoff_hz = cutoff_hz;
        self
    }

    pub fn with_touch_threshold(mut self, threshold: f32) -> Self {
        self.touch_threshold = threshold;
        self
    }

    pub fn with_initial_targets(mut self, targets: Vec<f32>) -> Self {
        self.initial_targets = targets;
        self
    }

    pub fn with_frequency_range(mut self, min_hz: f32, max_hz: f32) -> Self {
        self.frequency_range = Range::new(min_hz, max_hz);
        self
    }

    pub fn with_indicator_range(mut self, min: f32, max: f32) -> Self {
        self.indicator_range = Range::new(min, max);
        self
    }

    pub fn with_headroom(mut self, headroom: f32) -> Self {
        self.headroom = headroom;
        self
    }

    pub fn axes(&self) -> usize {
        self.initial_targets.len()
    }

    /// Check the preconditions the audio path relies on without re-checking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(ConfigError::SampleRate(self.sample_rate));
        }
        if !(self.smoothing_cutoff_hz.is_finite() && self.smoothing_cutoff_hz > 0.0) {
            return Err(ConfigError::SmoothingCutoff(self.smoothing_cutoff_hz));
        }
        if !self.control_range.is_mappable() {
            return Err(ConfigError::ControlRange {
                min: self.control_range.min,
                max: self.control_range.max,
            });
        }
        if self.initial_targets.is_empty() {
            return Err(ConfigError::NoAxes);
        }
        Ok(())
    }
}
