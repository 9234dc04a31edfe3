//! Linear range mapping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Map `value` linearly from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// No clamping: values outside the input range extrapolate. `in_min` and
/// `in_max` must differ; equal bounds divide by zero.
///
/// # Example
/// ```
/// use touch_am::dsp::range::map_range;
/// let freq = map_range(0.5, 0.0, 1.0, 55.0, 880.0);
/// assert!((freq - 467.5).abs() < 1e-4);
/// ```
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Closed interval used to describe control and output ranges.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Map `value` from this range onto `target`.
    #[inline]
    pub fn map_to(&self, value: f32, target: Range) -> f32 {
        map_range(value, self.min, self.max, target.min, target.max)
    }

    /// Whether the range can be mapped from (finite, distinct bounds).
    pub fn is_mappable(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min != self.max
    }

    pub fn clamp(&self, value: f32) -> f32 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        value.clamp(lo, hi)
    }
}
