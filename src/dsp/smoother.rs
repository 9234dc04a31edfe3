//! One-pole low-pass smoothing for control signals.

use std::f32::consts::TAU;

/*
Control Smoothing
=================

Touch positions arrive a few dozen times per second. If we jumped the
oscillator frequency straight to each new value, every update would be an
audible step (a "zipper" or click). A one-pole low-pass filter glides toward
each new value instead.

Vocabulary
----------

  control rate  How often the raw value changes (here: once per audio block,
                fed by a ~83 Hz sensor poll).

  audio rate    How often the smoother runs: once per output sample, so the
                glide is resolved at full sample resolution.

  cutoff        Frequency in Hz above which changes are attenuated. Lower
                cutoff = slower, smoother glide. 18 Hz reacts in ~10 ms.

  coefficient   Fraction of the remaining distance covered per sample:

                    coefficient = 1 - exp(-2π × cutoff / sample_rate)

The Math
--------

    state += coefficient × (input - state)

For a constant input the distance to the input shrinks by (1 - coefficient)
every sample. With coefficient in (0, 1] that factor is in [0, 1), so the
output approaches the input geometrically and never crosses it.

    input   ─────┐         ┌──────────
                 └─────────┘
    output  ────╲           ╱‾‾‾‾‾‾‾‾‾
                 ╲_________╱
*/

#[derive(Debug, Clone, Copy)]
pub struct OnePole {
    state: f32,
    coefficient: f32,
}

impl OnePole {
    /// Create a smoother with the given cutoff (Hz) at `sample_rate`, state 0.
    pub fn new(cutoff_hz: f32, sample_rate: f32) -> Self {
        let mut filter = Self {
            state: 0.0,
            coefficient: 1.0,
        };
        filter.configure(cutoff_hz, sample_rate);
        filter
    }

    /// Recompute the coefficient. The current state is kept.
    pub fn configure(&mut self, cutoff_hz: f32, sample_rate: f32) {
        self.coefficient = 1.0 - (-TAU * cutoff_hz / sample_rate).exp();
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.state += self.coefficient * (input - self.state);
        self.state
    }

    /// Jump the state to `value` (no glide on the next sample).
    pub fn reset(&mut self, value: f32) {
        self.state = value;
    }

    pub fn state(&self) -> f32 {
        self.state
    }

    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }
}
