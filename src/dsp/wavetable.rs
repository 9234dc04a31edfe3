use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Wavetable Oscillator
====================

A wavetable oscillator plays back one period of a waveform that was computed
ahead of time. Instead of evaluating sin() (or any other shape) per sample, we
keep a table of N samples and step through it at a speed proportional to the
frequency we want to hear.

Vocabulary
----------

  table         One cycle of the waveform, N samples long. Fixed once the
                oscillator is configured.

  read pointer  A fractional index into the table: the phase accumulator.
                Kept in [0, N) whenever the table is not empty.

  increment     How far the read pointer moves per output sample:

                    increment = N × frequency / sample_rate

                At 48 kHz with a 1024-point table, 440 Hz moves ~9.39 slots
                per sample.

  wraparound    When the read pointer passes the end of the table we subtract
                N, which is the same as starting the next period.

  interpolation Reading "between" two slots. Without it we truncate the read
                pointer and return the slot below (cheap, a bit grainy).
                With it we blend the slot below and the slot above.


Advance, Then Read
------------------

Each call first advances the read pointer and then reads the table:

    read_pointer += increment
    wrap into [0, N)
    sample = table[read_pointer]

So the very first sample after configuration is read at `increment`, not at
slot 0. With table [0, 1, 0, -1], N = 4, sample rate 4 Hz and frequency 1 Hz
(increment 1) the output is 1, 0, -1, 0, 1, ...


Linear Interpolation
--------------------

For a read pointer i + t (integer part i, fraction t in [0, 1)):

    i0 = i
    i1 = (i + 1) mod N        ← the last slot blends back into slot 0
    out = (1 - t) × table[i0] + t × table[i1]

At an exact integer position t = 0 and the raw table value comes back
unchanged.

    table:   0 ─── 1 ─── 2 ─── 3 ─┐
    pointer:       1.5            │
    out:           1.5            └── 3.5 blends table[3] and table[0]


Out-of-Range Frequencies
------------------------

Frequency is never clamped. Increments larger than N (frequency above the
sample rate) fold back with a single remainder. Negative frequencies move the
pointer backwards and are wrapped upward into [0, N), so the table plays in
reverse. A non-finite pointer (infinite or NaN frequency) is reset to 0 so the
audio path can neither spin nor index outside the table.
*/

/// Shape used to fill a wavetable at configuration time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum TableShape {
    Sine,
    Triangle,
    Sawtooth,
    Square,
    /// Caller-supplied samples, used as-is regardless of the requested length.
    Custom(Vec<f32>),
}

impl TableShape {
    /// Compute one period of this shape with `len` points.
    ///
    /// Allocates; call during configuration, never from the audio callback.
    pub fn build(&self, len: usize) -> Vec<f32> {
        let phase = |i: usize| i as f32 / len as f32;

        match self {
            TableShape::Sine => (0..len).map(|i| (TAU * phase(i)).sin()).collect(),
            TableShape::Triangle => (0..len)
                .map(|i| {
                    let p = phase(i);
                    if p < 0.25 {
                        4.0 * p
                    } else if p < 0.75 {
                        2.0 - 4.0 * p
                    } else {
                        4.0 * p - 4.0
                    }
                })
                .collect(),
            TableShape::Sawtooth => (0..len).map(|i| 2.0 * phase(i) - 1.0).collect(),
            TableShape::Square => (0..len)
                .map(|i| if phase(i) < 0.5 { 1.0 } else { -1.0 })
                .collect(),
            TableShape::Custom(samples) => samples.clone(),
        }
    }
}

impl Default for TableShape {
    fn default() -> Self {
        TableShape::Sine
    }
}

#[derive(Debug, Clone)]
pub struct WavetableOscillator {
    table: Vec<f32>,
    inverse_sample_rate: f32,
    frequency: f32,
    read_pointer: f32,
    interpolate: bool,
}

impl WavetableOscillator {
    pub fn new(sample_rate: f32, table: &[f32], interpolate: bool) -> Self {
        let mut osc = Self {
            table: Vec::with_capacity(table.len()),
            inverse_sample_rate: 0.0,
            frequency: 0.0,
            read_pointer: 0.0,
            interpolate,
        };
        osc.configure(sample_rate, table, interpolate);
        osc
    }

    /// (Re)configure the oscillator: copies `table` and rewinds the phase.
    ///
    /// `sample_rate` must be positive; this is not checked here. The table may
    /// be empty, in which case the oscillator outputs silence.
    pub fn configure(&mut self, sample_rate: f32, table: &[f32], interpolate: bool) {
        self.inverse_sample_rate = 1.0 / sample_rate;
        self.table.clear();
        self.table.extend_from_slice(table);
        self.interpolate = interpolate;
        self.read_pointer = 0.0;
    }

    /// Set the playback frequency in Hz. Any value is accepted.
    #[inline]
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn read_pointer(&self) -> f32 {
        self.read_pointer
    }

    pub fn interpolates(&self) -> bool {
        self.interpolate
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Rewind the phase to the start of the table.
    pub fn reset(&mut self) {
        self.read_pointer = 0.0;
    }

    /// Advance one sample and return it.
    #[inline]
    pub fn process(&mut self) -> f32 {
        let len = self.table.len();
        if len == 0 {
            return 0.0;
        }
        let size = len as f32;

        self.read_pointer += size * self.frequency * self.inverse_sample_rate;
        self.wrap(size);

        // read_pointer is in [0, size) here, so truncation is floor
        let index_below = (self.read_pointer as usize).min(len - 1);
        if !self.interpolate {
            return self.table[index_below];
        }

        let index_above = if index_below + 1 >= len {
            0
        } else {
            index_below + 1
        };
        let fract_above = self.read_pointer - index_below as f32;
        let fract_below = 1.0 - fract_above;

        fract_below * self.table[index_below] + fract_above * self.table[index_above]
    }

    /// Fill `buffer` with consecutive samples.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process();
        }
    }

    #[inline]
    fn wrap(&mut self, size: f32) {
        if !self.read_pointer.is_finite() {
            self.read_pointer = 0.0;
        } else if self.read_pointer >= size {
            self.read_pointer -= size;
            if self.read_pointer >= size {
                self.read_pointer %= size;
            }
        } else if self.read_pointer < 0.0 {
            self.read_pointer = self.read_pointer % size + size;
            // -0.0 % size + size rounds to size
            if self.read_pointer >= size {
                self.read_pointer = 0.0;
            }
        }
    }
}
