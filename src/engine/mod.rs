//! The synthesis engine: touch-driven amplitude modulation, sample by sample.
//!
//! ```text
//!  TouchState ──gate (per block)──► targets ─┬─► OnePole ─► map ─► osc 0 (carrier) ──┐
//!                                            └─► OnePole ─► map ─► osc 1 (modulator) ┤
//!                                                                                    ▼
//!  LevelControl ──dB → gain (per block)──────────────────► carrier × (mod × ½ + ½) × gain × headroom
//!                                                                                    │
//!                                      every output channel ◄──────────────────────┤
//!                                      TelemetrySink        ◄──────────────────────┘
//! ```
//!
//! Everything the audio path touches is allocated in [`SynthEngine::configure`].
//! `process_block` never allocates, locks or panics.

/// Engine configuration and validation.
pub mod config;
/// Presence and intensity indicator outputs.
pub mod indicators;
/// Level (dB) control surfaces.
pub mod level;
/// Per-sample scope telemetry.
pub mod telemetry;

use std::sync::Arc;

use log::info;
use thiserror::Error;

use crate::{
    control::{TouchGate, TouchState},
    dsp::{
        amplify::{amplitude_modulate, db_to_gain},
        OnePole, WavetableOscillator,
    },
};

use self::config::EngineConfig;
pub use self::{
    indicators::{IndicatorSink, SharedIndicators},
    level::{LevelControl, LevelPanel},
    telemetry::{ScopeFrame, TelemetrySink},
};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("sample rate must be positive and finite, got {0}")]
    SampleRate(f32),
    #[error("smoothing cutoff must be positive and finite, got {0} Hz")]
    SmoothingCutoff(f32),
    #[error("control range [{min}, {max}] cannot be mapped from")]
    ControlRange { min: f32, max: f32 },
    #[error("at least one control axis is required")]
    NoAxes,
    #[error("engine has {engine} control axes but the touch state has {touch}")]
    AxisMismatch { engine: usize, touch: usize },
}

/// Smoother and oscillator driven by one touch axis.
#[derive(Debug, Clone)]
pub struct ControlChannel {
    smoother: OnePole,
    oscillator: WavetableOscillator,
}

impl ControlChannel {
    pub fn smoother(&self) -> &OnePole {
        &self.smoother
    }

    pub fn oscillator(&self) -> &WavetableOscillator {
        &self.oscillator
    }
}

/// Touch-controlled AM synth with injected collaborators.
///
/// Axis 0 drives the carrier; every further axis drives a modulator whose
/// unipolar output scales the carrier.
pub struct SynthEngine<L, I, T> {
    config: EngineConfig,
    touch: Arc<TouchState>,
    gate: TouchGate,
    channels: Vec<ControlChannel>,
    intensities: Vec<f32>,
    gain: f32,
    level: L,
    indicators: I,
    telemetry: T,
}

impl<L: LevelControl, I: IndicatorSink, T: TelemetrySink> SynthEngine<L, I, T> {
    /// Validate `config` and allocate everything the audio path needs.
    pub fn configure(
        config: EngineConfig,
        touch: Arc<TouchState>,
        level: L,
        indicators: I,
        telemetry: T,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if touch.axes() != config.axes() {
            return Err(ConfigError::AxisMismatch {
                engine: config.axes(),
                touch: touch.axes(),
            });
        }

        let table = config.table_shape.build(config.table_size);
        let channels = (0..config.axes())
            .map(|_| ControlChannel {
                smoother: OnePole::new(config.smoothing_cutoff_hz, config.sample_rate),
                oscillator: WavetableOscillator::new(config.sample_rate, &table, config.interpolate),
            })
            .collect();

        info!(
            "engine configured: {} Hz, {} axes, {}-point table{}, smoothing {} Hz",
            config.sample_rate,
            config.axes(),
            table.len(),
            if config.interpolate { " (interpolated)" } else { "" },
            config.smoothing_cutoff_hz,
        );

        let gain = db_to_gain(level.level_db());
        Ok(Self {
            gate: TouchGate::new(config.touch_threshold, &config.initial_targets),
            intensities: vec![config.indicator_range.min; config.axes()],
            channels,
            gain,
            config,
            touch,
            level,
            indicators,
            telemetry,
        })
    }

    /// Render one block of interleaved audio with `channels` channels.
    ///
    /// Touch gating and the level are sampled once for the whole block; every
    /// frame gets the same sample on all channels. A trailing partial frame is
    /// zeroed.
    pub fn process_block(&mut self, out: &mut [f32], channels: usize) {
        if channels == 0 {
            return;
        }

        self.begin_block();

        let mut frames = out.chunks_exact_mut(channels);
        for frame in &mut frames {
            let sample = self.next_sample();
            frame.fill(sample);
        }
        frames.into_remainder().fill(0.0);

        self.end_block();
    }

    /// Render one mono sample using the gate and gain from the last block.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let control = self.config.control_range;

        for (axis, channel) in self.channels.iter_mut().enumerate() {
            let smoothed = channel.smoother.process(self.gate.target(axis));
            channel
                .oscillator
                .set_frequency(control.map_to(smoothed, self.config.frequency_range));
            self.intensities[axis] = control.map_to(smoothed, self.config.indicator_range);
        }

        let mut voices = self.channels.iter_mut().map(|ch| ch.oscillator.process());
        let carrier = voices.next().unwrap_or(0.0);
        let modulated = voices.fold(carrier, amplitude_modulate);

        let output = modulated * self.gain * self.config.headroom;

        let gate = &self.gate;
        self.telemetry.log(ScopeFrame {
            output,
            controls: std::array::from_fn(|axis| gate.target(axis)),
        });

        output
    }

    /// Switch the indicators off and hand the collaborators back.
    pub fn shutdown(mut self) -> (L, I, T) {
        self.indicators.set_presence(false);
        for axis in 0..self.channels.len() {
            self.indicators
                .set_intensity(axis, self.config.indicator_range.min);
        }
        info!("engine shut down");
        (self.level, self.indicators, self.telemetry)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn channels(&self) -> &[ControlChannel] {
        &self.channels
    }

    /// Held control targets after the last gate.
    pub fn targets(&self) -> &[f32] {
        self.gate.targets()
    }

    pub fn is_touch_present(&self) -> bool {
        self.gate.is_present()
    }

    /// Linear gain sampled at the start of the last block.
    pub fn gain(&self) -> f32 {
        self.gain
    }

    fn begin_block(&mut self) {
        let present = self.gate.update(&self.touch);
        self.indicators.set_presence(present);
        self.gain = db_to_gain(self.level.level_db());
    }

    fn end_block(&mut self) {
        for (axis, &intensity) in self.intensities.iter().enumerate() {
            self.indicators.set_intensity(axis, intensity);
        }
    }
}
