//! TouchAm - wires the engine to cpal, the pointer sensor and the UI

use std::sync::Arc;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{error, info};
use rtrb::{Consumer, RingBuffer};

use touch_am::{
    control::{PollerConfig, SensorPoller},
    engine::{LevelPanel, ScopeFrame, SharedIndicators},
    EngineConfig, SynthEngine, TouchState, CONTROL_AXES,
};

use super::sensor::{PointerSensor, PointerState};

/// Capacity of the audio → UI scope ring (~170 ms at 48 kHz)
const SCOPE_RING_LEN: usize = 8192;

/// Running synth: audio stream, sensor poller and the shared control surfaces
pub struct TouchAm {
    stream: cpal::Stream,
    poller: SensorPoller,
    pointer: Arc<PointerState>,
    level: Arc<LevelPanel>,
    indicators: Arc<SharedIndicators>,
    config: EngineConfig,
    channels: usize,
}

impl TouchAm {
    /// Open the default output device and start playing
    ///
    /// Returns the scope reader alongside, since it must move to the UI thread.
    pub fn start(
        engine_config: EngineConfig,
        poller_config: PollerConfig,
    ) -> EyreResult<(Self, Consumer<ScopeFrame>)> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let supported = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;
        if supported.sample_format() != cpal::SampleFormat::F32 {
            return Err(eyre!(
                "touch-am requires f32 output, device offers {:?}",
                supported.sample_format()
            ));
        }

        let sample_rate = supported.sample_rate().0 as f32;
        let channels = supported.channels() as usize;
        info!(
            "output device {:?}: {} Hz, {} channels",
            device.name().unwrap_or_default(),
            sample_rate,
            channels
        );

        // Sensor first: failing to initialise it aborts startup
        let touch = Arc::new(TouchState::new(CONTROL_AXES));
        let pointer = Arc::new(PointerState::default());
        let poller = SensorPoller::spawn(
            PointerSensor::new(pointer.clone()),
            touch.clone(),
            poller_config,
        )
        .wrap_err("failed to start touch sensor")?;

        let level = Arc::new(LevelPanel::default());
        let indicators = Arc::new(SharedIndicators::new(CONTROL_AXES));
        let (scope_tx, scope_rx) = RingBuffer::<ScopeFrame>::new(SCOPE_RING_LEN);

        let config = engine_config.with_sample_rate(sample_rate);
        let mut engine = SynthEngine::configure(
            config.clone(),
            touch,
            level.clone(),
            indicators.clone(),
            scope_tx,
        )
        .wrap_err("invalid engine configuration")?;

        let stream = device
            .build_output_stream(
                &supported.into(),
                move |data: &mut [f32], _| engine.process_block(data, channels),
                move |err| error!("audio stream error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;
        stream.play().wrap_err("failed to start output stream")?;

        Ok((
            Self {
                stream,
                poller,
                pointer,
                level,
                indicators,
                config,
                channels,
            },
            scope_rx,
        ))
    }

    pub fn pointer(&self) -> Arc<PointerState> {
        self.pointer.clone()
    }

    pub fn level(&self) -> Arc<LevelPanel> {
        self.level.clone()
    }

    pub fn indicators(&self) -> Arc<SharedIndicators> {
        self.indicators.clone()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Stop audio, then the sensor poller
    pub fn stop(self) {
        if let Err(err) = self.stream.pause() {
            error!("failed to pause output stream: {err}");
        }
        drop(self.stream);
        self.poller.shutdown();
        info!("touch-am stopped");
    }
}
