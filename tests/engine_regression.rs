use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use touch_am::{
    control::{PollerConfig, SensorError, SensorPoller, TouchSensor},
    engine::{LevelPanel, SharedIndicators},
    EngineConfig, SynthEngine, TouchState, CONTROL_AXES,
};

fn engine_with_panels(
    config: EngineConfig,
) -> (
    SynthEngine<Arc<LevelPanel>, Arc<SharedIndicators>, ()>,
    Arc<TouchState>,
    Arc<LevelPanel>,
    Arc<SharedIndicators>,
) {
    let touch = Arc::new(TouchState::new(CONTROL_AXES));
    let level = Arc::new(LevelPanel::default());
    let indicators = Arc::new(SharedIndicators::new(CONTROL_AXES));
    let engine = SynthEngine::configure(config, touch.clone(), level.clone(), indicators.clone(), ())
        .expect("valid config");
    (engine, touch, level, indicators)
}

#[test]
fn default_engine_renders_bounded_audio() {
    let (mut engine, _touch, level, _indicators) = engine_with_panels(EngineConfig::default());
    let mut out = vec![0.0f32; 2 * 4800];
    engine.process_block(&mut out, 2);

    let ceiling = 0.5 * 10f32.powf(level.db() / 20.0) + 1e-6;
    assert!(out.iter().any(|s| s.abs() > 1e-3), "engine produced silence");
    assert!(out.iter().all(|s| s.is_finite() && s.abs() <= ceiling));
    for frame in out.chunks_exact(2) {
        assert_eq!(frame[0], frame[1]);
    }
}

#[test]
fn touch_sequence_latches_last_location() {
    let (mut engine, touch, _level, indicators) = engine_with_panels(EngineConfig::default());
    let mut out = vec![0.0f32; 256];

    engine.process_block(&mut out, 1);
    assert!(!indicators.presence());
    assert_eq!(engine.targets(), &[0.5, 0.5]);

    touch.publish(0.4, &[0.9, 0.1]);
    engine.process_block(&mut out, 1);
    assert!(indicators.presence());
    assert_eq!(engine.targets(), &[0.9, 0.1]);

    // Lift-off keeps the last position
    touch.publish(0.0, &[0.2, 0.7]);
    engine.process_block(&mut out, 1);
    assert!(!indicators.presence());
    assert_eq!(engine.targets(), &[0.9, 0.1]);

    // A touch exactly at the threshold does not count
    touch.publish(0.05, &[0.3, 0.3]);
    engine.process_block(&mut out, 1);
    assert_eq!(engine.targets(), &[0.9, 0.1]);
}

#[test]
fn smoothed_controls_glide_towards_targets() {
    let (mut engine, touch, _level, indicators) = engine_with_panels(EngineConfig::default());
    touch.publish(1.0, &[1.0, 0.0]);

    // One second of audio is ample for an 18 Hz smoother to settle
    let mut out = vec![0.0f32; 48_000];
    engine.process_block(&mut out, 1);

    let carrier = engine.channels()[0].oscillator().frequency();
    let modulator = engine.channels()[1].oscillator().frequency();
    assert!((carrier - 880.0).abs() < 0.5, "carrier at {carrier}");
    assert!((modulator - 55.0).abs() < 0.5, "modulator at {modulator}");
    assert!((indicators.intensity(0) - 1.0).abs() < 1e-3);
    assert!((indicators.intensity(1) - 0.3).abs() < 1e-3);
}

#[test]
fn level_changes_apply_on_next_block() {
    let (mut engine, _touch, level, _indicators) = engine_with_panels(EngineConfig::default());
    let mut out = vec![0.0f32; 64];

    engine.process_block(&mut out, 1);
    assert!((engine.gain() - 0.501_187).abs() < 1e-4);

    level.set_db(0.0);
    engine.process_block(&mut out, 1);
    assert_eq!(engine.gain(), 1.0);

    // Clamped to the slider range
    level.set_db(-90.0);
    engine.process_block(&mut out, 1);
    assert!((engine.gain() - 0.001).abs() < 1e-6);
}

#[test]
fn shutdown_switches_indicators_off() {
    let (mut engine, touch, _level, indicators) = engine_with_panels(EngineConfig::default());
    touch.publish(0.5, &[1.0, 1.0]);
    let mut out = vec![0.0f32; 4800];
    engine.process_block(&mut out, 1);
    assert!(indicators.presence());

    drop(engine.shutdown());
    assert!(!indicators.presence());
    assert_eq!(indicators.intensity(0), 0.3);
    assert_eq!(indicators.intensity(1), 0.3);
}

#[cfg(feature = "rtrb")]
#[test]
fn telemetry_ring_carries_every_sample() {
    use rtrb::RingBuffer;
    use touch_am::engine::ScopeFrame;

    let touch = Arc::new(TouchState::new(CONTROL_AXES));
    let (tx, mut rx) = RingBuffer::<ScopeFrame>::new(64);
    let mut engine =
        SynthEngine::configure(EngineConfig::default(), touch, -6.0f32, (), tx).expect("valid config");

    let mut out = vec![0.0f32; 32];
    engine.process_block(&mut out, 2);

    let frames: Vec<ScopeFrame> = std::iter::from_fn(|| rx.pop().ok()).collect();
    assert_eq!(frames.len(), 16);
    for (frame, rendered) in frames.iter().zip(out.chunks_exact(2)) {
        assert_eq!(frame.output, rendered[0]);
        assert_eq!(frame.controls, [0.5, 0.5]);
    }
}

/// Sensor reporting a fixed touch.
struct StillFinger {
    size: f32,
    x: f32,
    y: f32,
}

impl TouchSensor for StillFinger {
    fn scan(&mut self) -> Result<(), SensorError> {
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

#[test]
fn poller_feeds_engine_targets() {
    let (mut engine, touch, _level, indicators) = engine_with_panels(EngineConfig::default());
    let poller = SensorPoller::spawn(
        StillFinger {
            size: 0.4,
            x: 0.25,
            y: 0.75,
        },
        touch.clone(),
        PollerConfig::default().with_interval(Duration::from_millis(1)),
    )
    .expect("poller starts");

    let deadline = Instant::now() + Duration::from_secs(5);
    while touch.touch_size() == 0.0 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(1));
    }
    poller.shutdown();

    let mut out = vec![0.0f32; 128];
    engine.process_block(&mut out, 1);

    assert!(indicators.presence());
    // Vertical axis is read upside down
    assert_eq!(engine.targets(), &[0.25, 0.25]);
}
