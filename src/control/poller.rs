use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{debug, error, info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TouchState;

/// Default time between sensor scans (~83 Hz).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(12);

#[derive(Debug, Error)]
pub enum SensorError {
    #[error("touch sensor not found: {0}")]
    NotFound(String),
    #[error("touch sensor initialisation failed: {0}")]
    Init(String),
    #[error("touch sensor read failed: {0}")]
    Read(String),
    #[error("failed to spawn sensor poller thread")]
    Spawn(#[source] std::io::Error),
}

/// A two-axis touch surface driver.
///
/// `scan` performs one read of the hardware; the getters then report the
/// values from the most recent successful scan.
pub trait TouchSensor: Send {
    /// One-time setup, called before the poller thread starts.
    fn init(&mut self) -> Result<(), SensorError> {
        Ok(())
    }

    fn scan(&mut self) -> Result<(), SensorError>;

    /// Size (pressure/area) of the current touch, 0 when nothing touches.
    fn touch_size(&self) -> f32;

    /// Horizontal location, sensor-native units (nominally 0..1).
    fn location_x(&self) -> f32;

    /// Vertical location, sensor-native units (nominally 0..1).
    fn location_y(&self) -> f32;
}

/// Which sensor coordinate feeds a control axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSource {
    Horizontal,
    Vertical,
}

/// Orientation of one control axis relative to the sensor.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMap {
    pub source: AxisSource,
    /// Read as `1 - location` (sensor mounted upside down on this axis).
    pub invert: bool,
}

impl AxisMap {
    pub const fn new(source: AxisSource, invert: bool) -> Self {
        Self { source, invert }
    }

    pub fn read<S: TouchSensor + ?Sized>(&self, sensor: &S) -> f32 {
        let raw = match self.source {
            AxisSource::Horizontal => sensor.location_x(),
            AxisSource::Vertical => sensor.location_y(),
        };
        if self.invert {
            1.0 - raw
        } else {
            raw
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PollerConfig {
    pub interval: Duration,
    /// One entry per control axis, in axis order.
    pub axes: Vec<AxisMap>,
}

impl PollerConfig {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_axes(mut self, axes: Vec<AxisMap>) -> Self {
        self.axes = axes;
        self
    }
}

impl Default for PollerConfig {
    /// Axis 0 is the inverted vertical location, axis 1 the horizontal one.
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            axes: vec![
                AxisMap::new(AxisSource::Vertical, true),
                AxisMap::new(AxisSource::Horizontal, false),
            ],
        }
    }
}

/// Handle to the background thread that polls a [`TouchSensor`].
///
/// The thread checks a stop flag once per iteration; [`SensorPoller::shutdown`]
/// (or dropping the handle) raises it and joins.
pub struct SensorPoller {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SensorPoller {
    /// Initialise `sensor` and start polling it into `touch`.
    ///
    /// Initialisation failure is returned before any thread is started.
    pub fn spawn<S: TouchSensor + 'static>(
        mut sensor: S,
        touch: Arc<TouchState>,
        config: PollerConfig,
    ) -> Result<Self, SensorError> {
        sensor.init()?;

        let stop = Arc::new(AtomicBool::new(false));
        let handle = thread::Builder::new()
            .name("touch-poller".into())
            .spawn({
                let stop = stop.clone();
                move || poll_loop(sensor, &touch, &config, &stop)
            })
            .map_err(SensorError::Spawn)?;

        info!("touch sensor poller started");
        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop polling and wait for the thread to exit.
    pub fn shutdown(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("touch sensor poller panicked");
            } else {
                info!("touch sensor poller stopped");
            }
        }
    }
}

impl Drop for SensorPoller {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

fn poll_loop<S: TouchSensor>(
    mut sensor: S,
    touch: &TouchState,
    config: &PollerConfig,
    stop: &AtomicBool,
) {
    let mut location = vec![0.0f32; config.axes.len()];
    let mut failing = false;

    while !stop.load(Ordering::Relaxed) {
        match sensor.scan() {
            Ok(()) => {
                if failing {
                    info!("touch sensor reads recovered");
                    failing = false;
                }
                for (slot, axis) in location.iter_mut().zip(&config.axes) {
                    *slot = axis.read(&sensor);
                }
                touch.publish(sensor.touch_size(), &location);
            }
            Err(err) => {
                // Keep the last published reading; report once per failure streak
                if !failing {
                    warn!("{err}; holding last touch reading");
                    failing = true;
                }
            }
        }
        thread::sleep(config.interval);
    }

    debug!("touch sensor poll loop exiting");
}
