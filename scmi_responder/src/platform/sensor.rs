// scmi_responder/src/platform/sensor.rs
//! Sensors.

use crate::config::{AxisConfig, SensorConfig, SensorSettings};
use crate::types::UpdateInterval;

/// Trip point armed by SENSOR_TRIP_POINT_CONFIG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripPoint {
    /// Event control: 1 positive, 2 negative, 3 both crossing directions.
    pub event: u8,
    /// Threshold in the sensor's unit.
    pub value: i64,
}

/// Mutable part of a sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorState {
    /// Sensor enabled.
    pub enabled: bool,
    /// Timestamps reported with readings.
    pub timestamp_reporting: bool,
    /// Active update interval.
    pub interval: UpdateInterval,
    /// Continuous update notifications enabled.
    pub continuous_notify: bool,
    /// Trip point notifications enabled.
    pub trip_notify: bool,
    /// One slot per supported trip point; `None` when disabled.
    pub trip_points: Vec<Option<TripPoint>>,
}

impl SensorState {
    fn initial(config: &SensorConfig) -> Self {
        let SensorSettings {
            enabled,
            timestamp_reporting,
            interval,
        } = config.defaults;
        Self {
            enabled,
            timestamp_reporting,
            interval,
            continuous_notify: false,
            trip_notify: false,
            trip_points: vec![None; usize::from(config.trip_points)],
        }
    }
}

/// One sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sensor {
    config: SensorConfig,
    /// Current state.
    pub state: SensorState,
}

impl Sensor {
    /// Sensor in its configured default state, trip points disarmed.
    pub fn new(config: SensorConfig) -> Self {
        let state = SensorState::initial(&config);
        Self { config, state }
    }

    /// Static description.
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Number of axes.
    pub fn num_axes(&self) -> usize {
        self.config.axes.len()
    }

    /// True for a multi-axis sensor.
    pub fn axis_support(&self) -> bool {
        !self.config.axes.is_empty()
    }

    /// Axis `index`.
    pub fn axis(&self, index: usize) -> Option<&AxisConfig> {
        self.config.axes.get(index)
    }

    /// Asynchronous reads supported.
    pub fn async_read(&self) -> bool {
        self.config.async_read
    }

    /// Continuous update notifications supported.
    pub fn continuous_notify_support(&self) -> bool {
        self.config.continuous_notify
    }

    /// Timestamped readings supported.
    pub fn timestamp_support(&self) -> bool {
        self.config.timestamp_exponent.is_some()
    }

    /// Trip points supported.
    pub fn trip_point_count(&self) -> usize {
        usize::from(self.config.trip_points)
    }
}
