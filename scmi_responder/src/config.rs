// scmi_responder/src/config.rs
//! Static platform configuration.
//!
//! A [`PlatformConfig`] is the ground truth the responder answers from. It
//! is checked once by [`PlatformConfig::validate`] so that no response can
//! overflow a wire field later on.

use crate::constants::{
    AXIS_DESC_WORDS, DEFAULT_RETURN_BUDGET_WORDS, MAX_RETURN_BUDGET_WORDS, READING_WORDS,
    SENSOR_DESC_WORDS,
};
use crate::platform::list::{DiscreteList, IntervalList, LevelList};
use crate::types::{Name, Resolution, UpdateInterval};
use crate::{Error, Result};

/// Largest value of the 16-bit count and remaining fields.
const MAX_COUNT: usize = 0xFFFF;

/// Largest number of axes the 6-bit field can report.
pub const MAX_AXES: usize = 63;

// Architectural voltage modes accepted by VOLTAGE_CONFIG_SET.

/// Domain off.
pub const VOLTAGE_MODE_OFF: u8 = 0x0;
/// Domain on at the current level.
pub const VOLTAGE_MODE_ON: u8 = 0x7;

/// Bit 3 of the voltage config selects implementation-defined modes.
pub const VOLTAGE_MODE_IMPL_DEFINED: u8 = 0x8;

/// Value and timestamp returned by SENSOR_READING_GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Value in the sensor's unit and exponent.
    pub value: i64,
    /// Platform timestamp, zero when timestamps are unsupported.
    pub timestamp: u64,
}

/// One axis of a multi-axis sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisConfig {
    /// Axis name.
    pub name: Name,
    /// Axis type, same encoding as the sensor type.
    pub axis_type: u8,
    /// Power-of-ten exponent of the unit.
    pub unit_exponent: i8,
    /// Resolution reported in the extended attributes.
    pub resolution: Resolution,
    /// Lowest value the axis can report.
    pub min_range: i64,
    /// Highest value the axis can report.
    pub max_range: i64,
    /// Report resolution and range in the descriptor.
    pub extended_attributes: bool,
    /// Fixed reading returned for this axis.
    pub reading: Reading,
}

/// Configuration a sensor starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorSettings {
    /// Sensor enabled.
    pub enabled: bool,
    /// Timestamps reported with readings.
    pub timestamp_reporting: bool,
    /// Update interval; must be a member of the interval list.
    pub interval: UpdateInterval,
}

/// Static description of one sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    /// Sensor name.
    pub name: Name,
    /// Sensor type (unit class).
    pub sensor_type: u8,
    /// Power-of-ten exponent of the unit.
    pub unit_exponent: i8,
    /// Power drawn in microwatts.
    pub power: u32,
    /// Resolution value and exponent.
    pub resolution: Resolution,
    /// Lowest value the sensor can report.
    pub min_range: i64,
    /// Highest value the sensor can report.
    pub max_range: i64,
    /// SENSOR_READING_GET may be asynchronous.
    pub async_read: bool,
    /// Continuous update notifications supported.
    pub continuous_notify: bool,
    /// Report resolution and range in the descriptor.
    pub extended_attributes: bool,
    /// Timestamp exponent when timestamps are supported.
    pub timestamp_exponent: Option<i8>,
    /// Trip points the sensor supports.
    pub trip_points: u8,
    /// Axes; empty for a single-value sensor.
    pub axes: Vec<AxisConfig>,
    /// Supported update intervals.
    pub update_intervals: IntervalList,
    /// Settings the sensor starts with.
    pub defaults: SensorSettings,
    /// Reading of an axis-less sensor.
    pub reading: Reading,
}

/// Static description of one voltage domain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoltageDomainConfig {
    /// Domain name.
    pub name: Name,
    /// Supported levels in microvolts.
    pub levels: LevelList,
    /// Level at start, a member of `levels`.
    pub default_level: i32,
    /// Mode at start.
    pub default_mode: u8,
}

/// Static description of one reset domain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetDomainConfig {
    /// Domain name.
    pub name: Name,
    /// Asynchronous reset supported.
    pub async_support: bool,
    /// Reset notifications supported.
    pub notify_support: bool,
    /// Reset latency in microseconds; `None` when unknown.
    pub latency_us: Option<u32>,
}

/// Sensor protocol wide attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorProtocolConfig {
    /// Maximum outstanding asynchronous readings.
    pub max_pending_async: u8,
    /// Address of the shared statistics region, 0 when absent.
    pub stats_address: u64,
    /// Length of the statistics region in bytes.
    pub stats_len: u32,
}

/// Everything the responder exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlatformConfig {
    /// Return words a single response may carry, flags word included.
    pub return_budget_words: usize,
    /// Sensor protocol attributes.
    pub sensor_protocol: SensorProtocolConfig,
    /// Sensors, identified by position.
    pub sensors: Vec<SensorConfig>,
    /// Voltage domains, identified by position.
    pub voltage_domains: Vec<VoltageDomainConfig>,
    /// Reset domains, identified by position.
    pub reset_domains: Vec<ResetDomainConfig>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            return_budget_words: DEFAULT_RETURN_BUDGET_WORDS,
            sensor_protocol: SensorProtocolConfig::default(),
            sensors: Vec::new(),
            voltage_domains: Vec::new(),
            reset_domains: Vec::new(),
        }
    }
}

fn invalid(msg: String) -> Error {
    log::warn!("rejecting platform configuration: {}", msg);
    Error::InvalidConfig(msg)
}

fn check_exponent(what: &str, exp: i8) -> Result<()> {
    if !(-16..=15).contains(&exp) {
        return Err(invalid(format!("{}: exponent {} outside [-16, 15]", what, exp)));
    }
    Ok(())
}

fn check_interval(what: &str, interval: &UpdateInterval) -> Result<()> {
    interval
        .encode()
        .map(|_| ())
        .map_err(|e| invalid(format!("{}: {}", what, e)))
}

impl PlatformConfig {
    /// Check every constraint a response depends on.
    pub fn validate(&self) -> Result<()> {
        let min_budget = 1 + SENSOR_DESC_WORDS.max(AXIS_DESC_WORDS);
        if !(min_budget..=MAX_RETURN_BUDGET_WORDS).contains(&self.return_budget_words) {
            return Err(invalid(format!(
                "return budget {} outside [{}, {}]",
                self.return_budget_words, min_budget, MAX_RETURN_BUDGET_WORDS
            )));
        }
        for (class, count) in [
            ("sensors", self.sensors.len()),
            ("voltage domains", self.voltage_domains.len()),
            ("reset domains", self.reset_domains.len()),
        ] {
            if count > MAX_COUNT {
                return Err(invalid(format!("{} {} exceeds {}", count, class, MAX_COUNT)));
            }
        }
        for (id, sensor) in self.sensors.iter().enumerate() {
            self.validate_sensor(id, sensor)?;
        }
        for (id, domain) in self.voltage_domains.iter().enumerate() {
            validate_voltage_domain(id, domain)?;
        }
        Ok(())
    }

    fn validate_sensor(&self, id: usize, s: &SensorConfig) -> Result<()> {
        let what = format!("sensor {}", id);
        check_exponent(&what, s.unit_exponent)?;
        if let Some(exp) = s.timestamp_exponent {
            check_exponent(&what, exp)?;
        }
        s.resolution
            .encode()
            .map_err(|e| invalid(format!("{}: {}", what, e)))?;
        if s.min_range > s.max_range {
            return Err(invalid(format!("{}: min range above max range", what)));
        }
        if s.axes.len() > MAX_AXES {
            return Err(invalid(format!(
                "{}: {} axes exceed {}",
                what,
                s.axes.len(),
                MAX_AXES
            )));
        }
        if READING_WORDS * s.axes.len().max(1) > self.return_budget_words {
            return Err(invalid(format!("{}: readings exceed return budget", what)));
        }
        for (a, axis) in s.axes.iter().enumerate() {
            let what = format!("sensor {} axis {}", id, a);
            check_exponent(&what, axis.unit_exponent)?;
            axis.resolution
                .encode()
                .map_err(|e| invalid(format!("{}: {}", what, e)))?;
            if axis.min_range > axis.max_range {
                return Err(invalid(format!("{}: min range above max range", what)));
            }
        }
        match &s.update_intervals {
            DiscreteList::Array(v) => {
                if v.is_empty() || v.len() > MAX_COUNT {
                    return Err(invalid(format!(
                        "{}: {} update intervals",
                        what,
                        v.len()
                    )));
                }
                for i in v {
                    check_interval(&what, i)?;
                }
            }
            DiscreteList::Triplet { low, high, step } => {
                for i in [low, high, step] {
                    check_interval(&what, i)?;
                }
                if low.exponent != high.exponent || low.exponent != step.exponent {
                    return Err(invalid(format!("{}: triplet exponents differ", what)));
                }
                if low.seconds > high.seconds || step.seconds == 0 {
                    return Err(invalid(format!("{}: malformed interval triplet", what)));
                }
            }
        }
        if !s.update_intervals.contains(&s.defaults.interval) {
            return Err(invalid(format!(
                "{}: default interval not in its update interval list",
                what
            )));
        }
        if s.defaults.timestamp_reporting && s.timestamp_exponent.is_none() {
            return Err(invalid(format!(
                "{}: timestamp reporting enabled without timestamp support",
                what
            )));
        }
        Ok(())
    }
}

fn validate_voltage_domain(id: usize, d: &VoltageDomainConfig) -> Result<()> {
    match &d.levels {
        DiscreteList::Array(v) if v.is_empty() || v.len() > MAX_COUNT => {
            return Err(invalid(format!(
                "voltage domain {}: {} levels",
                id,
                v.len()
            )));
        }
        DiscreteList::Triplet { low, high, step } if low > high || *step <= 0 => {
            return Err(invalid(format!(
                "voltage domain {}: malformed level triplet",
                id
            )));
        }
        _ => {}
    }
    if !d.levels.contains(d.default_level) {
        return Err(invalid(format!(
            "voltage domain {}: default level {} not supported",
            id, d.default_level
        )));
    }
    if !voltage_mode_is_valid(u32::from(d.default_mode)) {
        return Err(invalid(format!(
            "voltage domain {}: invalid default mode {:#x}",
            id, d.default_mode
        )));
    }
    Ok(())
}

/// Architectural modes are off and on; implementation-defined modes (bit 3
/// set) are accepted as is.
pub fn voltage_mode_is_valid(config: u32) -> bool {
    let config = config & 0xF;
    config & u32::from(VOLTAGE_MODE_IMPL_DEFINED) != 0
        || config == u32::from(VOLTAGE_MODE_OFF)
        || config == u32::from(VOLTAGE_MODE_ON)
}

fn name(s: &str) -> Result<Name> {
    Name::new(s)
}

impl PlatformConfig {
    /// The reference platform: two sensors, three voltage domains and two
    /// reset domains.
    pub fn reference() -> Result<Self> {
        let ms = |v: u16| UpdateInterval::new(v, -3);
        let axis = |sensor: usize, i: usize, value: i64| -> Result<AxisConfig> {
            Ok(AxisConfig {
                name: name(&format!("SENSOR_{}_AXIS{}", sensor, i))?,
                axis_type: 3,
                unit_exponent: 2,
                resolution: Resolution::new(4, 0),
                min_range: -1000,
                max_range: 1000,
                extended_attributes: true,
                reading: Reading {
                    value,
                    timestamp: 0x1_0000_0000,
                },
            })
        };
        let sensors = vec![
            SensorConfig {
                name: name("SENSOR_0")?,
                sensor_type: 2,
                unit_exponent: 0,
                power: 5,
                resolution: Resolution::new(7, 0),
                min_range: -40,
                max_range: 125,
                async_read: false,
                continuous_notify: false,
                extended_attributes: true,
                timestamp_exponent: Some(-6),
                trip_points: 0,
                axes: vec![axis(0, 0, 12)?, axis(0, 1, -7)?],
                update_intervals: IntervalList::Array(vec![ms(100)]),
                defaults: SensorSettings {
                    enabled: true,
                    timestamp_reporting: true,
                    interval: ms(100),
                },
                reading: Reading::default(),
            },
            SensorConfig {
                name: name("SENSOR_1")?,
                sensor_type: 5,
                unit_exponent: -3,
                power: 6,
                resolution: Resolution::new(8, -1),
                min_range: 0,
                max_range: 5000,
                async_read: true,
                continuous_notify: true,
                extended_attributes: true,
                timestamp_exponent: None,
                trip_points: 2,
                axes: Vec::new(),
                update_intervals: IntervalList::Triplet {
                    low: ms(100),
                    high: ms(1000),
                    step: ms(100),
                },
                defaults: SensorSettings {
                    enabled: false,
                    timestamp_reporting: false,
                    interval: ms(200),
                },
                reading: Reading {
                    value: 3300,
                    timestamp: 0,
                },
            },
        ];
        let voltage_domains = vec![
            VoltageDomainConfig {
                name: name("VOLTAGE_0")?,
                levels: LevelList::Array(vec![800_000, 900_000, 1_000_000]),
                default_level: 900_000,
                default_mode: VOLTAGE_MODE_ON,
            },
            VoltageDomainConfig {
                name: name("VOLTAGE_1")?,
                levels: LevelList::Triplet {
                    low: 600_000,
                    high: 1_200_000,
                    step: 100_000,
                },
                default_level: 600_000,
                default_mode: VOLTAGE_MODE_OFF,
            },
            VoltageDomainConfig {
                name: name("VOLTAGE_2")?,
                levels: LevelList::Array((0..100).map(|i| 500_000 + i * 10_000).collect()),
                default_level: 500_000,
                default_mode: VOLTAGE_MODE_ON,
            },
        ];
        let reset_domains = vec![
            ResetDomainConfig {
                name: name("RESET_0")?,
                async_support: false,
                notify_support: true,
                latency_us: Some(100),
            },
            ResetDomainConfig {
                name: name("RESET_1")?,
                async_support: true,
                notify_support: false,
                latency_us: None,
            },
        ];
        let config = Self {
            return_budget_words: DEFAULT_RETURN_BUDGET_WORDS,
            sensor_protocol: SensorProtocolConfig {
                max_pending_async: 4,
                stats_address: 0x1234,
                stats_len: 0xFF,
            },
            sensors,
            voltage_domains,
            reset_domains,
        };
        config.validate()?;
        Ok(config)
    }
}
