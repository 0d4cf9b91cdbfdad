// scmi_responder/src/platform/mod.rs
//! Domain state store.
//!
//! Holds the descriptors of every sensor, voltage domain and reset domain
//! plus the few fields set commands may change. Built once from a validated
//! [`PlatformConfig`]; each responder owns its own store.

pub mod list;
pub mod reset;
pub mod sensor;
pub mod table;
pub mod voltage;

pub use list::{DiscreteList, IntervalList, LevelList, Rounding};
pub use reset::{ResetDomain, ResetState};
pub use sensor::{Sensor, SensorState, TripPoint};
pub use table::ResourceTable;
pub use voltage::{VoltageDomain, VoltageState};

use crate::Result;
use crate::config::{PlatformConfig, SensorProtocolConfig};

/// Resources exposed by the responder and their current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    return_budget_words: usize,
    sensor_protocol: SensorProtocolConfig,
    /// Sensors.
    pub sensors: ResourceTable<Sensor>,
    /// Voltage domains.
    pub voltage_domains: ResourceTable<VoltageDomain>,
    /// Reset domains.
    pub reset_domains: ResourceTable<ResetDomain>,
}

impl Platform {
    /// Validate `config` and build the store with every mutable field at its
    /// documented default.
    pub fn from_config(config: PlatformConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "platform: {} sensors, {} voltage domains, {} reset domains, budget {} words",
            config.sensors.len(),
            config.voltage_domains.len(),
            config.reset_domains.len(),
            config.return_budget_words
        );
        Ok(Self {
            return_budget_words: config.return_budget_words,
            sensor_protocol: config.sensor_protocol,
            sensors: config.sensors.into_iter().map(Sensor::new).collect(),
            voltage_domains: config
                .voltage_domains
                .into_iter()
                .map(VoltageDomain::new)
                .collect(),
            reset_domains: config.reset_domains.into_iter().map(ResetDomain::new).collect(),
        })
    }

    /// Return words one response may carry.
    pub fn return_budget_words(&self) -> usize {
        self.return_budget_words
    }

    /// Sensor protocol attributes.
    pub fn sensor_protocol(&self) -> &SensorProtocolConfig {
        &self.sensor_protocol
    }
}
