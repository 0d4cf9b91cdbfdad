// scmi_responder/src/platform/voltage.rs
//! Voltage domains.

use crate::config::VoltageDomainConfig;

/// Mutable part of a voltage domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoltageState {
    /// Active level in microvolts.
    pub level: i32,
    /// Operating mode as reported by VOLTAGE_CONFIG_GET.
    pub mode: u8,
}

/// One voltage domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoltageDomain {
    config: VoltageDomainConfig,
    /// Current level and mode.
    pub state: VoltageState,
}

impl VoltageDomain {
    /// Domain at its configured default level and mode.
    pub fn new(config: VoltageDomainConfig) -> Self {
        let state = VoltageState {
            level: config.default_level,
            mode: config.default_mode,
        };
        Self { config, state }
    }

    /// Static description.
    pub fn config(&self) -> &VoltageDomainConfig {
        &self.config
    }
}
