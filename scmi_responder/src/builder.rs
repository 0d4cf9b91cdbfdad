// scmi_responder/src/builder.rs
//! Platform builder.

use crate::Result;
use crate::config::{
    PlatformConfig, ResetDomainConfig, SensorConfig, SensorProtocolConfig, VoltageDomainConfig,
};
use crate::platform::Platform;
use crate::responder::Responder;

/// Fluent construction of a [`PlatformConfig`] and of what is built from it.
///
/// Nothing is checked until one of the `build*` methods runs
/// [`PlatformConfig::validate`].
#[derive(Debug, Clone, Default)]
pub struct PlatformBuilder {
    config: PlatformConfig,
}

impl PlatformBuilder {
    /// Empty platform with the default return budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. [`PlatformConfig::reference`].
    pub fn from_config(config: PlatformConfig) -> Self {
        Self { config }
    }

    /// Words available for one response after the status word.
    pub fn return_budget_words(mut self, words: usize) -> Self {
        self.config.return_budget_words = words;
        self
    }

    /// Sensor protocol attributes.
    pub fn sensor_protocol(mut self, attrs: SensorProtocolConfig) -> Self {
        self.config.sensor_protocol = attrs;
        self
    }

    /// Append a sensor; its identifier is its position.
    pub fn sensor(mut self, sensor: SensorConfig) -> Self {
        self.config.sensors.push(sensor);
        self
    }

    /// Append a voltage domain.
    pub fn voltage_domain(mut self, domain: VoltageDomainConfig) -> Self {
        self.config.voltage_domains.push(domain);
        self
    }

    /// Append a reset domain.
    pub fn reset_domain(mut self, domain: ResetDomainConfig) -> Self {
        self.config.reset_domains.push(domain);
        self
    }

    /// Validated configuration.
    pub fn build_config(self) -> Result<PlatformConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Validate and build the state store.
    pub fn build(self) -> Result<Platform> {
        Platform::from_config(self.config)
    }

    /// Validate and build a responder over the platform.
    pub fn build_responder(self) -> Result<Responder> {
        Responder::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::platform::DiscreteList;
    use crate::types::Name;

    fn reset(name: &str) -> ResetDomainConfig {
        ResetDomainConfig {
            name: Name::new(name).unwrap(),
            async_support: false,
            notify_support: true,
            latency_us: Some(10),
        }
    }

    #[test]
    fn empty_platform_builds() {
        let platform = PlatformBuilder::new().build().unwrap();
        assert_eq!(platform.sensors.count(), 0);
        assert_eq!(platform.reset_domains.count(), 0);
    }

    #[test]
    fn domains_keep_insertion_order() {
        let platform = PlatformBuilder::new()
            .reset_domain(reset("A"))
            .reset_domain(reset("B"))
            .build()
            .unwrap();
        assert_eq!(platform.reset_domains.descriptor(1).unwrap().config().name.as_str(), "B");
    }

    #[test]
    fn validation_runs_on_build() {
        let bad = VoltageDomainConfig {
            name: Name::new("V").unwrap(),
            levels: DiscreteList::Array(vec![1, 2]),
            default_level: 3,
            default_mode: 0,
        };
        let err = PlatformBuilder::new().voltage_domain(bad).build_config().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        let err = PlatformBuilder::new().return_budget_words(4).build().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn extend_reference() {
        let responder = PlatformBuilder::from_config(PlatformConfig::reference().unwrap())
            .reset_domain(reset("RESET_2"))
            .build_responder()
            .unwrap();
        assert_eq!(responder.platform().reset_domains.count(), 3);
    }
}
