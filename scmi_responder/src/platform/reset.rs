// scmi_responder/src/platform/reset.rs
//! Reset domains.

use crate::config::ResetDomainConfig;

/// Mutable part of a reset domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResetState {
    /// Reset signal held by an explicit assert.
    pub asserted: bool,
    /// Reset notifications enabled.
    pub notify: bool,
}

/// One reset domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetDomain {
    config: ResetDomainConfig,
    /// Current state.
    pub state: ResetState,
}

impl ResetDomain {
    /// Domain with the reset released and notifications off.
    pub fn new(config: ResetDomainConfig) -> Self {
        Self {
            config,
            state: ResetState::default(),
        }
    }

    /// Static description.
    pub fn config(&self) -> &ResetDomainConfig {
        &self.config
    }
}
