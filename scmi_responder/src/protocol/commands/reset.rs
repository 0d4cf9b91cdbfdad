// scmi_responder/src/protocol/commands/reset.rs
//! Reset domain management protocol handlers.

use super::base;
use crate::constants::{
    PROTOCOL_ATTRIBUTES_MSG_ID, PROTOCOL_MESSAGE_ATTRIBUTES_MSG_ID, PROTOCOL_VERSION_MSG_ID,
    RESET_LATENCY_UNKNOWN, RESET_PROTOCOL_VERSION,
};
use crate::platform::{Platform, ResetDomain};
use crate::protocol::layout::FieldSpec;
use crate::protocol::layout::reset::*;
use crate::protocol::status::{Checks, Fault, Handled, Status, resolve};
use crate::protocol::words::{Params, Returns};

/// Reset domain protocol messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetCommand {
    /// PROTOCOL_VERSION
    Version,
    /// PROTOCOL_ATTRIBUTES
    Attributes,
    /// PROTOCOL_MESSAGE_ATTRIBUTES
    MessageAttributes,
    /// RESET_DOMAIN_ATTRIBUTES
    DomainAttributes,
    /// RESET
    Reset,
    /// RESET_NOTIFY
    Notify,
}

impl ResetCommand {
    /// Every message, in message id order.
    pub const ALL: [Self; 6] = [
        Self::Version,
        Self::Attributes,
        Self::MessageAttributes,
        Self::DomainAttributes,
        Self::Reset,
        Self::Notify,
    ];

    /// Wire message id.
    pub fn message_id(self) -> u32 {
        match self {
            Self::Version => PROTOCOL_VERSION_MSG_ID,
            Self::Attributes => PROTOCOL_ATTRIBUTES_MSG_ID,
            Self::MessageAttributes => PROTOCOL_MESSAGE_ATTRIBUTES_MSG_ID,
            Self::DomainAttributes => DOMAIN_ATTRIBUTES,
            Self::Reset => RESET,
            Self::Notify => NOTIFY,
        }
    }

    /// Message with wire id `id`.
    pub fn from_message_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.message_id() == id)
    }

    /// Run the handler against `platform`.
    pub fn handle(self, platform: &mut Platform, p: Params<'_>) -> Handled {
        match self {
            Self::Version => base::version(RESET_PROTOCOL_VERSION),
            Self::Attributes => {
                let mut r = Returns::with_capacity(1);
                r.set_usize(ATTR_NUM_DOMAINS, platform.reset_domains.count())?;
                Ok(r)
            }
            Self::MessageAttributes => {
                base::message_attributes(p, |id| Self::from_message_id(id).is_some())
            }
            Self::DomainAttributes => domain_attributes(platform, p),
            Self::Reset => reset(platform, p),
            Self::Notify => notify(platform, p),
        }
    }
}

fn domain_mut<'a>(
    platform: &'a mut Platform,
    p: Params<'_>,
    field: FieldSpec,
) -> Result<(usize, &'a mut ResetDomain), Fault> {
    let id = resolve(p.id(field), platform.reset_domains.count(), field.name)?;
    let domain = platform
        .reset_domains
        .descriptor_mut(id)
        .ok_or(Status::NotFound)?;
    Ok((id, domain))
}

fn domain_attributes(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (_, domain) = domain_mut(platform, p, DA_DOMAIN_ID)?;
    let c = domain.config();
    let mut r = Returns::with_capacity(6);
    r.set_flag(DA_ASYNC, c.async_support)?;
    r.set_flag(DA_NOTIFY, c.notify_support)?;
    r.set(DA_LATENCY, c.latency_us.unwrap_or(RESET_LATENCY_UNKNOWN))?;
    r.set_name(DA_NAME, &c.name)?;
    Ok(r)
}

/// Autonomous resets complete immediately and leave the domain released.
/// Otherwise the explicit flag asserts or releases the reset signal.
fn reset(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (id, domain) = domain_mut(platform, p, RS_DOMAIN_ID)?;
    let is_async = p.flag(RS_ASYNC);
    Checks::new()
        .capability(!is_async || domain.config().async_support, "async_reset")
        .structure(p.is_clear(RS_FLAGS_RESERVED), "reset_flags_reserved")
        .structure(
            p.flag(RS_STATE_IMPL) || p.get(RS_STATE_ID) == 0,
            "reset_state_id",
        )
        .finish()?;
    domain.state.asserted = !p.flag(RS_AUTONOMOUS) && p.flag(RS_EXPLICIT);
    log::info!(
        "reset domain {}: {} (state {:#x})",
        id,
        if domain.state.asserted { "asserted" } else { "released" },
        p.get(RS_STATE_ID)
    );
    Ok(Returns::new())
}

fn notify(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (id, domain) = domain_mut(platform, p, RN_DOMAIN_ID)?;
    Checks::new()
        .capability(domain.config().notify_support, "notify_support")
        .structure(p.is_clear(RN_RESERVED), "notify_enable_reserved")
        .finish()?;
    domain.state.notify = p.flag(RN_ENABLE);
    log::info!("reset domain {}: notifications {}", id, domain.state.notify);
    Ok(Returns::new())
}
