// scmi_responder/src/protocol/commands/voltage.rs
//! Voltage domain management protocol handlers.

use super::base;
use crate::config::voltage_mode_is_valid;
use crate::constants::{
    PROTOCOL_ATTRIBUTES_MSG_ID, PROTOCOL_MESSAGE_ATTRIBUTES_MSG_ID, PROTOCOL_VERSION_MSG_ID,
    VOLTAGE_PROTOCOL_VERSION,
};
use crate::platform::{DiscreteList, Platform, VoltageDomain};
use crate::protocol::layout::FieldSpec;
use crate::protocol::layout::voltage::*;
use crate::protocol::pagination::{EnumerationCursor, Page, descriptor_base, max_batch};
use crate::protocol::status::{Checks, Fault, Handled, Status, resolve};
use crate::protocol::words::{Params, Returns};

/// Voltage domain protocol messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoltageCommand {
    /// PROTOCOL_VERSION
    Version,
    /// PROTOCOL_ATTRIBUTES
    Attributes,
    /// PROTOCOL_MESSAGE_ATTRIBUTES
    MessageAttributes,
    /// VOLTAGE_DOMAIN_ATTRIBUTES
    DomainAttributes,
    /// VOLTAGE_DESCRIBE_LEVELS
    DescribeLevels,
    /// VOLTAGE_CONFIG_SET
    ConfigSet,
    /// VOLTAGE_CONFIG_GET
    ConfigGet,
    /// VOLTAGE_LEVEL_SET
    LevelSet,
    /// VOLTAGE_LEVEL_GET
    LevelGet,
}

impl VoltageCommand {
    /// Every message, in message id order.
    pub const ALL: [Self; 9] = [
        Self::Version,
        Self::Attributes,
        Self::MessageAttributes,
        Self::DomainAttributes,
        Self::DescribeLevels,
        Self::ConfigSet,
        Self::ConfigGet,
        Self::LevelSet,
        Self::LevelGet,
    ];

    /// Wire message id.
    pub fn message_id(self) -> u32 {
        match self {
            Self::Version => PROTOCOL_VERSION_MSG_ID,
            Self::Attributes => PROTOCOL_ATTRIBUTES_MSG_ID,
            Self::MessageAttributes => PROTOCOL_MESSAGE_ATTRIBUTES_MSG_ID,
            Self::DomainAttributes => DOMAIN_ATTRIBUTES,
            Self::DescribeLevels => DESCRIBE_LEVELS,
            Self::ConfigSet => CONFIG_SET,
            Self::ConfigGet => CONFIG_GET,
            Self::LevelSet => LEVEL_SET,
            Self::LevelGet => LEVEL_GET,
        }
    }

    /// Message with wire id `id`.
    pub fn from_message_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.message_id() == id)
    }

    /// Run the handler against `platform`.
    pub fn handle(self, platform: &mut Platform, p: Params<'_>) -> Handled {
        match self {
            Self::Version => base::version(VOLTAGE_PROTOCOL_VERSION),
            Self::Attributes => {
                let mut r = Returns::with_capacity(1);
                r.set_usize(ATTR_NUM_DOMAINS, platform.voltage_domains.count())?;
                Ok(r)
            }
            Self::MessageAttributes => {
                base::message_attributes(p, |id| Self::from_message_id(id).is_some())
            }
            Self::DomainAttributes => domain_attributes(platform, p),
            Self::DescribeLevels => describe_levels(platform, p),
            Self::ConfigSet => config_set(platform, p),
            Self::ConfigGet => config_get(platform, p),
            Self::LevelSet => level_set(platform, p),
            Self::LevelGet => level_get(platform, p),
        }
    }
}

fn domain_mut<'a>(
    platform: &'a mut Platform,
    p: Params<'_>,
    field: FieldSpec,
) -> Result<(usize, &'a mut VoltageDomain), Fault> {
    let id = resolve(p.id(field), platform.voltage_domains.count(), field.name)?;
    let domain = platform
        .voltage_domains
        .descriptor_mut(id)
        .ok_or(Status::NotFound)?;
    Ok((id, domain))
}

fn domain_attributes(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (_, domain) = domain_mut(platform, p, DA_DOMAIN_ID)?;
    let mut r = Returns::with_capacity(5);
    r.set(DA_RESERVED, 0)?;
    r.set_name(DA_NAME, &domain.config().name)?;
    Ok(r)
}

fn describe_levels(platform: &mut Platform, p: Params<'_>) -> Handled {
    let budget = platform.return_budget_words();
    let (_, domain) = domain_mut(platform, p, DL_DOMAIN_ID)?;
    let levels = &domain.config().levels;
    let cursor = EnumerationCursor::new(p.id(DL_INDEX), levels.len());
    let (start, page) = match levels {
        DiscreteList::Triplet { .. } => (0, Page::triplet()),
        DiscreteList::Array(_) => {
            Checks::new()
                .index(cursor.start_index <= cursor.total_count, "level_index")
                .finish()?;
            let page = cursor.page(max_batch(budget, 1)).ok_or(Status::OutOfRange)?;
            (cursor.start_index, page)
        }
    };
    let mut r = Returns::with_capacity(1 + page.returned);
    r.set_usize(DL_RETURNED, page.returned)?;
    r.set(DL_FORMAT, levels.format() as u32)?;
    r.set_usize(DL_REMAINING, page.remaining)?;
    for i in 0..page.returned {
        let level = levels.entry(start + i).ok_or(Status::OutOfRange)?;
        r.set_signed(DL_LEVEL.shifted(descriptor_base(i, 1)), level)?;
    }
    Ok(r)
}

fn config_set(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (id, domain) = domain_mut(platform, p, CS_DOMAIN_ID)?;
    let config = p.get(CS_MODE_ID) | (p.get(CS_MODE_TYPE) << CS_MODE_TYPE.lo);
    Checks::new()
        .structure(p.is_clear(CS_RESERVED), "config_reserved")
        .structure(voltage_mode_is_valid(config), "config")
        .finish()?;
    domain.state.mode = config as u8;
    log::info!("voltage domain {}: mode {:#x}", id, config);
    Ok(Returns::new())
}

fn config_get(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (_, domain) = domain_mut(platform, p, CG_DOMAIN_ID)?;
    let mut r = Returns::with_capacity(1);
    r.set(CG_CONFIG, u32::from(domain.state.mode))?;
    Ok(r)
}

fn level_set(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (id, domain) = domain_mut(platform, p, LS_DOMAIN_ID)?;
    let level = p.get_signed(LS_LEVEL);
    Checks::new()
        .structure(p.is_clear(LS_FLAGS_RESERVED), "flags")
        .structure(domain.config().levels.contains(level), "voltage_level")
        .finish()?;
    domain.state.level = level;
    log::info!("voltage domain {}: level {} uV", id, level);
    Ok(Returns::new())
}

fn level_get(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (_, domain) = domain_mut(platform, p, LG_DOMAIN_ID)?;
    let mut r = Returns::with_capacity(1);
    r.set_signed(LG_LEVEL, domain.state.level)?;
    Ok(r)
}
