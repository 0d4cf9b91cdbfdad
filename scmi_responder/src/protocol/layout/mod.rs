// scmi_responder/src/protocol/layout/mod.rs
//! Word layout registry.
//!
//! Every message the dispatcher routes has a [`MessageLayout`] here naming
//! the bit range of each parameter and return field, the reserved ranges of
//! the words it emits, and (for list commands) the shape of one repeated
//! descriptor. Handlers address words only through these [`FieldSpec`]s.

pub mod reset;
pub mod sensor;
pub mod voltage;

use crate::constants::{
    PROTOCOL_ATTRIBUTES_MSG_ID, PROTOCOL_MESSAGE_ATTRIBUTES_MSG_ID, PROTOCOL_VERSION_MSG_ID,
};
use crate::protocol::bits::{self, Word};
use crate::types::ProtocolId;
use crate::{Error, Result};

/// A named bit range `[lo, hi]` inside the word at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Wire field name, used in logs and errors.
    pub name: &'static str,
    /// Word index within the parameter or return block.
    pub offset: usize,
    /// Lowest bit, inclusive.
    pub lo: u32,
    /// Highest bit, inclusive.
    pub hi: u32,
}

impl FieldSpec {
    /// Field covering bits `lo..=hi` of word `offset`.
    pub const fn new(name: &'static str, offset: usize, lo: u32, hi: u32) -> Self {
        Self {
            name,
            offset,
            lo,
            hi,
        }
    }

    /// Field covering a whole word.
    pub const fn word(name: &'static str, offset: usize) -> Self {
        Self::new(name, offset, 0, 31)
    }

    /// Single-bit field.
    pub const fn flag(name: &'static str, offset: usize, bit: u32) -> Self {
        Self::new(name, offset, bit, bit)
    }

    /// Number of bits in the field.
    pub const fn width(&self) -> u32 {
        bits::width(self.lo, self.hi)
    }

    /// Same field moved `base` words further, for repeated descriptors.
    pub const fn shifted(&self, base: usize) -> Self {
        Self::new(self.name, self.offset + base, self.lo, self.hi)
    }

    /// Read the field; words past the end of `words` read as zero.
    pub fn read(&self, words: &[Word]) -> u32 {
        words
            .get(self.offset)
            .map_or(0, |&w| bits::extract(w, self.lo, self.hi))
    }

    /// Signed read of the field.
    pub fn read_signed(&self, words: &[Word]) -> i32 {
        words
            .get(self.offset)
            .map_or(0, |&w| bits::extract_signed(w, self.lo, self.hi))
    }

    /// True when the field is clear (or absent).
    pub fn is_zero(&self, words: &[Word]) -> bool {
        words
            .get(self.offset)
            .is_none_or(|&w| bits::reserved_is_zero(w, self.lo, self.hi))
    }

    fn check(&self) -> Result<()> {
        if self.hi < self.lo || self.hi > 31 {
            return Err(Error::InvalidFieldRange {
                field: self.name,
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(())
    }

    fn overlaps(&self, other: &FieldSpec) -> bool {
        self.offset == other.offset && self.lo <= other.hi && other.lo <= self.hi
    }
}

/// Shape of the descriptors repeated after a list command's flags word.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorLayout {
    /// Word where the first descriptor starts.
    pub first_word: usize,
    /// Words per descriptor.
    pub stride: usize,
    /// Field of the flags word holding the number of descriptors returned.
    pub count: FieldSpec,
    /// Fields relative to the start of one descriptor.
    pub fields: &'static [FieldSpec],
    /// Reserved ranges relative to the start of one descriptor.
    pub reserved: &'static [FieldSpec],
}

impl DescriptorLayout {
    /// Absolute offset of descriptor `index`.
    pub fn base(&self, index: usize) -> usize {
        self.first_word + index * self.stride
    }
}

/// Word layout of one message, both directions.
#[derive(Debug, Clone, Copy)]
pub struct MessageLayout {
    /// Protocol the message belongs to.
    pub protocol: ProtocolId,
    /// Message id within the protocol.
    pub message_id: u32,
    /// Wire name, e.g. `SENSOR_READING_GET`.
    pub name: &'static str,
    /// Parameter words that must be present.
    pub min_params: usize,
    /// Parameter fields.
    pub params: &'static [FieldSpec],
    /// Reserved parameter bits (checked only where a handler forbids them).
    pub reserved_params: &'static [FieldSpec],
    /// Return fields after the status word.
    pub returns: &'static [FieldSpec],
    /// Reserved return bits; always zero in a SUCCESS response.
    pub reserved_returns: &'static [FieldSpec],
    /// Repeated descriptors of a list command.
    pub descriptors: Option<DescriptorLayout>,
}

impl MessageLayout {
    /// Check ranges and overlaps. Run once per layout when the dispatcher is
    /// built.
    pub fn validate(&self) -> Result<()> {
        check_group(self.name, &[self.params, self.reserved_params])?;
        check_group(self.name, &[self.returns, self.reserved_returns])?;
        if let Some(desc) = &self.descriptors {
            desc.count.check()?;
            check_group(self.name, &[desc.fields, desc.reserved])?;
            if let Some(f) = desc
                .fields
                .iter()
                .chain(desc.reserved)
                .find(|f| f.offset >= desc.stride)
            {
                return Err(Error::InvalidFieldRange {
                    field: f.name,
                    lo: f.lo,
                    hi: f.hi,
                });
            }
        }
        Ok(())
    }

    /// Reserved bits of `returns` that are set, as (field, absolute offset).
    /// Descriptors are checked up to the count the response reports.
    pub fn reserved_violations(&self, returns: &[Word]) -> Vec<(&'static str, usize)> {
        let mut out: Vec<(&'static str, usize)> = self
            .reserved_returns
            .iter()
            .filter(|f| !f.is_zero(returns))
            .map(|f| (f.name, f.offset))
            .collect();
        if let Some(desc) = &self.descriptors {
            let count = desc.count.read(returns) as usize;
            for i in 0..count {
                let base = desc.base(i);
                out.extend(
                    desc.reserved
                        .iter()
                        .map(|f| f.shifted(base))
                        .filter(|f| !f.is_zero(returns))
                        .map(|f| (f.name, f.offset)),
                );
            }
        }
        out
    }
}

fn check_group(message: &'static str, groups: &[&'static [FieldSpec]]) -> Result<()> {
    let all: Vec<&FieldSpec> = groups.iter().flat_map(|g| g.iter()).collect();
    for (i, a) in all.iter().enumerate() {
        a.check()?;
        if let Some(b) = all[i + 1..].iter().find(|b| a.overlaps(b)) {
            return Err(Error::OverlappingFields {
                message,
                first: a.name,
                second: b.name,
            });
        }
    }
    Ok(())
}

/// Fields shared by the three messages every protocol implements.
pub mod common {
    use super::FieldSpec;

    /// Protocol version, major in the high half.
    pub const VERSION: FieldSpec = FieldSpec::word("version", 0);
    /// Message queried by PROTOCOL_MESSAGE_ATTRIBUTES.
    pub const MESSAGE_ID: FieldSpec = FieldSpec::word("message_id", 0);
    /// Message attributes word, entirely reserved.
    pub const MESSAGE_ATTRIBUTES_RESERVED: FieldSpec =
        FieldSpec::word("message_attributes_reserved", 0);
}

/// Layout of PROTOCOL_VERSION for `protocol`.
pub const fn version_layout(protocol: ProtocolId, name: &'static str) -> MessageLayout {
    MessageLayout {
        protocol,
        message_id: PROTOCOL_VERSION_MSG_ID,
        name,
        min_params: 0,
        params: &[],
        reserved_params: &[],
        returns: &[common::VERSION],
        reserved_returns: &[],
        descriptors: None,
    }
}

/// Layout of PROTOCOL_MESSAGE_ATTRIBUTES for `protocol`.
pub const fn message_attributes_layout(protocol: ProtocolId, name: &'static str) -> MessageLayout {
    MessageLayout {
        protocol,
        message_id: PROTOCOL_MESSAGE_ATTRIBUTES_MSG_ID,
        name,
        min_params: 1,
        params: &[common::MESSAGE_ID],
        reserved_params: &[],
        returns: &[],
        reserved_returns: &[common::MESSAGE_ATTRIBUTES_RESERVED],
        descriptors: None,
    }
}

/// Layout of a PROTOCOL_ATTRIBUTES message whose word 0 carries a 16-bit
/// resource count and is otherwise reserved.
pub const fn count_attributes_layout(
    protocol: ProtocolId,
    name: &'static str,
    returns: &'static [FieldSpec],
    reserved: &'static [FieldSpec],
) -> MessageLayout {
    MessageLayout {
        protocol,
        message_id: PROTOCOL_ATTRIBUTES_MSG_ID,
        name,
        min_params: 0,
        params: &[],
        reserved_params: &[],
        returns,
        reserved_returns: reserved,
        descriptors: None,
    }
}

/// Every registered layout.
pub fn registry() -> impl Iterator<Item = &'static MessageLayout> {
    sensor::LAYOUTS
        .iter()
        .chain(reset::LAYOUTS.iter())
        .chain(voltage::LAYOUTS.iter())
}

/// Layout for `(protocol, message_id)`, if registered.
pub fn lookup(protocol: ProtocolId, message_id: u32) -> Option<&'static MessageLayout> {
    registry().find(|l| l.protocol == protocol && l.message_id == message_id)
}
