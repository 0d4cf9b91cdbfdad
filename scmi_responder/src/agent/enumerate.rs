// scmi_responder/src/agent/enumerate.rs
//! Paginated list walks.

use crate::protocol::bits::Word;
use crate::protocol::layout::{self, FieldSpec, sensor, voltage};
use crate::protocol::status::Status;
use crate::responder::Responder;
use crate::types::{ListFormat, ProtocolId};
use crate::{Error, Result};

/// The paginated list commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// SENSOR_DESCRIPTION_GET over every sensor.
    SensorDescriptions,
    /// SENSOR_AXIS_DESCRIPTION_GET over the axes of one sensor.
    AxisDescriptions { sensor_id: u32 },
    /// SENSOR_LIST_UPDATE_INTERVALS of one sensor.
    UpdateIntervals { sensor_id: u32 },
    /// VOLTAGE_DESCRIBE_LEVELS of one domain.
    VoltageLevels { domain_id: u32 },
}

impl ListKind {
    /// Protocol the list command belongs to.
    pub fn protocol(self) -> ProtocolId {
        match self {
            Self::VoltageLevels { .. } => ProtocolId::VOLTAGE,
            _ => ProtocolId::SENSOR,
        }
    }

    /// Message id of the list command.
    pub fn message_id(self) -> u32 {
        match self {
            Self::SensorDescriptions => sensor::DESCRIPTION_GET,
            Self::AxisDescriptions { .. } => sensor::AXIS_DESCRIPTION_GET,
            Self::UpdateIntervals { .. } => sensor::LIST_UPDATE_INTERVALS,
            Self::VoltageLevels { .. } => voltage::DESCRIBE_LEVELS,
        }
    }

    fn params(self, index: Word) -> Vec<Word> {
        match self {
            Self::SensorDescriptions => vec![index],
            Self::AxisDescriptions { sensor_id } | Self::UpdateIntervals { sensor_id } => {
                vec![sensor_id, index]
            }
            Self::VoltageLevels { domain_id } => vec![domain_id, index],
        }
    }

    /// (returned, remaining, format) fields of the flags word.
    fn flags(self) -> (FieldSpec, FieldSpec, Option<FieldSpec>) {
        match self {
            Self::SensorDescriptions => (sensor::DESC_RETURNED, sensor::DESC_REMAINING, None),
            Self::AxisDescriptions { .. } => (sensor::AX_RETURNED, sensor::AX_REMAINING, None),
            Self::UpdateIntervals { .. } => (
                sensor::UI_RETURNED,
                sensor::UI_REMAINING,
                Some(sensor::UI_FORMAT),
            ),
            Self::VoltageLevels { .. } => (
                voltage::DL_RETURNED,
                voltage::DL_REMAINING,
                Some(voltage::DL_FORMAT),
            ),
        }
    }
}

/// Everything collected by one enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Status of the last call; anything but SUCCESS stopped the walk.
    pub status: Status,
    /// Format reported by the last call.
    pub format: ListFormat,
    /// One entry per descriptor, `stride` words each.
    pub descriptors: Vec<Vec<Word>>,
    /// Messages sent.
    pub calls: usize,
}

impl Listing {
    /// True when every call succeeded.
    pub fn is_complete(&self) -> bool {
        self.status.is_success()
    }
}

/// Walks a list command from index 0, advancing by the returned count until
/// nothing remains.
#[derive(Debug, Clone, Copy)]
pub struct Enumeration {
    kind: ListKind,
}

impl Enumeration {
    /// Enumeration of `kind`, starting at index 0.
    pub fn new(kind: ListKind) -> Self {
        Self { kind }
    }

    /// Drive the list to completion against `responder`.
    ///
    /// A rejected call ends the walk and is reported in [`Listing::status`].
    /// `Err` when the responder faults or when a call returns nothing while
    /// reporting items remaining.
    pub fn run(&self, responder: &mut Responder) -> Result<Listing> {
        let (protocol, message_id) = (self.kind.protocol(), self.kind.message_id());
        let msg = layout::lookup(protocol, message_id).ok_or(Error::LayoutMissing {
            protocol: protocol.as_u8(),
            message: message_id,
        })?;
        let desc = msg.descriptors.ok_or(Error::LayoutMissing {
            protocol: protocol.as_u8(),
            message: message_id,
        })?;
        let (returned_field, remaining_field, format_field) = self.kind.flags();

        let mut listing = Listing {
            status: Status::Success,
            format: ListFormat::Array,
            descriptors: Vec::new(),
            calls: 0,
        };
        let mut index = 0usize;
        loop {
            let word = Word::try_from(index).map_err(|_| Error::FieldOverflow {
                field: "index",
                value: i64::try_from(index).unwrap_or(i64::MAX),
                width: 32,
            })?;
            let (status, words) =
                responder.send_message(protocol, message_id, &self.kind.params(word))?;
            listing.calls += 1;
            if !status.is_success() {
                log::debug!("{} at index {}: {}", msg.name, index, status);
                listing.status = status;
                return Ok(listing);
            }
            let returned = returned_field.read(&words) as usize;
            let remaining = remaining_field.read(&words) as usize;
            if let Some(f) = format_field {
                if f.read(&words) != 0 {
                    listing.format = ListFormat::Triplet;
                }
            }
            for i in 0..returned {
                let base = desc.base(i);
                let end = base + desc.stride;
                let chunk = words.get(base..end).ok_or(Error::InvalidLength {
                    expected: end,
                    actual: words.len(),
                })?;
                listing.descriptors.push(chunk.to_vec());
            }
            if remaining == 0 || listing.format == ListFormat::Triplet {
                return Ok(listing);
            }
            if returned == 0 {
                return Err(Error::EnumerationStalled {
                    message: msg.name,
                    index,
                });
            }
            index += returned;
        }
    }
}
