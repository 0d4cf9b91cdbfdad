// scmi_responder/src/protocol/header.rs
//! Message header word.

use crate::protocol::bits::Word;
use crate::protocol::layout::FieldSpec;
use crate::protocol::words::{Params, Returns};
use crate::types::{MessageId, ProtocolId};
use crate::Result;

/// Message id within the protocol.
pub const HDR_MESSAGE_ID: FieldSpec = FieldSpec::new("message_id", 0, 0, 7);
/// [`MessageType`] bits.
pub const HDR_MESSAGE_TYPE: FieldSpec = FieldSpec::new("message_type", 0, 8, 9);
/// Protocol id.
pub const HDR_PROTOCOL_ID: FieldSpec = FieldSpec::new("protocol_id", 0, 10, 17);
/// Sequence token chosen by the agent.
pub const HDR_TOKEN: FieldSpec = FieldSpec::new("token", 0, 18, 27);
/// Reserved, bits [31:28].
pub const HDR_RESERVED: FieldSpec = FieldSpec::new("header_reserved", 0, 28, 31);

/// Kind of message carried by a header.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    /// Synchronous command.
    Command = 0,
    /// Completion of an asynchronous command.
    DelayedResponse = 2,
    /// Platform notification.
    Notification = 3,
}

impl MessageType {
    /// Type from the two header bits; 1 is unassigned.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(Self::Command),
            2 => Some(Self::DelayedResponse),
            3 => Some(Self::Notification),
            _ => None,
        }
    }
}

/// First word of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    /// Message id within the protocol.
    pub message_id: u8,
    /// Raw type bits; see [`MessageHeader::kind`].
    pub message_type: u8,
    /// Protocol id.
    pub protocol: ProtocolId,
    /// Sequence token, 10 bits on the wire.
    pub token: u16,
}

impl MessageHeader {
    /// Command header for `(protocol, message_id)` with `token`.
    pub fn command(protocol: ProtocolId, message_id: u8, token: u16) -> Self {
        Self {
            message_id,
            message_type: MessageType::Command as u8,
            protocol,
            token,
        }
    }

    /// Message id as a newtype.
    pub fn message(&self) -> MessageId {
        MessageId::new(u32::from(self.message_id))
    }

    /// Decoded message type.
    pub fn kind(&self) -> Option<MessageType> {
        MessageType::from_bits(u32::from(self.message_type))
    }

    /// Encode; a token wider than 10 bits is a `FieldOverflow`.
    pub fn encode(&self) -> Result<Word> {
        let mut r = Returns::with_capacity(1);
        r.set(HDR_MESSAGE_ID, u32::from(self.message_id))?;
        r.set(HDR_MESSAGE_TYPE, u32::from(self.message_type))?;
        r.set(HDR_PROTOCOL_ID, u32::from(self.protocol.as_u8()))?;
        r.set(HDR_TOKEN, u32::from(self.token))?;
        Ok(r.as_slice().first().copied().unwrap_or(0))
    }

    /// Decode a header word. Reserved bits are ignored.
    pub fn decode(word: Word) -> Self {
        let w = [word];
        let p = Params::new(&w);
        Self {
            message_id: p.get(HDR_MESSAGE_ID) as u8,
            message_type: p.get(HDR_MESSAGE_TYPE) as u8,
            protocol: ProtocolId::new(p.get(HDR_PROTOCOL_ID) as u8),
            token: p.get(HDR_TOKEN) as u16,
        }
    }
}
