// scmi_responder/src/protocol/commands/mod.rs
//! Message handlers, one enum per protocol.

pub mod base;
pub mod reset;
pub mod sensor;
pub mod voltage;

pub use reset::ResetCommand;
pub use sensor::SensorCommand;
pub use voltage::VoltageCommand;

use crate::platform::Platform;
use crate::protocol::status::Handled;
use crate::protocol::words::Params;
use crate::types::ProtocolId;

/// Every implemented (protocol, message) pair. New messages are added to the
/// per-protocol enum and get a layout in `protocol::layout::<protocol>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Sensor management protocol.
    Sensor(SensorCommand),
    /// Reset domain management protocol.
    Reset(ResetCommand),
    /// Voltage domain management protocol.
    Voltage(VoltageCommand),
}

impl Command {
    /// All routes, grouped by protocol.
    pub fn all() -> impl Iterator<Item = Command> {
        SensorCommand::ALL
            .into_iter()
            .map(Command::Sensor)
            .chain(ResetCommand::ALL.into_iter().map(Command::Reset))
            .chain(VoltageCommand::ALL.into_iter().map(Command::Voltage))
    }

    /// Protocol of the route.
    pub fn protocol(self) -> ProtocolId {
        match self {
            Self::Sensor(_) => ProtocolId::SENSOR,
            Self::Reset(_) => ProtocolId::RESET,
            Self::Voltage(_) => ProtocolId::VOLTAGE,
        }
    }

    /// Message id of the route.
    pub fn message_id(self) -> u32 {
        match self {
            Self::Sensor(c) => c.message_id(),
            Self::Reset(c) => c.message_id(),
            Self::Voltage(c) => c.message_id(),
        }
    }

    /// `None` for a message the protocol does not implement.
    pub fn lookup(protocol: ProtocolId, message_id: u32) -> Option<Self> {
        Self::all().find(|c| c.protocol() == protocol && c.message_id() == message_id)
    }

    /// Run the handler. Parameter count has already been checked.
    pub fn handle(self, platform: &mut Platform, p: Params<'_>) -> Handled {
        match self {
            Self::Sensor(c) => c.handle(platform, p),
            Self::Reset(c) => c.handle(platform, p),
            Self::Voltage(c) => c.handle(platform, p),
        }
    }
}
