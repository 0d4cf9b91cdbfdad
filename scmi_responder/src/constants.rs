// scmi_responder/src/constants.rs
//! Common protocol constants used across the crate

/// Sensor management protocol id
pub const SENSOR_PROTOCOL_ID: u8 = 0x15;
/// Reset domain management protocol id
pub const RESET_PROTOCOL_ID: u8 = 0x16;
/// Voltage domain management protocol id
pub const VOLTAGE_PROTOCOL_ID: u8 = 0x17;

// Versions reported by PROTOCOL_VERSION, major in the upper half.

/// Sensor protocol version 2.0
pub const SENSOR_PROTOCOL_VERSION: u32 = 0x0002_0000;
/// Reset domain protocol version 2.0
pub const RESET_PROTOCOL_VERSION: u32 = 0x0002_0000;
/// Voltage domain protocol version 1.0
pub const VOLTAGE_PROTOCOL_VERSION: u32 = 0x0001_0000;

// Message ids shared by every protocol.

/// PROTOCOL_VERSION
pub const PROTOCOL_VERSION_MSG_ID: u32 = 0x0;
/// PROTOCOL_ATTRIBUTES
pub const PROTOCOL_ATTRIBUTES_MSG_ID: u32 = 0x1;
/// PROTOCOL_MESSAGE_ATTRIBUTES
pub const PROTOCOL_MESSAGE_ATTRIBUTES_MSG_ID: u32 = 0x2;

/// Size in bytes of a fixed-length name field, NUL terminator included
pub const NAME_STR_SIZE: usize = 16;

/// Words occupied by a name field
pub const NAME_WORDS: usize = NAME_STR_SIZE / 4;

/// Words per sensor descriptor in SENSOR_DESCRIPTION_GET
pub const SENSOR_DESC_WORDS: usize = 13;

/// Words per axis descriptor in SENSOR_AXIS_DESCRIPTION_GET
pub const AXIS_DESC_WORDS: usize = 12;

/// Words per reading in SENSOR_READING_GET (value low/high, timestamp low/high)
pub const READING_WORDS: usize = 4;

/// Entries reported by a (start, end, step) triplet list
pub const TRIPLET_LEN: u32 = 3;

/// Reset domain latency value meaning "not known"
pub const RESET_LATENCY_UNKNOWN: u32 = 0xFFFF_FFFF;

/// Default number of return words a single response may carry (flags word
/// included)
pub const DEFAULT_RETURN_BUDGET_WORDS: usize = 64;

/// Largest budget accepted by configuration validation. Keeps any batch size
/// within the 12-bit "returned" fields of the list commands.
pub const MAX_RETURN_BUDGET_WORDS: usize = 4096;
