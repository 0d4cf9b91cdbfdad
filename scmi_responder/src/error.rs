// scmi_responder/src/error.rs
//! Crate error type.

use thiserror::Error;

/// Internal fault type.
///
/// Protocol outcomes (NOT_FOUND, OUT_OF_RANGE, ...) are reported through
/// [`crate::Status`] inside a response; this enum only covers conditions the
/// responder cannot express on the wire: bad configuration, broken layouts,
/// malformed frames and field encoding faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Frame shorter than its fixed part.
    #[error("invalid frame length: expected at least {expected} words, got {actual}")]
    InvalidLength {
        /// Minimum words.
        expected: usize,
        /// Words received.
        actual: usize,
    },

    /// Value wider than the field it is written to.
    #[error("value {value:#x} does not fit field `{field}` ({width} bits)")]
    FieldOverflow {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: i64,
        /// Field width in bits.
        width: u32,
    },

    /// Field bit range outside a word, or outside its descriptor.
    #[error("field `{field}` has invalid bit range [{lo}, {hi}]")]
    InvalidFieldRange {
        /// Field name.
        field: &'static str,
        /// Lowest bit.
        lo: u32,
        /// Highest bit.
        hi: u32,
    },

    /// Two fields of one layout share bits.
    #[error("message `{message}`: fields `{first}` and `{second}` overlap")]
    OverlappingFields {
        /// Message name.
        message: &'static str,
        /// First field.
        first: &'static str,
        /// Second field.
        second: &'static str,
    },

    /// Handler without a registered layout.
    #[error("no word layout registered for protocol {protocol:#04x} message {message:#x}")]
    LayoutMissing {
        /// Protocol id.
        protocol: u8,
        /// Message id.
        message: u32,
    },

    /// Two handlers for one message.
    #[error("message {message:#x} of protocol {protocol:#04x} is routed twice")]
    DuplicateRoute {
        /// Protocol id.
        protocol: u8,
        /// Message id.
        message: u32,
    },

    /// Registered layout without a handler.
    #[error("layout for protocol {protocol:#04x} message {message:#x} has no handler")]
    UnroutedLayout {
        /// Protocol id.
        protocol: u8,
        /// Message id.
        message: u32,
    },

    /// A list call made no progress.
    #[error("`{message}` returned nothing at index {index} with entries remaining")]
    EnumerationStalled {
        /// Message name.
        message: &'static str,
        /// Index the empty page was requested at.
        index: usize,
    },

    /// Status word outside the known codes.
    #[error("unknown status word {0:#x}")]
    UnknownStatus(u32),

    /// Configuration rejected by validation.
    #[error("invalid platform configuration: {0}")]
    InvalidConfig(String),

    /// Channel receive or send failure.
    #[error("channel error: {0}")]
    Channel(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
