// scmi_responder/src/protocol/status.rs
//! Status codes and the precedence classifier that picks one of them when
//! several validation checks fail on the same request.

use crate::Error;
use crate::protocol::words::Returns;
use derive_more::Display;

/// Protocol status returned with every response. Values follow the SCMI
/// numbering and are sent as two's complement words.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Request completed.
    #[display(fmt = "SUCCESS")]
    Success = 0,
    /// Capability or message not supported.
    #[display(fmt = "NOT_SUPPORTED")]
    NotSupported = -1,
    /// Malformed or disallowed parameter values.
    #[display(fmt = "INVALID_PARAMETERS")]
    InvalidParameters = -2,
    /// Unknown resource or message.
    #[display(fmt = "NOT_FOUND")]
    NotFound = -4,
    /// Enumeration index past the end of a list.
    #[display(fmt = "OUT_OF_RANGE")]
    OutOfRange = -5,
}

impl Status {
    /// Wire form of the status word.
    pub const fn to_word(self) -> u32 {
        self as i32 as u32
    }

    /// Status with signed code `value`.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Success),
            -1 => Some(Self::NotSupported),
            -2 => Some(Self::InvalidParameters),
            -4 => Some(Self::NotFound),
            -5 => Some(Self::OutOfRange),
            _ => None,
        }
    }

    /// Status from its wire word.
    pub fn from_word(word: u32) -> Option<Self> {
        Self::from_i32(word as i32)
    }

    /// True for [`Status::Success`].
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

/// Validation stages in precedence order; an earlier stage wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Stage {
    /// Resource identifier within `[0, count)`.
    #[display(fmt = "resource")]
    Resource,
    /// Enumeration index or fixed-size selector field.
    #[display(fmt = "sub-index")]
    SubIndex,
    /// Capability the request needs.
    #[display(fmt = "capability")]
    Capability,
    /// Flag values and forbidden reserved bits.
    #[display(fmt = "structural")]
    Structural,
}

/// One failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Stage that recorded it.
    pub stage: Stage,
    /// Status it maps to.
    pub status: Status,
    /// Offending field.
    pub field: &'static str,
}

/// Pick the status of the earliest-stage violation. Within a stage the first
/// recorded violation wins.
pub fn classify(violations: &[Violation]) -> Status {
    violations
        .iter()
        .enumerate()
        .min_by_key(|(i, v)| (v.stage, *i))
        .map_or(Status::Success, |(_, v)| v.status)
}

/// Collects violations for stages 2 to 4 once the targeted resource has been
/// resolved, then resolves them with [`classify`].
#[derive(Debug, Default)]
pub struct Checks {
    violations: Vec<Violation>,
}

impl Checks {
    /// No violations recorded.
    pub fn new() -> Self {
        Self::default()
    }

    fn require(&mut self, ok: bool, stage: Stage, status: Status, field: &'static str) -> &mut Self {
        if !ok {
            self.violations.push(Violation {
                stage,
                status,
                field,
            });
        }
        self
    }

    /// Enumeration index bound.
    pub fn index(&mut self, ok: bool, field: &'static str) -> &mut Self {
        self.require(ok, Stage::SubIndex, Status::OutOfRange, field)
    }

    /// Fixed-size selector field bound.
    pub fn selector(&mut self, ok: bool, field: &'static str) -> &mut Self {
        self.require(ok, Stage::SubIndex, Status::InvalidParameters, field)
    }

    /// Capability the request needs; NOT_SUPPORTED when missing.
    pub fn capability(&mut self, ok: bool, field: &'static str) -> &mut Self {
        self.require(ok, Stage::Capability, Status::NotSupported, field)
    }

    /// Remaining structural checks, such as forbidden reserved bits.
    pub fn structure(&mut self, ok: bool, field: &'static str) -> &mut Self {
        self.require(ok, Stage::Structural, Status::InvalidParameters, field)
    }

    /// Violations in the order they were recorded.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// `Err` with the winning status when anything failed.
    pub fn finish(&self) -> Result<(), Fault> {
        match classify(&self.violations) {
            Status::Success => Ok(()),
            status => {
                if let Some(v) = self.violations.iter().find(|v| v.status == status) {
                    log::debug!("rejected at {} stage: `{}` -> {}", v.stage, v.field, status);
                }
                Err(Fault::Rejected(status))
            }
        }
    }
}

/// Why a handler did not produce a SUCCESS response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Request rejected with a non-SUCCESS status.
    Rejected(Status),
    /// Internal fault; surfaces as `Err` from the dispatcher.
    Internal(Error),
}

impl From<Status> for Fault {
    fn from(status: Status) -> Self {
        Fault::Rejected(status)
    }
}

impl From<Error> for Fault {
    fn from(err: Error) -> Self {
        Fault::Internal(err)
    }
}

/// Handler result.
pub type Handled = std::result::Result<Returns, Fault>;

/// Stage 1: resolve a resource identifier against a class of `count`
/// resources.
pub fn resolve(id: usize, count: usize, field: &'static str) -> Result<usize, Fault> {
    if id < count {
        Ok(id)
    } else {
        log::debug!("rejected at {} stage: `{}` = {} of {}", Stage::Resource, field, id, count);
        Err(Fault::Rejected(Status::NotFound))
    }
}
