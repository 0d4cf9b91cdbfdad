// scmi_responder/src/agent/mod.rs
//! Agent-side helpers: drive list commands the way an OS agent would.

/// List enumeration.
pub mod enumerate;

pub use enumerate::{Enumeration, ListKind, Listing};
