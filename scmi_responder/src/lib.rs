// scmi_responder/src/lib.rs

//! scmi_responder
//!
//! Platform-side reference responder for the SCMI sensor, reset domain and
//! voltage domain management protocols. Requests and responses are streams
//! of 32-bit words; every field is addressed through the layout registry in
//! [`protocol::layout`].
#![warn(missing_docs)]

pub mod agent;
pub mod builder;
pub mod config;
pub mod constants;
pub mod error;
pub mod platform;
pub mod prelude;
pub mod protocol;
pub mod responder;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// `crate::Status` and the newtypes in `types` are available everywhere.
pub use crate::error::*;
pub use crate::protocol::status::Status;
pub use crate::types::*;

pub use prelude::*;
