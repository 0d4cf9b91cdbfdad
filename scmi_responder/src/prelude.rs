// scmi_responder/src/prelude.rs
//! Commonly used types.

pub use crate::agent::{Enumeration, ListKind, Listing};
pub use crate::builder::PlatformBuilder;
pub use crate::config::PlatformConfig;
pub use crate::platform::Platform;
pub use crate::protocol::{Command, Dispatcher, MessageHeader, Request, Response};
pub use crate::responder::Responder;
pub use crate::transport::{Channel, MockChannel};
pub use crate::{Error, ListFormat, MessageId, Name, ProtocolId, Result, Status};

pub use crate::utils::{parse_words, words_to_hex};
