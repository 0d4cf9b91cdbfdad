// scmi_responder/src/protocol/mod.rs
//! Wire protocol: field codec, layouts, handlers and routing.

pub mod bits;
pub mod commands;
pub mod dispatch;
pub mod frame;
pub mod header;
pub mod layout;
pub mod pagination;
pub mod status;
pub mod words;

pub use commands::*;
pub use dispatch::Dispatcher;
pub use frame::{Request, Response};
pub use header::{MessageHeader, MessageType};
pub use layout::{FieldSpec, MessageLayout};
pub use pagination::{EnumerationCursor, Page};
pub use status::{Fault, Handled, Status};
pub use words::{Params, Returns};
