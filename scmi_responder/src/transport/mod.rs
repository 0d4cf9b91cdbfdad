// scmi_responder/src/transport/mod.rs
//! Frame transport between agent and responder.

pub mod mock;
pub mod traits;

pub use mock::MockChannel;
pub use traits::Channel;
