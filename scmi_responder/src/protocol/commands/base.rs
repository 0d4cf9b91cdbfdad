// scmi_responder/src/protocol/commands/base.rs
//! Messages every protocol implements: version and message attributes.

use crate::protocol::layout::common;
use crate::protocol::status::{Handled, Status};
use crate::protocol::words::{Params, Returns};

/// PROTOCOL_VERSION
pub fn version(version: u32) -> Handled {
    let mut r = Returns::with_capacity(1);
    r.set(common::VERSION, version)?;
    Ok(r)
}

/// PROTOCOL_MESSAGE_ATTRIBUTES: NOT_FOUND unless `implemented` knows the
/// queried message. Attributes are all zero.
pub fn message_attributes(p: Params<'_>, implemented: impl Fn(u32) -> bool) -> Handled {
    let message_id = p.get(common::MESSAGE_ID);
    if !implemented(message_id) {
        log::debug!("message attributes: {:#x} not implemented", message_id);
        return Err(Status::NotFound.into());
    }
    let mut r = Returns::with_capacity(1);
    r.set(common::MESSAGE_ATTRIBUTES_RESERVED, 0)?;
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::status::Fault;

    #[test]
    fn version_word() {
        assert_eq!(version(0x0002_0000).unwrap().into_words(), vec![0x0002_0000]);
    }

    #[test]
    fn unknown_message_is_not_found() {
        let out = message_attributes(Params::new(&[0x20]), |id| id < 0xC);
        assert_eq!(out, Err(Fault::Rejected(Status::NotFound)));
        let out = message_attributes(Params::new(&[0x3]), |id| id < 0xC);
        assert_eq!(out.unwrap().into_words(), vec![0]);
    }
}
