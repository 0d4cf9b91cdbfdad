//! Test support helpers intended for use by unit and integration tests.
//!
//! These centralize the reference responder and seeded mock channel setup so
//! tests across the crate and the tests/ directory share the same logic.
#![allow(dead_code)]

use crate::protocol::bits::Word;
use crate::protocol::header::MessageHeader;
use crate::responder::Responder;
use crate::transport::MockChannel;
use crate::types::ProtocolId;
use crate::Result;

/// Install `env_logger` once for unit tests; later calls are no-ops.
#[cfg(test)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Responder over the reference platform.
#[doc(hidden)]
pub fn reference_responder() -> Result<Responder> {
    Responder::reference()
}

/// Encoded request frame for `(protocol, message_id)` with `token`.
#[doc(hidden)]
pub fn request_frame(
    protocol: ProtocolId,
    message_id: u8,
    token: u16,
    params: &[Word],
) -> Result<Vec<Word>> {
    let mut frame = vec![MessageHeader::command(protocol, message_id, token).encode()?];
    frame.extend_from_slice(params);
    Ok(frame)
}

/// MockChannel pre-seeded with the given request frames.
#[doc(hidden)]
pub fn seeded_channel(frames: Vec<Vec<Word>>) -> MockChannel {
    MockChannel::with_requests(frames)
}
