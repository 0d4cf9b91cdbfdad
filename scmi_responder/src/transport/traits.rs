// scmi_responder/src/transport/traits.rs
//! Channel abstraction.

use crate::Result;
use crate::protocol::bits::Word;

/// Channel abstracts the shared-memory or mailbox transport away from the
/// responder. Frames are whole words: one header followed by payload.
pub trait Channel {
    /// Next request frame, or `None` once the agent side has nothing queued.
    fn receive(&mut self) -> Result<Option<Vec<Word>>>;

    /// Deliver one response frame to the agent.
    fn send(&mut self, frame: &[Word]) -> Result<()>;

    /// Drop any half-delivered frame state. Default is a no-op for
    /// transports that have none.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockChannel;

    #[test]
    fn trait_object_send_receive() {
        let mut m = MockChannel::new();
        m.push_request(vec![0x0000_5400]);
        let ch: &mut dyn Channel = &mut m;
        assert_eq!(ch.receive().unwrap(), Some(vec![0x0000_5400]));
        assert_eq!(ch.receive().unwrap(), None);
        ch.send(&[0x0000_5400, 0]).unwrap();
        ch.reset().unwrap();
        assert_eq!(m.sent, vec![vec![0x0000_5400, 0]]);
    }
}
