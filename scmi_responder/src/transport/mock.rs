// scmi_responder/src/transport/mock.rs
//! In-memory channel.

use crate::protocol::bits::Word;
use crate::transport::traits::Channel;
use crate::{Error, Result};
use std::collections::VecDeque;

/// Mock channel for tests. It returns queued request frames and records the
/// response frames sent back.
#[derive(Debug, Default)]
pub struct MockChannel {
    /// Request frames not yet received.
    pub requests: VecDeque<Vec<Word>>,
    /// Response frames sent, oldest first.
    pub sent: Vec<Vec<Word>>,
    /// Testing hook: number of subsequent `send` calls that fail.
    pub send_failures: usize,
}

impl MockChannel {
    /// Empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the channel with request frames, in order.
    pub fn with_requests<I: IntoIterator<Item = Vec<Word>>>(frames: I) -> Self {
        Self {
            requests: frames.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queue one more request frame.
    pub fn push_request(&mut self, frame: Vec<Word>) {
        self.requests.push_back(frame);
    }

    /// Set how many subsequent `send` calls should fail.
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    /// Most recent response frame.
    pub fn pop_sent(&mut self) -> Option<Vec<Word>> {
        self.sent.pop()
    }
}

impl Channel for MockChannel {
    fn receive(&mut self) -> Result<Option<Vec<Word>>> {
        Ok(self.requests.pop_front())
    }

    fn send(&mut self, frame: &[Word]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Channel("mock send failure".to_string()));
        }
        self.sent.push(frame.to_vec());
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        // Queued requests survive so tests can seed before handing the
        // channel over.
        self.sent.clear();
        Ok(())
    }
}
