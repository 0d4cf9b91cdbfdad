// scmi_responder/src/protocol/frame.rs
//! Request and response frames.

use crate::protocol::bits::Word;
use crate::protocol::header::MessageHeader;
use crate::protocol::status::Status;
use crate::protocol::words::ensure_len;
use crate::{Error, Result};

/// Request frame
/// Format: [Header(1)] [Params(n)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Message header.
    pub header: MessageHeader,
    /// Parameter words.
    pub params: Vec<Word>,
}

impl Request {
    /// Request from a header and its parameters.
    pub fn new(header: MessageHeader, params: Vec<Word>) -> Self {
        Self { header, params }
    }

    /// Header word followed by the parameters.
    pub fn encode(&self) -> Result<Vec<Word>> {
        let mut out = Vec::with_capacity(1 + self.params.len());
        out.push(self.header.encode()?);
        out.extend_from_slice(&self.params);
        Ok(out)
    }

    /// Decode a raw frame; at least the header word must be present.
    pub fn decode(frame: &[Word]) -> Result<Self> {
        ensure_len(frame, 1)?;
        Ok(Self {
            header: MessageHeader::decode(frame[0]),
            params: frame[1..].to_vec(),
        })
    }
}

/// Response frame
/// Format: [Header(1)] [Status(1)] [Returns(n)]
///
/// `returns` is empty on any non-SUCCESS status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Header echoed from the request.
    pub header: MessageHeader,
    /// Outcome.
    pub status: Status,
    /// Return words after the status.
    pub returns: Vec<Word>,
}

impl Response {
    /// Response carrying `returns`.
    pub fn new(header: MessageHeader, status: Status, returns: Vec<Word>) -> Self {
        Self {
            header,
            status,
            returns,
        }
    }

    /// Response with `status` and no return words.
    pub fn rejected(header: MessageHeader, status: Status) -> Self {
        Self::new(header, status, Vec::new())
    }

    /// True for SUCCESS.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Header, status word, then the return words.
    pub fn encode(&self) -> Result<Vec<Word>> {
        let mut out = Vec::with_capacity(2 + self.returns.len());
        out.push(self.header.encode()?);
        out.push(self.status.to_word());
        out.extend_from_slice(&self.returns);
        Ok(out)
    }

    /// Agent-side decode of a response frame.
    pub fn decode(frame: &[Word]) -> Result<Self> {
        ensure_len(frame, 2)?;
        let status = Status::from_word(frame[1]).ok_or(Error::UnknownStatus(frame[1]))?;
        Ok(Self {
            header: MessageHeader::decode(frame[0]),
            status,
            returns: frame[2..].to_vec(),
        })
    }
}
