// scmi_responder/src/responder.rs
//! Platform-side entry point.
//!
//! A [`Responder`] owns one [`Platform`] store and the [`Dispatcher`]. Every
//! request runs to completion before the next one is looked at, so the
//! store never sees interleaved mutations.

use crate::config::PlatformConfig;
use crate::platform::Platform;
use crate::protocol::bits::Word;
use crate::protocol::dispatch::Dispatcher;
use crate::protocol::frame::{Request, Response};
use crate::protocol::header::MessageType;
use crate::protocol::status::Status;
use crate::transport::Channel;
use crate::types::ProtocolId;
use crate::{Error, Result};

/// Answers requests against one platform.
#[derive(Debug, Clone)]
pub struct Responder {
    platform: Platform,
    dispatcher: Dispatcher,
}

impl Responder {
    /// Validate `config` and build a responder with default state.
    pub fn new(config: PlatformConfig) -> Result<Self> {
        Self::from_platform(Platform::from_config(config)?)
    }

    /// Responder over an already built store.
    pub fn from_platform(platform: Platform) -> Result<Self> {
        Ok(Self {
            platform,
            dispatcher: Dispatcher::new()?,
        })
    }

    /// Responder for [`PlatformConfig::reference`].
    pub fn reference() -> Result<Self> {
        Self::new(PlatformConfig::reference()?)
    }

    /// Current state.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Routing table.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Run one message. Rejections come back as a non-SUCCESS status with no
    /// words; `Err` means an internal fault.
    pub fn send_message(
        &mut self,
        protocol: ProtocolId,
        message_id: u32,
        params: &[Word],
    ) -> Result<(Status, Vec<Word>)> {
        self.dispatcher
            .dispatch(&mut self.platform, protocol, message_id, params)
    }

    /// Answer a decoded request. The response echoes the request header.
    /// Only commands are answered; any other message type is NOT_SUPPORTED.
    pub fn process(&mut self, request: &Request) -> Result<Response> {
        let header = request.header;
        if header.kind() != Some(MessageType::Command) {
            log::debug!(
                "protocol {} message {:#x}: message type {} is not a command",
                header.protocol,
                header.message_id,
                header.message_type
            );
            return Ok(Response::rejected(header, Status::NotSupported));
        }
        let (status, returns) =
            self.send_message(header.protocol, u32::from(header.message_id), &request.params)?;
        Ok(Response::new(header, status, returns))
    }

    /// Decode, answer and encode one raw frame.
    pub fn process_frame(&mut self, frame: &[Word]) -> Result<Vec<Word>> {
        let request = Request::decode(frame)?;
        self.process(&request)?.encode()
    }

    /// Answer every request the channel has queued and return how many were
    /// answered. Frames too short to carry a header cannot be answered and
    /// are dropped.
    pub fn serve(&mut self, channel: &mut dyn Channel) -> Result<usize> {
        let mut answered = 0;
        while let Some(frame) = channel.receive()? {
            let response = match self.process_frame(&frame) {
                Ok(response) => response,
                Err(Error::InvalidLength { expected, actual }) => {
                    log::warn!(
                        "dropping frame: {} words, at least {} required",
                        actual,
                        expected
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };
            channel.send(&response)?;
            answered += 1;
        }
        log::debug!("channel drained: {} responses sent", answered);
        Ok(answered)
    }
}
