// scmi_responder/src/protocol/dispatch.rs
//! Message routing.
//!
//! The dispatcher pairs every [`Command`] with its [`MessageLayout`] once, at
//! construction, and refuses to build when the two tables disagree. A call
//! then runs: route lookup, mandatory parameter count, handler (which applies
//! the precedence pipeline), and finally packs the status with the return
//! words.

use crate::platform::Platform;
use crate::protocol::commands::Command;
use crate::protocol::layout::{self, MessageLayout};
use crate::protocol::status::{Fault, Status};
use crate::protocol::words::Params;
use crate::types::ProtocolId;
use crate::{Error, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct Route {
    command: Command,
    layout: &'static MessageLayout,
}

/// Routing table keyed by `(protocol, message_id)`.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    routes: HashMap<(ProtocolId, u32), Route>,
}

impl Dispatcher {
    /// Build the routing table. Fails when a command has no layout, a layout
    /// has no command, a route is registered twice or a layout is
    /// malformed.
    pub fn new() -> Result<Self> {
        let mut routes = HashMap::new();
        for command in Command::all() {
            let key = (command.protocol(), command.message_id());
            let layout = layout::lookup(key.0, key.1).ok_or(Error::LayoutMissing {
                protocol: key.0.as_u8(),
                message: key.1,
            })?;
            layout.validate()?;
            if routes.insert(key, Route { command, layout }).is_some() {
                return Err(Error::DuplicateRoute {
                    protocol: key.0.as_u8(),
                    message: key.1,
                });
            }
        }
        if let Some(l) = layout::registry().find(|l| !routes.contains_key(&(l.protocol, l.message_id))) {
            return Err(Error::UnroutedLayout {
                protocol: l.protocol.as_u8(),
                message: l.message_id,
            });
        }
        log::debug!("dispatcher ready: {} routes", routes.len());
        Ok(Self { routes })
    }

    /// Number of routed messages.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// True when at least one message of `protocol` is routed.
    pub fn supports_protocol(&self, protocol: ProtocolId) -> bool {
        self.routes.keys().any(|(p, _)| *p == protocol)
    }

    /// Run one message against `platform`.
    ///
    /// Protocol outcomes come back as `Ok((status, words))`; a non-SUCCESS
    /// status always carries zero words. `Err` is reserved for internal
    /// faults such as a value that does not fit its field.
    pub fn dispatch(
        &self,
        platform: &mut Platform,
        protocol: ProtocolId,
        message_id: u32,
        params: &[u32],
    ) -> Result<(Status, Vec<u32>)> {
        #[cfg(feature = "diagnostics")]
        log::trace!(
            "protocol {} message {:#x} params [{}]",
            protocol,
            message_id,
            crate::utils::words_to_hex(params)
        );

        let Some(route) = self.routes.get(&(protocol, message_id)) else {
            let status = if self.supports_protocol(protocol) {
                Status::NotFound
            } else {
                Status::NotSupported
            };
            log::debug!("protocol {} message {:#x}: unrouted -> {}", protocol, message_id, status);
            return Ok((status, Vec::new()));
        };

        if params.len() < route.layout.min_params {
            log::debug!(
                "{}: {} parameter words, {} required -> {}",
                route.layout.name,
                params.len(),
                route.layout.min_params,
                Status::InvalidParameters
            );
            return Ok((Status::InvalidParameters, Vec::new()));
        }

        match route.command.handle(platform, Params::new(params)) {
            Ok(returns) => {
                let words = returns.into_words();
                debug_assert!(
                    route.layout.reserved_violations(&words).is_empty(),
                    "{}: reserved return bits set: {:?}",
                    route.layout.name,
                    route.layout.reserved_violations(&words)
                );
                log::debug!("{}: {} ({} words)", route.layout.name, Status::Success, words.len());
                #[cfg(feature = "diagnostics")]
                log::trace!("{}: returns [{}]", route.layout.name, crate::utils::words_to_hex(&words));
                Ok((Status::Success, words))
            }
            Err(Fault::Rejected(status)) => {
                log::debug!("{}: {}", route.layout.name, status);
                Ok((status, Vec::new()))
            }
            Err(Fault::Internal(err)) => {
                log::error!("{}: internal fault: {}", route.layout.name, err);
                Err(err)
            }
        }
    }
}
