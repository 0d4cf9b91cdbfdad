// scmi_responder/src/protocol/layout/reset.rs
//! Reset domain management protocol (0x16) word layouts.

use super::{
    FieldSpec, MessageLayout, count_attributes_layout, message_attributes_layout, version_layout,
};
use crate::types::ProtocolId;

/// RESET_DOMAIN_ATTRIBUTES message id.
pub const DOMAIN_ATTRIBUTES: u32 = 0x3;
/// RESET message id.
pub const RESET: u32 = 0x4;
/// RESET_NOTIFY message id.
pub const NOTIFY: u32 = 0x5;

/// Number of reset domains.
pub const ATTR_NUM_DOMAINS: FieldSpec = FieldSpec::new("num_domains", 0, 0, 15);
/// Reserved, bits [31:16].
pub const ATTR_RESERVED: FieldSpec = FieldSpec::new("attributes_reserved", 0, 16, 31);

/// Target domain.
pub const DA_DOMAIN_ID: FieldSpec = FieldSpec::word("domain_id", 0);
/// Reserved attribute bits.
pub const DA_RESERVED: FieldSpec = FieldSpec::new("domain_attributes_reserved", 0, 0, 29);
/// Reset notifications supported.
pub const DA_NOTIFY: FieldSpec = FieldSpec::flag("notify_support", 0, 30);
/// Asynchronous reset supported.
pub const DA_ASYNC: FieldSpec = FieldSpec::flag("async_support", 0, 31);
/// Reset latency in microseconds, all ones when unknown.
pub const DA_LATENCY: FieldSpec = FieldSpec::word("latency", 1);
/// First of the four name words.
pub const DA_NAME: FieldSpec = FieldSpec::word("name", 2);

/// Target domain.
pub const RS_DOMAIN_ID: FieldSpec = FieldSpec::word("domain_id", 0);
/// Reset completes without an explicit release.
pub const RS_AUTONOMOUS: FieldSpec = FieldSpec::flag("autonomous_reset", 1, 0);
/// Assert (1) or release (0) the reset signal.
pub const RS_EXPLICIT: FieldSpec = FieldSpec::flag("explicit_signal", 1, 1);
/// Complete the reset asynchronously.
pub const RS_ASYNC: FieldSpec = FieldSpec::flag("async_reset", 1, 2);
/// Reserved, bits [31:3] of the flags word.
pub const RS_FLAGS_RESERVED: FieldSpec = FieldSpec::new("reset_flags_reserved", 1, 3, 31);
/// Reset state; only 0 (cold reset) is architectural.
pub const RS_STATE_ID: FieldSpec = FieldSpec::new("reset_state_id", 2, 0, 30);
/// Reset state is implementation defined.
pub const RS_STATE_IMPL: FieldSpec = FieldSpec::flag("reset_state_impl_defined", 2, 31);

/// Target domain.
pub const RN_DOMAIN_ID: FieldSpec = FieldSpec::word("domain_id", 0);
/// Enable reset notifications.
pub const RN_ENABLE: FieldSpec = FieldSpec::flag("notify_enable", 1, 0);
/// Bits above the enable flag.
pub const RN_RESERVED: FieldSpec = FieldSpec::new("notify_enable_reserved", 1, 1, 31);

const P: ProtocolId = ProtocolId::RESET;

/// Layouts of every reset domain message, in message id order.
pub static LAYOUTS: [MessageLayout; 6] = [
    version_layout(P, "RESET_PROTOCOL_VERSION"),
    count_attributes_layout(
        P,
        "RESET_PROTOCOL_ATTRIBUTES",
        &[ATTR_NUM_DOMAINS],
        &[ATTR_RESERVED],
    ),
    message_attributes_layout(P, "RESET_PROTOCOL_MESSAGE_ATTRIBUTES"),
    MessageLayout {
        protocol: P,
        message_id: DOMAIN_ATTRIBUTES,
        name: "RESET_DOMAIN_ATTRIBUTES",
        min_params: 1,
        params: &[DA_DOMAIN_ID],
        reserved_params: &[],
        returns: &[DA_NOTIFY, DA_ASYNC, DA_LATENCY, DA_NAME],
        reserved_returns: &[DA_RESERVED],
        descriptors: None,
    },
    MessageLayout {
        protocol: P,
        message_id: RESET,
        name: "RESET",
        min_params: 3,
        params: &[
            RS_DOMAIN_ID,
            RS_AUTONOMOUS,
            RS_EXPLICIT,
            RS_ASYNC,
            RS_STATE_ID,
            RS_STATE_IMPL,
        ],
        reserved_params: &[RS_FLAGS_RESERVED],
        returns: &[],
        reserved_returns: &[],
        descriptors: None,
    },
    MessageLayout {
        protocol: P,
        message_id: NOTIFY,
        name: "RESET_NOTIFY",
        min_params: 2,
        params: &[RN_DOMAIN_ID, RN_ENABLE],
        reserved_params: &[RN_RESERVED],
        returns: &[],
        reserved_returns: &[],
        descriptors: None,
    },
];
