// scmi_responder/src/protocol/layout/voltage.rs
//! Voltage domain management protocol (0x17) word layouts.

use super::{
    DescriptorLayout, FieldSpec, MessageLayout, count_attributes_layout,
    message_attributes_layout, version_layout,
};
use crate::types::ProtocolId;

/// VOLTAGE_DOMAIN_ATTRIBUTES message id.
pub const DOMAIN_ATTRIBUTES: u32 = 0x3;
/// VOLTAGE_DESCRIBE_LEVELS message id.
pub const DESCRIBE_LEVELS: u32 = 0x4;
/// VOLTAGE_CONFIG_SET message id.
pub const CONFIG_SET: u32 = 0x5;
/// VOLTAGE_CONFIG_GET message id.
pub const CONFIG_GET: u32 = 0x6;
/// VOLTAGE_LEVEL_SET message id.
pub const LEVEL_SET: u32 = 0x7;
/// VOLTAGE_LEVEL_GET message id.
pub const LEVEL_GET: u32 = 0x8;

/// Number of voltage domains.
pub const ATTR_NUM_DOMAINS: FieldSpec = FieldSpec::new("num_domains", 0, 0, 15);
/// Reserved, bits [31:16].
pub const ATTR_RESERVED: FieldSpec = FieldSpec::new("attributes_reserved", 0, 16, 31);

/// Target domain.
pub const DA_DOMAIN_ID: FieldSpec = FieldSpec::word("domain_id", 0);
/// Attributes word, entirely reserved.
pub const DA_RESERVED: FieldSpec = FieldSpec::word("domain_attributes_reserved", 0);
/// First of the four name words.
pub const DA_NAME: FieldSpec = FieldSpec::word("name", 1);

/// Target domain.
pub const DL_DOMAIN_ID: FieldSpec = FieldSpec::word("domain_id", 0);
/// First level requested (array format only).
pub const DL_INDEX: FieldSpec = FieldSpec::word("level_index", 1);
/// Levels in this response.
pub const DL_RETURNED: FieldSpec = FieldSpec::new("num_levels_returned", 0, 0, 11);
/// Return format: 0 array, 1 triplet.
pub const DL_FORMAT: FieldSpec = FieldSpec::flag("return_format", 0, 12);
/// Reserved bits above the format flag.
pub const DL_FLAGS_RESERVED: FieldSpec = FieldSpec::new("levels_flags_reserved", 0, 13, 15);
/// Levels still to be fetched.
pub const DL_REMAINING: FieldSpec = FieldSpec::new("num_levels_remaining", 0, 16, 31);
/// One level in microvolts, signed.
pub const DL_LEVEL: FieldSpec = FieldSpec::word("voltage_level", 0);

/// Target domain.
pub const CS_DOMAIN_ID: FieldSpec = FieldSpec::word("domain_id", 0);
/// Mode: 0 off, 7 on for architectural modes.
pub const CS_MODE_ID: FieldSpec = FieldSpec::new("mode_id", 1, 0, 2);
/// Mode is implementation defined.
pub const CS_MODE_TYPE: FieldSpec = FieldSpec::flag("mode_type", 1, 3);
/// Reserved, bits [31:4].
pub const CS_RESERVED: FieldSpec = FieldSpec::new("config_reserved", 1, 4, 31);

/// Target domain.
pub const CG_DOMAIN_ID: FieldSpec = FieldSpec::word("domain_id", 0);
/// Current mode type and id.
pub const CG_CONFIG: FieldSpec = FieldSpec::new("config", 0, 0, 3);
/// Reserved, bits [31:4].
pub const CG_RESERVED: FieldSpec = FieldSpec::new("config_reserved", 0, 4, 31);

/// Target domain.
pub const LS_DOMAIN_ID: FieldSpec = FieldSpec::word("domain_id", 0);
/// Flags word, entirely reserved.
pub const LS_FLAGS_RESERVED: FieldSpec = FieldSpec::word("level_flags_reserved", 1);
/// Requested level in microvolts, signed.
pub const LS_LEVEL: FieldSpec = FieldSpec::word("voltage_level", 2);

/// Target domain.
pub const LG_DOMAIN_ID: FieldSpec = FieldSpec::word("domain_id", 0);
/// Current level in microvolts, signed.
pub const LG_LEVEL: FieldSpec = FieldSpec::word("voltage_level", 0);

const P: ProtocolId = ProtocolId::VOLTAGE;

/// Layouts of every voltage domain message, in message id order.
pub static LAYOUTS: [MessageLayout; 9] = [
    version_layout(P, "VOLTAGE_PROTOCOL_VERSION"),
    count_attributes_layout(
        P,
        "VOLTAGE_PROTOCOL_ATTRIBUTES",
        &[ATTR_NUM_DOMAINS],
        &[ATTR_RESERVED],
    ),
    message_attributes_layout(P, "VOLTAGE_PROTOCOL_MESSAGE_ATTRIBUTES"),
    MessageLayout {
        protocol: P,
        message_id: DOMAIN_ATTRIBUTES,
        name: "VOLTAGE_DOMAIN_ATTRIBUTES",
        min_params: 1,
        params: &[DA_DOMAIN_ID],
        reserved_params: &[],
        returns: &[DA_NAME],
        reserved_returns: &[DA_RESERVED],
        descriptors: None,
    },
    MessageLayout {
        protocol: P,
        message_id: DESCRIBE_LEVELS,
        name: "VOLTAGE_DESCRIBE_LEVELS",
        min_params: 2,
        params: &[DL_DOMAIN_ID, DL_INDEX],
        reserved_params: &[],
        returns: &[DL_RETURNED, DL_FORMAT, DL_REMAINING],
        reserved_returns: &[DL_FLAGS_RESERVED],
        descriptors: Some(DescriptorLayout {
            first_word: 1,
            stride: 1,
            count: DL_RETURNED,
            fields: &[DL_LEVEL],
            reserved: &[],
        }),
    },
    MessageLayout {
        protocol: P,
        message_id: CONFIG_SET,
        name: "VOLTAGE_CONFIG_SET",
        min_params: 2,
        params: &[CS_DOMAIN_ID, CS_MODE_ID, CS_MODE_TYPE],
        reserved_params: &[CS_RESERVED],
        returns: &[],
        reserved_returns: &[],
        descriptors: None,
    },
    MessageLayout {
        protocol: P,
        message_id: CONFIG_GET,
        name: "VOLTAGE_CONFIG_GET",
        min_params: 1,
        params: &[CG_DOMAIN_ID],
        reserved_params: &[],
        returns: &[CG_CONFIG],
        reserved_returns: &[CG_RESERVED],
        descriptors: None,
    },
    MessageLayout {
        protocol: P,
        message_id: LEVEL_SET,
        name: "VOLTAGE_LEVEL_SET",
        min_params: 3,
        params: &[LS_DOMAIN_ID, LS_LEVEL],
        reserved_params: &[LS_FLAGS_RESERVED],
        returns: &[],
        reserved_returns: &[],
        descriptors: None,
    },
    MessageLayout {
        protocol: P,
        message_id: LEVEL_GET,
        name: "VOLTAGE_LEVEL_GET",
        min_params: 1,
        params: &[LG_DOMAIN_ID],
        reserved_params: &[],
        returns: &[LG_LEVEL],
        reserved_returns: &[],
        descriptors: None,
    },
];
