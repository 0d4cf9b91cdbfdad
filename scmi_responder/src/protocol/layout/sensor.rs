// scmi_responder/src/protocol/layout/sensor.rs
//! Sensor management protocol (0x15) word layouts.

use super::{
    DescriptorLayout, FieldSpec, MessageLayout, count_attributes_layout,
    message_attributes_layout, version_layout,
};
use crate::constants::{AXIS_DESC_WORDS, SENSOR_DESC_WORDS};
use crate::types::ProtocolId;

/// SENSOR_DESCRIPTION_GET message id.
pub const DESCRIPTION_GET: u32 = 0x3;
/// SENSOR_TRIP_POINT_NOTIFY message id.
pub const TRIP_POINT_NOTIFY: u32 = 0x4;
/// SENSOR_TRIP_POINT_CONFIG message id.
pub const TRIP_POINT_CONFIG: u32 = 0x5;
/// SENSOR_READING_GET message id.
pub const READING_GET: u32 = 0x6;
/// SENSOR_AXIS_DESCRIPTION_GET message id.
pub const AXIS_DESCRIPTION_GET: u32 = 0x7;
/// SENSOR_LIST_UPDATE_INTERVALS message id.
pub const LIST_UPDATE_INTERVALS: u32 = 0x8;
/// SENSOR_CONFIG_GET message id.
pub const CONFIG_GET: u32 = 0x9;
/// SENSOR_CONFIG_SET message id.
pub const CONFIG_SET: u32 = 0xA;
/// SENSOR_CONTINUOUS_UPDATE_NOTIFY message id.
pub const CONTINUOUS_UPDATE_NOTIFY: u32 = 0xB;

// PROTOCOL_ATTRIBUTES
/// Number of sensors.
pub const ATTR_NUM_SENSORS: FieldSpec = FieldSpec::new("num_sensors", 0, 0, 15);
/// Maximum outstanding asynchronous readings.
pub const ATTR_MAX_PENDING_ASYNC: FieldSpec = FieldSpec::new("max_pending_async", 0, 16, 23);
/// Reserved, bits [31:24] of the attributes word.
pub const ATTR_RESERVED: FieldSpec = FieldSpec::new("attributes_reserved", 0, 24, 31);
/// Low word of the shared statistics address.
pub const ATTR_STATS_ADDR_LOW: FieldSpec = FieldSpec::word("stats_addr_low", 1);
/// High word of the shared statistics address.
pub const ATTR_STATS_ADDR_HIGH: FieldSpec = FieldSpec::word("stats_addr_high", 2);
/// Length of the statistics region in bytes.
pub const ATTR_STATS_LEN: FieldSpec = FieldSpec::word("stats_len", 3);

// SENSOR_DESCRIPTION_GET
/// First descriptor requested.
pub const DESC_INDEX: FieldSpec = FieldSpec::word("desc_index", 0);
/// Descriptors in this response.
pub const DESC_RETURNED: FieldSpec = FieldSpec::new("num_desc_returned", 0, 0, 11);
/// Reserved bits between the two counts.
pub const DESC_FLAGS_RESERVED: FieldSpec = FieldSpec::new("num_desc_reserved", 0, 12, 15);
/// Descriptors still to be fetched.
pub const DESC_REMAINING: FieldSpec = FieldSpec::new("num_desc_remaining", 0, 16, 31);

// sensor descriptor, relative to the descriptor start
/// Sensor identifier.
pub const DESC_ID: FieldSpec = FieldSpec::word("sensor_id", 0);
/// Trip points the sensor supports.
pub const DESC_TRIP_POINTS: FieldSpec = FieldSpec::new("num_trip_points", 1, 0, 7);
/// Extended attributes present.
pub const DESC_EXT_ATTR: FieldSpec = FieldSpec::flag("ext_attr_support", 1, 8);
/// Timestamped readings supported.
pub const DESC_TIMESTAMP: FieldSpec = FieldSpec::flag("timestamp_support", 1, 9);
/// Power-of-ten exponent of the timestamp unit.
pub const DESC_TIMESTAMP_EXP: FieldSpec = FieldSpec::new("timestamp_exponent", 1, 10, 14);
/// Reserved, bits [29:15] of `attributes_low`.
pub const DESC_ATTR_LOW_RESERVED: FieldSpec = FieldSpec::new("attr_low_reserved", 1, 15, 29);
/// Continuous update notifications supported.
pub const DESC_CONT_NOTIFY: FieldSpec = FieldSpec::flag("cont_update_notify", 1, 30);
/// Asynchronous reads supported.
pub const DESC_ASYNC_READ: FieldSpec = FieldSpec::flag("async_read_support", 1, 31);
/// Sensor type (unit class).
pub const DESC_TYPE: FieldSpec = FieldSpec::new("sensor_type", 2, 0, 7);
/// Sensor exposes axes.
pub const DESC_AXIS_SUPPORT: FieldSpec = FieldSpec::flag("axis_support", 2, 8);
/// Reserved, bits [10:9] of `attributes_high`.
pub const DESC_ATTR_HIGH_RESERVED_LOW: FieldSpec =
    FieldSpec::new("attr_high_reserved_low", 2, 9, 10);
/// Signed power-of-ten exponent of the unit.
pub const DESC_UNIT_EXP: FieldSpec = FieldSpec::new("unit_exponent", 2, 11, 15);
/// Number of axes.
pub const DESC_NUM_AXES: FieldSpec = FieldSpec::new("num_axes", 2, 16, 21);
/// Reserved, bits [31:22] of `attributes_high`.
pub const DESC_ATTR_HIGH_RESERVED: FieldSpec = FieldSpec::new("attr_high_reserved", 2, 22, 31);
/// First of the four name words.
pub const DESC_NAME: FieldSpec = FieldSpec::word("name", 3);
/// Power drawn by the sensor, in microwatts.
pub const DESC_POWER: FieldSpec = FieldSpec::word("power", 7);
/// Resolution value and exponent.
pub const DESC_RESOLUTION: FieldSpec = FieldSpec::word("resolution", 8);
/// Minimum range, low word.
pub const DESC_MIN_LOW: FieldSpec = FieldSpec::word("min_range_low", 9);
/// Minimum range, high word.
pub const DESC_MIN_HIGH: FieldSpec = FieldSpec::word("min_range_high", 10);
/// Maximum range, low word.
pub const DESC_MAX_LOW: FieldSpec = FieldSpec::word("max_range_low", 11);
/// Maximum range, high word.
pub const DESC_MAX_HIGH: FieldSpec = FieldSpec::word("max_range_high", 12);

// SENSOR_TRIP_POINT_NOTIFY
/// Target sensor.
pub const TPN_SENSOR_ID: FieldSpec = FieldSpec::word("sensor_id", 0);
/// Enable trip point notifications.
pub const TPN_ENABLE: FieldSpec = FieldSpec::flag("notify_enable", 1, 0);
/// Event control bits above the enable flag.
pub const TPN_RESERVED: FieldSpec = FieldSpec::new("event_control_reserved", 1, 1, 31);

// SENSOR_TRIP_POINT_CONFIG
/// Target sensor.
pub const TPC_SENSOR_ID: FieldSpec = FieldSpec::word("sensor_id", 0);
/// Crossing direction; 0 disables the trip point.
pub const TPC_EVENT: FieldSpec = FieldSpec::new("event_control", 1, 0, 1);
/// Reserved, bits [3:2] of the event control word.
pub const TPC_RESERVED_LOW: FieldSpec = FieldSpec::new("ev_ctrl_reserved_low", 1, 2, 3);
/// Trip point being configured.
pub const TPC_TRIP_ID: FieldSpec = FieldSpec::new("trip_point_id", 1, 4, 11);
/// Reserved, bits [31:12] of the event control word.
pub const TPC_RESERVED_HIGH: FieldSpec = FieldSpec::new("ev_ctrl_reserved_high", 1, 12, 31);
/// Threshold, low word.
pub const TPC_VALUE_LOW: FieldSpec = FieldSpec::word("trip_point_value_low", 2);
/// Threshold, high word.
pub const TPC_VALUE_HIGH: FieldSpec = FieldSpec::word("trip_point_value_high", 3);

// SENSOR_READING_GET
/// Target sensor.
pub const RG_SENSOR_ID: FieldSpec = FieldSpec::word("sensor_id", 0);
/// Request an asynchronous reading.
pub const RG_ASYNC: FieldSpec = FieldSpec::flag("async_flag", 1, 0);
/// Reading flags above the async flag.
pub const RG_RESERVED: FieldSpec = FieldSpec::new("reading_flags_reserved", 1, 1, 31);
/// Reading value, low word (per reading).
pub const RG_VALUE_LOW: FieldSpec = FieldSpec::word("value_low", 0);
/// Reading value, high word (per reading).
pub const RG_VALUE_HIGH: FieldSpec = FieldSpec::word("value_high", 1);
/// Timestamp, low word (per reading).
pub const RG_TIMESTAMP_LOW: FieldSpec = FieldSpec::word("timestamp_low", 2);
/// Timestamp, high word (per reading).
pub const RG_TIMESTAMP_HIGH: FieldSpec = FieldSpec::word("timestamp_high", 3);

// SENSOR_AXIS_DESCRIPTION_GET
/// Target sensor.
pub const AX_SENSOR_ID: FieldSpec = FieldSpec::word("sensor_id", 0);
/// First axis requested.
pub const AX_INDEX: FieldSpec = FieldSpec::word("axis_desc_index", 1);
/// Axis descriptors in this response.
pub const AX_RETURNED: FieldSpec = FieldSpec::new("num_axis_returned", 0, 0, 5);
/// Reserved bits between the two counts.
pub const AX_FLAGS_RESERVED: FieldSpec = FieldSpec::new("num_axis_reserved", 0, 6, 25);
/// Axis descriptors still to be fetched.
pub const AX_REMAINING: FieldSpec = FieldSpec::new("num_axis_remaining", 0, 26, 31);

// axis descriptor, relative to the descriptor start
/// Axis identifier.
pub const AX_ID: FieldSpec = FieldSpec::word("axis_id", 0);
/// Reserved, bits [7:0] of the axis `attributes_low`.
pub const AX_ATTR_LOW_RESERVED_LOW: FieldSpec = FieldSpec::new("axis_low_reserved_low", 1, 0, 7);
/// Extended attributes present.
pub const AX_EXT_ATTR: FieldSpec = FieldSpec::flag("ext_attr_support", 1, 8);
/// Reserved, bits [31:9] of the axis `attributes_low`.
pub const AX_ATTR_LOW_RESERVED_HIGH: FieldSpec =
    FieldSpec::new("axis_low_reserved_high", 1, 9, 31);
/// Axis type.
pub const AX_TYPE: FieldSpec = FieldSpec::new("axis_type", 2, 0, 7);
/// Reserved, bits [10:8] of the axis `attributes_high`.
pub const AX_ATTR_HIGH_RESERVED_LOW: FieldSpec =
    FieldSpec::new("axis_high_reserved_low", 2, 8, 10);
/// Signed power-of-ten exponent of the unit.
pub const AX_UNIT_EXP: FieldSpec = FieldSpec::new("unit_exponent", 2, 11, 15);
/// Reserved, bits [31:16] of the axis `attributes_high`.
pub const AX_ATTR_HIGH_RESERVED: FieldSpec = FieldSpec::new("axis_high_reserved", 2, 16, 31);
/// First of the four name words.
pub const AX_NAME: FieldSpec = FieldSpec::word("name", 3);
/// Resolution value and exponent.
pub const AX_RESOLUTION: FieldSpec = FieldSpec::word("resolution", 7);
/// Minimum range, low word.
pub const AX_MIN_LOW: FieldSpec = FieldSpec::word("min_range_low", 8);
/// Minimum range, high word.
pub const AX_MIN_HIGH: FieldSpec = FieldSpec::word("min_range_high", 9);
/// Maximum range, low word.
pub const AX_MAX_LOW: FieldSpec = FieldSpec::word("max_range_low", 10);
/// Maximum range, high word.
pub const AX_MAX_HIGH: FieldSpec = FieldSpec::word("max_range_high", 11);

// SENSOR_LIST_UPDATE_INTERVALS
/// Target sensor.
pub const UI_SENSOR_ID: FieldSpec = FieldSpec::word("sensor_id", 0);
/// First interval requested (array format only).
pub const UI_INDEX: FieldSpec = FieldSpec::word("index", 1);
/// Intervals in this response.
pub const UI_RETURNED: FieldSpec = FieldSpec::new("num_intervals_returned", 0, 0, 11);
/// Return format: 0 array, 1 triplet.
pub const UI_FORMAT: FieldSpec = FieldSpec::flag("return_format", 0, 12);
/// Reserved bits above the format flag.
pub const UI_FLAGS_RESERVED: FieldSpec = FieldSpec::new("intervals_flags_reserved", 0, 13, 15);
/// Intervals still to be fetched.
pub const UI_REMAINING: FieldSpec = FieldSpec::new("num_intervals_remaining", 0, 16, 31);
/// Power-of-ten exponent of one interval.
pub const UI_EXPONENT: FieldSpec = FieldSpec::new("interval_exponent", 0, 0, 4);
/// Interval mantissa in seconds.
pub const UI_SECONDS: FieldSpec = FieldSpec::new("interval_seconds", 0, 5, 20);
/// Reserved, bits [31:21] of an interval word.
pub const UI_ENTRY_RESERVED: FieldSpec = FieldSpec::new("interval_reserved", 0, 21, 31);

// SENSOR_CONFIG_GET
/// Target sensor.
pub const CG_SENSOR_ID: FieldSpec = FieldSpec::word("sensor_id", 0);
/// Sensor enabled.
pub const CG_ENABLED: FieldSpec = FieldSpec::flag("sensor_state", 0, 0);
/// Timestamp reporting enabled.
pub const CG_TIMESTAMP: FieldSpec = FieldSpec::flag("timestamp_reporting", 0, 1);
/// Reserved, bits [10:2] of the returned config.
pub const CG_RESERVED: FieldSpec = FieldSpec::new("config_reserved", 0, 2, 10);
/// Current update interval exponent.
pub const CG_INTERVAL_EXP: FieldSpec = FieldSpec::new("update_interval_exponent", 0, 11, 15);
/// Current update interval mantissa.
pub const CG_INTERVAL_SECS: FieldSpec = FieldSpec::new("update_interval_seconds", 0, 16, 31);

// SENSOR_CONFIG_SET
/// Target sensor.
pub const CS_SENSOR_ID: FieldSpec = FieldSpec::word("sensor_id", 0);
/// Enable the sensor.
pub const CS_ENABLED: FieldSpec = FieldSpec::flag("sensor_state", 1, 0);
/// Enable timestamp reporting.
pub const CS_TIMESTAMP: FieldSpec = FieldSpec::flag("timestamp_reporting", 1, 1);
/// Reserved, bits [8:2] of the requested config.
pub const CS_RESERVED: FieldSpec = FieldSpec::new("config_reserved", 1, 2, 8);
/// Rounding onto the interval list: 0 down, 1 up, 2 auto.
pub const CS_ROUNDING: FieldSpec = FieldSpec::new("round_up_down", 1, 9, 10);
/// Requested update interval exponent.
pub const CS_INTERVAL_EXP: FieldSpec = FieldSpec::new("update_interval_exponent", 1, 11, 15);
/// Requested update interval mantissa; 0 keeps the current one.
pub const CS_INTERVAL_SECS: FieldSpec = FieldSpec::new("update_interval_seconds", 1, 16, 31);

// SENSOR_CONTINUOUS_UPDATE_NOTIFY
/// Target sensor.
pub const CN_SENSOR_ID: FieldSpec = FieldSpec::word("sensor_id", 0);
/// Enable continuous update notifications.
pub const CN_ENABLE: FieldSpec = FieldSpec::flag("notify_enable", 1, 0);
/// Bits above the enable flag.
pub const CN_RESERVED: FieldSpec = FieldSpec::new("notify_enable_reserved", 1, 1, 31);

const P: ProtocolId = ProtocolId::SENSOR;

/// Layouts of every sensor message, in message id order.
pub static LAYOUTS: [MessageLayout; 12] = [
    version_layout(P, "SENSOR_PROTOCOL_VERSION"),
    count_attributes_layout(
        P,
        "SENSOR_PROTOCOL_ATTRIBUTES",
        &[
            ATTR_NUM_SENSORS,
            ATTR_MAX_PENDING_ASYNC,
            ATTR_STATS_ADDR_LOW,
            ATTR_STATS_ADDR_HIGH,
            ATTR_STATS_LEN,
        ],
        &[ATTR_RESERVED],
    ),
    message_attributes_layout(P, "SENSOR_PROTOCOL_MESSAGE_ATTRIBUTES"),
    MessageLayout {
        protocol: P,
        message_id: DESCRIPTION_GET,
        name: "SENSOR_DESCRIPTION_GET",
        min_params: 1,
        params: &[DESC_INDEX],
        reserved_params: &[],
        returns: &[DESC_RETURNED, DESC_REMAINING],
        reserved_returns: &[DESC_FLAGS_RESERVED],
        descriptors: Some(DescriptorLayout {
            first_word: 1,
            stride: SENSOR_DESC_WORDS,
            count: DESC_RETURNED,
            fields: &[
                DESC_ID,
                DESC_TRIP_POINTS,
                DESC_EXT_ATTR,
                DESC_TIMESTAMP,
                DESC_TIMESTAMP_EXP,
                DESC_CONT_NOTIFY,
                DESC_ASYNC_READ,
                DESC_TYPE,
                DESC_AXIS_SUPPORT,
                DESC_UNIT_EXP,
                DESC_NUM_AXES,
                DESC_NAME,
                DESC_POWER,
                DESC_RESOLUTION,
                DESC_MIN_LOW,
                DESC_MIN_HIGH,
                DESC_MAX_LOW,
                DESC_MAX_HIGH,
            ],
            reserved: &[
                DESC_ATTR_LOW_RESERVED,
                DESC_ATTR_HIGH_RESERVED_LOW,
                DESC_ATTR_HIGH_RESERVED,
            ],
        }),
    },
    MessageLayout {
        protocol: P,
        message_id: TRIP_POINT_NOTIFY,
        name: "SENSOR_TRIP_POINT_NOTIFY",
        min_params: 2,
        params: &[TPN_SENSOR_ID, TPN_ENABLE],
        reserved_params: &[TPN_RESERVED],
        returns: &[],
        reserved_returns: &[],
        descriptors: None,
    },
    MessageLayout {
        protocol: P,
        message_id: TRIP_POINT_CONFIG,
        name: "SENSOR_TRIP_POINT_CONFIG",
        min_params: 4,
        params: &[
            TPC_SENSOR_ID,
            TPC_EVENT,
            TPC_TRIP_ID,
            TPC_VALUE_LOW,
            TPC_VALUE_HIGH,
        ],
        reserved_params: &[TPC_RESERVED_LOW, TPC_RESERVED_HIGH],
        returns: &[],
        reserved_returns: &[],
        descriptors: None,
    },
    MessageLayout {
        protocol: P,
        message_id: READING_GET,
        name: "SENSOR_READING_GET",
        min_params: 2,
        params: &[RG_SENSOR_ID, RG_ASYNC],
        reserved_params: &[RG_RESERVED],
        returns: &[RG_VALUE_LOW, RG_VALUE_HIGH, RG_TIMESTAMP_LOW, RG_TIMESTAMP_HIGH],
        reserved_returns: &[],
        descriptors: None,
    },
    MessageLayout {
        protocol: P,
        message_id: AXIS_DESCRIPTION_GET,
        name: "SENSOR_AXIS_DESCRIPTION_GET",
        min_params: 2,
        params: &[AX_SENSOR_ID, AX_INDEX],
        reserved_params: &[],
        returns: &[AX_RETURNED, AX_REMAINING],
        reserved_returns: &[AX_FLAGS_RESERVED],
        descriptors: Some(DescriptorLayout {
            first_word: 1,
            stride: AXIS_DESC_WORDS,
            count: AX_RETURNED,
            fields: &[
                AX_ID,
                AX_EXT_ATTR,
                AX_TYPE,
                AX_UNIT_EXP,
                AX_NAME,
                AX_RESOLUTION,
                AX_MIN_LOW,
                AX_MIN_HIGH,
                AX_MAX_LOW,
                AX_MAX_HIGH,
            ],
            reserved: &[
                AX_ATTR_LOW_RESERVED_LOW,
                AX_ATTR_LOW_RESERVED_HIGH,
                AX_ATTR_HIGH_RESERVED_LOW,
                AX_ATTR_HIGH_RESERVED,
            ],
        }),
    },
    MessageLayout {
        protocol: P,
        message_id: LIST_UPDATE_INTERVALS,
        name: "SENSOR_LIST_UPDATE_INTERVALS",
        min_params: 2,
        params: &[UI_SENSOR_ID, UI_INDEX],
        reserved_params: &[],
        returns: &[UI_RETURNED, UI_FORMAT, UI_REMAINING],
        reserved_returns: &[UI_FLAGS_RESERVED],
        descriptors: Some(DescriptorLayout {
            first_word: 1,
            stride: 1,
            count: UI_RETURNED,
            fields: &[UI_EXPONENT, UI_SECONDS],
            reserved: &[UI_ENTRY_RESERVED],
        }),
    },
    MessageLayout {
        protocol: P,
        message_id: CONFIG_GET,
        name: "SENSOR_CONFIG_GET",
        min_params: 1,
        params: &[CG_SENSOR_ID],
        reserved_params: &[],
        returns: &[CG_ENABLED, CG_TIMESTAMP, CG_INTERVAL_EXP, CG_INTERVAL_SECS],
        reserved_returns: &[CG_RESERVED],
        descriptors: None,
    },
    MessageLayout {
        protocol: P,
        message_id: CONFIG_SET,
        name: "SENSOR_CONFIG_SET",
        min_params: 2,
        params: &[
            CS_SENSOR_ID,
            CS_ENABLED,
            CS_TIMESTAMP,
            CS_ROUNDING,
            CS_INTERVAL_EXP,
            CS_INTERVAL_SECS,
        ],
        reserved_params: &[CS_RESERVED],
        returns: &[],
        reserved_returns: &[],
        descriptors: None,
    },
    MessageLayout {
        protocol: P,
        message_id: CONTINUOUS_UPDATE_NOTIFY,
        name: "SENSOR_CONTINUOUS_UPDATE_NOTIFY",
        min_params: 2,
        params: &[CN_SENSOR_ID, CN_ENABLE],
        reserved_params: &[CN_RESERVED],
        returns: &[],
        reserved_returns: &[],
        descriptors: None,
    },
];
