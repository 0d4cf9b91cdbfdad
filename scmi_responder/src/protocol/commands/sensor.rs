// scmi_responder/src/protocol/commands/sensor.rs
//! Sensor management protocol handlers.

use super::base;
use crate::Result;
use crate::constants::{
    AXIS_DESC_WORDS, PROTOCOL_ATTRIBUTES_MSG_ID, PROTOCOL_MESSAGE_ATTRIBUTES_MSG_ID,
    PROTOCOL_VERSION_MSG_ID, READING_WORDS, SENSOR_DESC_WORDS, SENSOR_PROTOCOL_VERSION,
};
use crate::config::Reading;
use crate::platform::{DiscreteList, Platform, Rounding, Sensor, TripPoint};
use crate::protocol::layout::sensor::*;
use crate::protocol::pagination::{EnumerationCursor, Page, descriptor_base, max_batch};
use crate::protocol::layout::FieldSpec;
use crate::protocol::status::{Checks, Fault, Handled, Status, resolve};
use crate::protocol::words::{Params, Returns};
use crate::types::{UpdateInterval, join_i64};

/// Sensor protocol messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorCommand {
    /// PROTOCOL_VERSION
    Version,
    /// PROTOCOL_ATTRIBUTES
    Attributes,
    /// PROTOCOL_MESSAGE_ATTRIBUTES
    MessageAttributes,
    /// SENSOR_DESCRIPTION_GET
    DescriptionGet,
    /// SENSOR_TRIP_POINT_NOTIFY
    TripPointNotify,
    /// SENSOR_TRIP_POINT_CONFIG
    TripPointConfig,
    /// SENSOR_READING_GET
    ReadingGet,
    /// SENSOR_AXIS_DESCRIPTION_GET
    AxisDescriptionGet,
    /// SENSOR_LIST_UPDATE_INTERVALS
    ListUpdateIntervals,
    /// SENSOR_CONFIG_GET
    ConfigGet,
    /// SENSOR_CONFIG_SET
    ConfigSet,
    /// SENSOR_CONTINUOUS_UPDATE_NOTIFY
    ContinuousUpdateNotify,
}

impl SensorCommand {
    /// Every message, in message id order.
    pub const ALL: [Self; 12] = [
        Self::Version,
        Self::Attributes,
        Self::MessageAttributes,
        Self::DescriptionGet,
        Self::TripPointNotify,
        Self::TripPointConfig,
        Self::ReadingGet,
        Self::AxisDescriptionGet,
        Self::ListUpdateIntervals,
        Self::ConfigGet,
        Self::ConfigSet,
        Self::ContinuousUpdateNotify,
    ];

    /// Wire message id.
    pub fn message_id(self) -> u32 {
        match self {
            Self::Version => PROTOCOL_VERSION_MSG_ID,
            Self::Attributes => PROTOCOL_ATTRIBUTES_MSG_ID,
            Self::MessageAttributes => PROTOCOL_MESSAGE_ATTRIBUTES_MSG_ID,
            Self::DescriptionGet => DESCRIPTION_GET,
            Self::TripPointNotify => TRIP_POINT_NOTIFY,
            Self::TripPointConfig => TRIP_POINT_CONFIG,
            Self::ReadingGet => READING_GET,
            Self::AxisDescriptionGet => AXIS_DESCRIPTION_GET,
            Self::ListUpdateIntervals => LIST_UPDATE_INTERVALS,
            Self::ConfigGet => CONFIG_GET,
            Self::ConfigSet => CONFIG_SET,
            Self::ContinuousUpdateNotify => CONTINUOUS_UPDATE_NOTIFY,
        }
    }

    /// Message with wire id `id`.
    pub fn from_message_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.message_id() == id)
    }

    /// Run the handler against `platform`.
    pub fn handle(self, platform: &mut Platform, p: Params<'_>) -> Handled {
        match self {
            Self::Version => base::version(SENSOR_PROTOCOL_VERSION),
            Self::Attributes => attributes(platform),
            Self::MessageAttributes => {
                base::message_attributes(p, |id| Self::from_message_id(id).is_some())
            }
            Self::DescriptionGet => description_get(platform, p),
            Self::TripPointNotify => trip_point_notify(platform, p),
            Self::TripPointConfig => trip_point_config(platform, p),
            Self::ReadingGet => reading_get(platform, p),
            Self::AxisDescriptionGet => axis_description_get(platform, p),
            Self::ListUpdateIntervals => list_update_intervals(platform, p),
            Self::ConfigGet => config_get(platform, p),
            Self::ConfigSet => config_set(platform, p),
            Self::ContinuousUpdateNotify => continuous_update_notify(platform, p),
        }
    }
}

/// Stage 1 for every per-sensor message.
fn sensor_mut<'a>(
    platform: &'a mut Platform,
    p: Params<'_>,
    field: FieldSpec,
) -> std::result::Result<(usize, &'a mut Sensor), Fault> {
    let id = resolve(p.id(field), platform.sensors.count(), field.name)?;
    let sensor = platform
        .sensors
        .descriptor_mut(id)
        .ok_or(Status::NotFound)?;
    Ok((id, sensor))
}

fn attributes(platform: &Platform) -> Handled {
    let proto = platform.sensor_protocol();
    let mut r = Returns::with_capacity(4);
    r.set_usize(ATTR_NUM_SENSORS, platform.sensors.count())?;
    r.set(ATTR_MAX_PENDING_ASYNC, u32::from(proto.max_pending_async))?;
    r.set(ATTR_STATS_ADDR_LOW, proto.stats_address as u32)?;
    r.set(ATTR_STATS_ADDR_HIGH, (proto.stats_address >> 32) as u32)?;
    r.set(ATTR_STATS_LEN, proto.stats_len)?;
    Ok(r)
}

fn write_sensor_descriptor(r: &mut Returns, base: usize, id: usize, sensor: &Sensor) -> Result<()> {
    let c = sensor.config();
    r.set_usize(DESC_ID.shifted(base), id)?;
    r.set(DESC_TRIP_POINTS.shifted(base), u32::from(c.trip_points))?;
    r.set_flag(DESC_EXT_ATTR.shifted(base), c.extended_attributes)?;
    r.set_flag(DESC_TIMESTAMP.shifted(base), sensor.timestamp_support())?;
    if let Some(exp) = c.timestamp_exponent {
        r.set_signed(DESC_TIMESTAMP_EXP.shifted(base), i32::from(exp))?;
    }
    r.set_flag(DESC_CONT_NOTIFY.shifted(base), c.continuous_notify)?;
    r.set_flag(DESC_ASYNC_READ.shifted(base), c.async_read)?;
    r.set(DESC_TYPE.shifted(base), u32::from(c.sensor_type))?;
    r.set_flag(DESC_AXIS_SUPPORT.shifted(base), sensor.axis_support())?;
    r.set_signed(DESC_UNIT_EXP.shifted(base), i32::from(c.unit_exponent))?;
    r.set_usize(DESC_NUM_AXES.shifted(base), sensor.num_axes())?;
    r.set_name(DESC_NAME.shifted(base), &c.name)?;
    r.set(DESC_POWER.shifted(base), c.power)?;
    r.set(DESC_RESOLUTION.shifted(base), c.resolution.encode()?)?;
    r.set_i64(DESC_MIN_LOW.shifted(base), DESC_MIN_HIGH.shifted(base), c.min_range)?;
    r.set_i64(DESC_MAX_LOW.shifted(base), DESC_MAX_HIGH.shifted(base), c.max_range)
}

fn description_get(platform: &Platform, p: Params<'_>) -> Handled {
    let total = platform.sensors.count();
    let cursor = EnumerationCursor::new(p.id(DESC_INDEX), total);
    Checks::new()
        .selector(cursor.start_index <= total, "desc_index")
        .finish()?;
    let page = cursor
        .page(max_batch(platform.return_budget_words(), SENSOR_DESC_WORDS))
        .ok_or(Status::InvalidParameters)?;
    let mut r = Returns::with_capacity(1 + page.returned * SENSOR_DESC_WORDS);
    r.set_usize(DESC_RETURNED, page.returned)?;
    r.set_usize(DESC_REMAINING, page.remaining)?;
    let ids = cursor.range(&page);
    for (i, sensor) in platform.sensors.slice(ids.clone()).iter().enumerate() {
        let base = descriptor_base(i, SENSOR_DESC_WORDS);
        write_sensor_descriptor(&mut r, base, ids.start + i, sensor)?;
    }
    Ok(r)
}

fn trip_point_notify(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (id, sensor) = sensor_mut(platform, p, TPN_SENSOR_ID)?;
    Checks::new()
        .selector(p.is_clear(TPN_RESERVED), "event_control_reserved")
        .capability(sensor.trip_point_count() > 0, "num_trip_points")
        .finish()?;
    sensor.state.trip_notify = p.flag(TPN_ENABLE);
    log::info!("sensor {}: trip point notifications {}", id, sensor.state.trip_notify);
    Ok(Returns::new())
}

fn trip_point_config(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (id, sensor) = sensor_mut(platform, p, TPC_SENSOR_ID)?;
    let count = sensor.trip_point_count();
    let trip = p.get(TPC_TRIP_ID) as usize;
    Checks::new()
        .selector(
            p.is_clear(TPC_RESERVED_LOW) && p.is_clear(TPC_RESERVED_HIGH),
            "event_control_reserved",
        )
        .selector(count == 0 || trip < count, "trip_point_id")
        .capability(count > 0, "num_trip_points")
        .finish()?;
    let event = p.get(TPC_EVENT) as u8;
    let value = join_i64(p.get(TPC_VALUE_LOW), p.get(TPC_VALUE_HIGH));
    let slot = sensor
        .state
        .trip_points
        .get_mut(trip)
        .ok_or(Status::InvalidParameters)?;
    *slot = (event != 0).then_some(TripPoint { event, value });
    log::info!("sensor {}: trip point {} set to {:?}", id, trip, slot);
    Ok(Returns::new())
}

fn reading_get(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (_, sensor) = sensor_mut(platform, p, RG_SENSOR_ID)?;
    let is_async = p.flag(RG_ASYNC);
    Checks::new()
        .selector(p.is_clear(RG_RESERVED), "sensor_reading_flags")
        .capability(!is_async || sensor.async_read(), "async_read_support")
        .finish()?;
    if is_async {
        return Ok(Returns::new());
    }
    let c = sensor.config();
    let readings: Vec<Reading> = if c.axes.is_empty() {
        vec![c.reading]
    } else {
        c.axes.iter().map(|a| a.reading).collect()
    };
    let mut r = Returns::with_capacity(readings.len() * READING_WORDS);
    for (i, reading) in readings.iter().enumerate() {
        let base = i * READING_WORDS;
        let timestamp = if sensor.state.timestamp_reporting {
            reading.timestamp
        } else {
            0
        };
        r.set_i64(RG_VALUE_LOW.shifted(base), RG_VALUE_HIGH.shifted(base), reading.value)?;
        r.set(RG_TIMESTAMP_LOW.shifted(base), timestamp as u32)?;
        r.set(RG_TIMESTAMP_HIGH.shifted(base), (timestamp >> 32) as u32)?;
    }
    Ok(r)
}

fn axis_description_get(platform: &mut Platform, p: Params<'_>) -> Handled {
    let budget = platform.return_budget_words();
    let (_, sensor) = sensor_mut(platform, p, AX_SENSOR_ID)?;
    let cursor = EnumerationCursor::new(p.id(AX_INDEX), sensor.num_axes());
    Checks::new()
        .index(cursor.start_index < cursor.total_count, "axis_desc_index")
        .finish()?;
    let page = cursor
        .page(max_batch(budget, AXIS_DESC_WORDS))
        .ok_or(Status::OutOfRange)?;
    let mut r = Returns::with_capacity(1 + page.returned * AXIS_DESC_WORDS);
    r.set_usize(AX_RETURNED, page.returned)?;
    r.set_usize(AX_REMAINING, page.remaining)?;
    for (i, axis_id) in cursor.range(&page).enumerate() {
        let axis = sensor.axis(axis_id).ok_or(Status::OutOfRange)?;
        let base = descriptor_base(i, AXIS_DESC_WORDS);
        r.set_usize(AX_ID.shifted(base), axis_id)?;
        r.set_flag(AX_EXT_ATTR.shifted(base), axis.extended_attributes)?;
        r.set(AX_TYPE.shifted(base), u32::from(axis.axis_type))?;
        r.set_signed(AX_UNIT_EXP.shifted(base), i32::from(axis.unit_exponent))?;
        r.set_name(AX_NAME.shifted(base), &axis.name)?;
        r.set(AX_RESOLUTION.shifted(base), axis.resolution.encode()?)?;
        r.set_i64(AX_MIN_LOW.shifted(base), AX_MIN_HIGH.shifted(base), axis.min_range)?;
        r.set_i64(AX_MAX_LOW.shifted(base), AX_MAX_HIGH.shifted(base), axis.max_range)?;
    }
    Ok(r)
}

fn list_update_intervals(platform: &mut Platform, p: Params<'_>) -> Handled {
    let budget = platform.return_budget_words();
    let (_, sensor) = sensor_mut(platform, p, UI_SENSOR_ID)?;
    let list = &sensor.config().update_intervals;
    let cursor = EnumerationCursor::new(p.id(UI_INDEX), list.len());
    let (start, page) = match list {
        DiscreteList::Triplet { .. } => (0, Page::triplet()),
        DiscreteList::Array(_) => {
            Checks::new()
                .index(cursor.start_index <= cursor.total_count, "index")
                .finish()?;
            let page = cursor.page(max_batch(budget, 1)).ok_or(Status::OutOfRange)?;
            (cursor.start_index, page)
        }
    };
    let mut r = Returns::with_capacity(1 + page.returned);
    r.set_usize(UI_RETURNED, page.returned)?;
    r.set(UI_FORMAT, list.format() as u32)?;
    r.set_usize(UI_REMAINING, page.remaining)?;
    for i in 0..page.returned {
        let interval = list.entry(start + i).ok_or(Status::OutOfRange)?;
        let base = descriptor_base(i, 1);
        r.set_signed(UI_EXPONENT.shifted(base), i32::from(interval.exponent))?;
        r.set(UI_SECONDS.shifted(base), u32::from(interval.seconds))?;
    }
    Ok(r)
}

fn config_get(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (_, sensor) = sensor_mut(platform, p, CG_SENSOR_ID)?;
    let s = &sensor.state;
    let mut r = Returns::with_capacity(1);
    r.set_flag(CG_ENABLED, s.enabled)?;
    r.set_flag(CG_TIMESTAMP, s.timestamp_reporting)?;
    r.set_signed(CG_INTERVAL_EXP, i32::from(s.interval.exponent))?;
    r.set(CG_INTERVAL_SECS, u32::from(s.interval.seconds))?;
    Ok(r)
}

fn config_set(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (id, sensor) = sensor_mut(platform, p, CS_SENSOR_ID)?;
    let rounding = Rounding::from_bits(p.get(CS_ROUNDING));
    let timestamp = p.flag(CS_TIMESTAMP);
    Checks::new()
        .capability(!timestamp || sensor.timestamp_support(), "timestamp_reporting")
        .structure(rounding.is_some(), "round_up_down")
        .structure(p.is_clear(CS_RESERVED), "config_reserved")
        .finish()?;
    let requested = UpdateInterval::new(
        p.get(CS_INTERVAL_SECS) as u16,
        p.get_signed(CS_INTERVAL_EXP) as i8,
    );
    let interval = match rounding {
        Some(mode) if !requested.is_zero() => sensor
            .config()
            .update_intervals
            .round(&requested, mode)
            .ok_or(Status::InvalidParameters)?,
        _ => sensor.state.interval,
    };
    let state = &mut sensor.state;
    state.enabled = p.flag(CS_ENABLED);
    state.timestamp_reporting = timestamp;
    state.interval = interval;
    log::info!(
        "sensor {}: enabled={} timestamp={} interval={}e{}",
        id,
        state.enabled,
        state.timestamp_reporting,
        interval.seconds,
        interval.exponent
    );
    Ok(Returns::new())
}

fn continuous_update_notify(platform: &mut Platform, p: Params<'_>) -> Handled {
    let (id, sensor) = sensor_mut(platform, p, CN_SENSOR_ID)?;
    Checks::new()
        .capability(sensor.continuous_notify_support(), "cont_update_notify")
        .structure(p.is_clear(CN_RESERVED), "notify_enable_reserved")
        .finish()?;
    sensor.state.continuous_notify = p.flag(CN_ENABLE);
    log::info!(
        "sensor {}: continuous update notifications {}",
        id,
        sensor.state.continuous_notify
    );
    Ok(Returns::new())
}
