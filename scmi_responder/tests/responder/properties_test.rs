#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{SENSOR, VOLTAGE, call, many_sensors, responder};
use proptest::prelude::*;
use scmi_responder::agent::{Enumeration, ListKind};
use scmi_responder::protocol::layout::lookup;
use scmi_responder::{ProtocolId, Status};

fn any_message() -> impl Strategy<Value = (u8, u32, Vec<u32>)> {
    (
        prop_oneof![Just(0x15u8), Just(0x16u8), Just(0x17u8), any::<u8>()],
        0u32..0x10,
        0u32..4,
        prop::collection::vec(any::<u32>(), 0..6),
    )
        .prop_map(|(protocol, message, id, rest)| {
            let mut params = vec![id];
            params.extend(rest);
            (protocol, message, params)
        })
}

const GETS: &[(ProtocolId, u32)] = &[
    (ProtocolId::SENSOR, 0x1),
    (ProtocolId::SENSOR, 0x3),
    (ProtocolId::SENSOR, 0x7),
    (ProtocolId::SENSOR, 0x8),
    (ProtocolId::SENSOR, 0x9),
    (ProtocolId::VOLTAGE, 0x3),
    (ProtocolId::VOLTAGE, 0x4),
    (ProtocolId::VOLTAGE, 0x6),
    (ProtocolId::VOLTAGE, 0x8),
    (ProtocolId::RESET, 0x3),
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn enumeration_visits_every_sensor_once(count in 0usize..40, budget in 14usize..200) {
        let mut r = many_sensors(count, budget);
        let listing = Enumeration::new(ListKind::SensorDescriptions).run(&mut r).unwrap();
        prop_assert!(listing.is_complete());
        let ids: Vec<u32> = listing.descriptors.iter().map(|d| d[0]).collect();
        prop_assert_eq!(ids, (0..count as u32).collect::<Vec<_>>());
        let batch = (budget - 1) / 13;
        prop_assert_eq!(listing.calls, count.div_ceil(batch).max(1));
    }
}

proptest! {
    #[test]
    fn arbitrary_requests_never_fault((protocol, message, params) in any_message()) {
        let mut r = responder();
        let protocol = ProtocolId::new(protocol);
        let (status, words) = r.send_message(protocol, message, &params).unwrap();
        if status == Status::Success {
            let layout = lookup(protocol, message).unwrap();
            prop_assert!(layout.reserved_violations(&words).is_empty());
        } else {
            prop_assert!(words.is_empty());
        }
    }

    #[test]
    fn gets_are_idempotent(pick in 0usize..GETS.len(), id in 0u32..4, index in 0u32..120) {
        let mut r = responder();
        let (protocol, message) = GETS[pick];
        let first = call(&mut r, protocol, message, &[id, index]);
        let second = call(&mut r, protocol, message, &[id, index]);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn voltage_level_set_get(index in 0u32..100) {
        let mut r = responder();
        let level = 500_000 + index * 10_000;
        prop_assert_eq!(call(&mut r, VOLTAGE, 0x7, &[2, 0, level]), (Status::Success, vec![]));
        prop_assert_eq!(call(&mut r, VOLTAGE, 0x8, &[2]), (Status::Success, vec![level]));
    }

    #[test]
    fn sensor_state_set_get(enable in any::<bool>(), seconds in 1u32..=12, id in 0u32..2) {
        // rounding mode is not persisted; interval rounds up onto 100ms steps
        let mut r = responder();
        let timestamps = id == 0;
        let cfg = ((seconds * 100) << 16) | (0b11101 << 11) | (1 << 9)
            | (u32::from(timestamps) << 1) | u32::from(enable);
        let (status, _) = call(&mut r, SENSOR, 0xA, &[id, cfg]);
        if id == 0 && seconds > 1 {
            // SENSOR_0 only supports 100ms; nothing at or above 200ms
            prop_assert_eq!(status, Status::InvalidParameters);
        } else if id == 1 && seconds > 10 {
            prop_assert_eq!(status, Status::InvalidParameters);
        } else {
            prop_assert_eq!(status, Status::Success);
            let (_, words) = call(&mut r, SENSOR, 0x9, &[id]);
            prop_assert_eq!(words, vec![cfg & !(0x3 << 9)]);
        }
    }
}
