#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{SENSOR, call, remaining_16, responder, returned_12};
use scmi_responder::{Name, Status};

const MS_EXP: u32 = 0b11101; // -3 in five bits

fn interval_config(seconds: u32, rounding: u32, enable: bool, timestamps: bool) -> u32 {
    (seconds << 16) | (MS_EXP << 11) | (rounding << 9) | (u32::from(timestamps) << 1) | u32::from(enable)
}

#[test]
fn protocol_attributes() {
    let mut r = responder();
    let (status, words) = call(&mut r, SENSOR, 0x1, &[]);
    assert_eq!(status, Status::Success);
    assert_eq!(words, vec![2 | (4 << 16), 0x1234, 0, 0xFF]);
}

#[test]
fn message_attributes_know_every_message() {
    let mut r = responder();
    for id in 0..=0xB {
        assert_eq!(call(&mut r, SENSOR, 0x2, &[id]), (Status::Success, vec![0]));
    }
    assert_eq!(call(&mut r, SENSOR, 0x2, &[0xC]), (Status::NotFound, vec![]));
}

#[test]
fn axis_descriptions() {
    let mut r = responder();
    let (status, words) = call(&mut r, SENSOR, 0x7, &[0, 0]);
    assert_eq!(status, Status::Success);
    assert_eq!(words[0] & 0x3F, 2);
    assert_eq!(words[0] >> 26, 0);
    assert_eq!(words.len(), 1 + 2 * 12);
    assert_eq!(words[1], 0);
    assert_eq!(Name::from_words(&words[4..8]).unwrap(), "SENSOR_0_AXIS0");
    assert_eq!(words[13], 1);

    let (status, words) = call(&mut r, SENSOR, 0x7, &[0, 1]);
    assert_eq!(status, Status::Success);
    assert_eq!(words[0] & 0x3F, 1);
    assert_eq!(words[1], 1);
}

#[test]
fn axis_index_past_end_is_out_of_range() {
    let mut r = responder();
    assert_eq!(call(&mut r, SENSOR, 0x7, &[0, 2]), (Status::OutOfRange, vec![]));
    // axis-less sensor
    assert_eq!(call(&mut r, SENSOR, 0x7, &[1, 0]), (Status::OutOfRange, vec![]));
}

#[test]
fn readings_per_axis_with_timestamps() {
    let mut r = responder();
    let (status, words) = call(&mut r, SENSOR, 0x6, &[0, 0]);
    assert_eq!(status, Status::Success);
    assert_eq!(words, vec![12, 0, 0, 1, (-7i32) as u32, 0xFFFF_FFFF, 0, 1]);

    // sensor 1: single reading, async supported
    let (_, words) = call(&mut r, SENSOR, 0x6, &[1, 0]);
    assert_eq!(words, vec![3300, 0, 0, 0]);
    assert_eq!(call(&mut r, SENSOR, 0x6, &[1, 1]), (Status::Success, vec![]));
    assert_eq!(call(&mut r, SENSOR, 0x6, &[0, 1]), (Status::NotSupported, vec![]));
}

#[test]
fn interval_lists() {
    let mut r = responder();
    let (_, words) = call(&mut r, SENSOR, 0x8, &[0, 0]);
    assert_eq!(returned_12(words[0]), 1);
    assert_eq!(remaining_16(words[0]), 0);
    assert_eq!(words[1], (100 << 5) | MS_EXP);

    for index in [0, 1, 50] {
        let (status, words) = call(&mut r, SENSOR, 0x8, &[1, index]);
        assert_eq!(status, Status::Success);
        assert_eq!(words[0], 3 | (1 << 12));
        assert_eq!(&words[1..], &[(100 << 5) | MS_EXP, (1000 << 5) | MS_EXP, (100 << 5) | MS_EXP]);
    }
    assert_eq!(call(&mut r, SENSOR, 0x8, &[0, 2]), (Status::OutOfRange, vec![]));
}

#[test]
fn config_set_rounds_onto_triplet() {
    let mut r = responder();
    let (_, before) = call(&mut r, SENSOR, 0x9, &[1]);
    assert_eq!(before, vec![(200 << 16) | (MS_EXP << 11)]);

    let cfg = interval_config(250, 1, true, false);
    assert_eq!(call(&mut r, SENSOR, 0xA, &[1, cfg]), (Status::Success, vec![]));
    let (_, after) = call(&mut r, SENSOR, 0x9, &[1]);
    assert_eq!(after, vec![(300 << 16) | (MS_EXP << 11) | 1]);

    // zero interval keeps the current one
    assert_eq!(call(&mut r, SENSOR, 0xA, &[1, 0]), (Status::Success, vec![]));
    let (_, kept) = call(&mut r, SENSOR, 0x9, &[1]);
    assert_eq!(kept, vec![(300 << 16) | (MS_EXP << 11)]);
}

#[test]
fn config_set_rejections() {
    let mut r = responder();
    // timestamps on a sensor without timestamp support
    let cfg = interval_config(0, 0, true, true);
    assert_eq!(call(&mut r, SENSOR, 0xA, &[1, cfg]), (Status::NotSupported, vec![]));
    // rounding value 3
    let cfg = interval_config(100, 3, true, false);
    assert_eq!(call(&mut r, SENSOR, 0xA, &[0, cfg]), (Status::InvalidParameters, vec![]));
    // no supported interval at or below 50ms
    let cfg = interval_config(50, 0, true, false);
    assert_eq!(call(&mut r, SENSOR, 0xA, &[0, cfg]), (Status::InvalidParameters, vec![]));
}

#[test]
fn reading_timestamp_follows_reporting() {
    let mut r = responder();
    let cfg = interval_config(0, 0, true, false);
    assert_eq!(call(&mut r, SENSOR, 0xA, &[0, cfg]), (Status::Success, vec![]));
    let (_, words) = call(&mut r, SENSOR, 0x6, &[0, 0]);
    assert_eq!(words[2], 0);
    assert_eq!(words[3], 0);
}

#[test]
fn trip_points() {
    let mut r = responder();
    assert_eq!(call(&mut r, SENSOR, 0x4, &[1, 1]), (Status::Success, vec![]));
    assert_eq!(call(&mut r, SENSOR, 0x4, &[0, 1]), (Status::NotSupported, vec![]));

    let ev_ctrl = (1 << 4) | 0x3;
    assert_eq!(call(&mut r, SENSOR, 0x5, &[1, ev_ctrl, 500, 0]), (Status::Success, vec![]));
    let state = &r.platform().sensors.descriptor(1).unwrap().state;
    assert_eq!(state.trip_points[1].map(|t| t.value), Some(500));
    assert!(state.trip_notify);

    assert_eq!(call(&mut r, SENSOR, 0x5, &[1, 2 << 4, 0, 0]), (Status::InvalidParameters, vec![]));
    assert_eq!(call(&mut r, SENSOR, 0x5, &[0, 0, 0, 0]), (Status::NotSupported, vec![]));
}

#[test]
fn continuous_update_notify() {
    let mut r = responder();
    assert_eq!(call(&mut r, SENSOR, 0xB, &[1, 1]), (Status::Success, vec![]));
    assert!(r.platform().sensors.descriptor(1).unwrap().state.continuous_notify);
    assert_eq!(call(&mut r, SENSOR, 0xB, &[0, 1]), (Status::NotSupported, vec![]));
    assert_eq!(call(&mut r, SENSOR, 0xB, &[1, 2]), (Status::InvalidParameters, vec![]));
}
