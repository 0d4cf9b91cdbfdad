#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{RESET, SENSOR, VOLTAGE, call, responder};
use scmi_responder::Status;

#[test]
fn out_of_range_resource_on_every_command() {
    let mut r = responder();
    // three voltage domains
    for message in [0x3, 0x4, 0x5, 0x6, 0x7, 0x8] {
        let params = [4, 0, 800_000];
        assert_eq!(call(&mut r, VOLTAGE, message, &params), (Status::NotFound, vec![]));
    }
    for message in [0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA, 0xB] {
        assert_eq!(call(&mut r, SENSOR, message, &[2, 0, 0, 0]), (Status::NotFound, vec![]));
    }
    for message in [0x3, 0x4, 0x5] {
        assert_eq!(call(&mut r, RESET, message, &[2, 0, 0]), (Status::NotFound, vec![]));
    }
}

#[test]
fn resource_beats_everything() {
    let mut r = responder();
    assert_eq!(call(&mut r, SENSOR, 0x6, &[9, 0xFFFF_FFFF]), (Status::NotFound, vec![]));
    assert_eq!(call(&mut r, SENSOR, 0x7, &[9, 99]), (Status::NotFound, vec![]));
}

#[test]
fn sub_index_beats_capability() {
    let mut r = responder();
    // reserved reading flags with async requested on a sync-only sensor
    assert_eq!(call(&mut r, SENSOR, 0x6, &[0, 0x3]), (Status::InvalidParameters, vec![]));
}

#[test]
fn event_control_selector_beats_capability() {
    let mut r = responder();
    // no trip points on sensor 0, reserved event-control bits set as well
    assert_eq!(call(&mut r, SENSOR, 0x4, &[0, 0x3]), (Status::InvalidParameters, vec![]));
    assert_eq!(call(&mut r, SENSOR, 0x5, &[0, 0xFFFF_FFFF, 0, 0]), (Status::InvalidParameters, vec![]));
    assert_eq!(call(&mut r, SENSOR, 0x6, &[0, 0x3]), (Status::InvalidParameters, vec![]));
    // clean event control on the same sensor reaches the capability check
    assert_eq!(call(&mut r, SENSOR, 0x4, &[0, 0x1]), (Status::NotSupported, vec![]));
}

#[test]
fn capability_beats_structure() {
    let mut r = responder();
    // async reset unsupported, reserved flag bits set as well
    assert_eq!(call(&mut r, RESET, 0x4, &[0, 0xC, 0]), (Status::NotSupported, vec![]));
}

#[test]
fn axis_index_is_out_of_range_not_invalid() {
    let mut r = responder();
    assert_eq!(call(&mut r, SENSOR, 0x7, &[0, 2]), (Status::OutOfRange, vec![]));
}

#[test]
fn rejected_state_is_untouched() {
    let mut r = responder();
    let before = r.platform().clone();
    call(&mut r, VOLTAGE, 0x7, &[0, 0, 850_000]);
    call(&mut r, SENSOR, 0xA, &[0, 0x600]);
    call(&mut r, RESET, 0x4, &[0, 0x4, 0]);
    assert_eq!(r.platform(), &before);
}
