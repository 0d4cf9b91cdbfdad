#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{SENSOR, call, many_sensors, remaining_16, returned_12};
use scmi_responder::Status;
use scmi_responder::protocol::pagination::{Page, max_batch, paginate};

#[test]
fn thirteen_sensors_with_budget_157() {
    assert_eq!(max_batch(157, 13), 12);
    let mut r = many_sensors(13, 157);

    let (status, words) = call(&mut r, SENSOR, 0x3, &[0]);
    assert_eq!(status, Status::Success);
    assert_eq!(returned_12(words[0]), 12);
    assert_eq!(remaining_16(words[0]), 1);
    assert_eq!(words.len(), 1 + 12 * 13);

    let (status, words) = call(&mut r, SENSOR, 0x3, &[12]);
    assert_eq!(status, Status::Success);
    assert_eq!(returned_12(words[0]), 1);
    assert_eq!(remaining_16(words[0]), 0);
    assert_eq!(words[1], 12);
}

#[test]
fn probe_at_total_is_empty_not_a_fault() {
    let mut r = many_sensors(13, 157);
    let (status, words) = call(&mut r, SENSOR, 0x3, &[13]);
    assert_eq!(status, Status::Success);
    assert_eq!(words, vec![0]);
    assert_eq!(paginate(13, 13, 12), Some(Page::default()));
}

#[test]
fn start_past_total() {
    assert_eq!(paginate(13, 14, 12), None);
    let mut r = many_sensors(13, 157);
    let (status, words) = call(&mut r, SENSOR, 0x3, &[14]);
    assert_eq!(status, Status::InvalidParameters);
    assert!(words.is_empty());
}
