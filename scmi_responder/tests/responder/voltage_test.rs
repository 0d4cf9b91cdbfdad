#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{VOLTAGE, call, remaining_16, responder, returned_12};
use scmi_responder::prelude::*;

#[test]
fn attributes_and_version() {
    let mut r = responder();
    assert_eq!(call(&mut r, VOLTAGE, 0x0, &[]), (Status::Success, vec![0x0001_0000]));
    assert_eq!(call(&mut r, VOLTAGE, 0x1, &[]), (Status::Success, vec![3]));
}

#[test]
fn domain_names() {
    let mut r = responder();
    for (id, expected) in ["VOLTAGE_0", "VOLTAGE_1", "VOLTAGE_2"].iter().enumerate() {
        let (status, words) = call(&mut r, VOLTAGE, 0x3, &[id as u32]);
        assert_eq!(status, Status::Success);
        assert_eq!(words.len(), 5);
        assert_eq!(Name::from_words(&words[1..]).unwrap(), *expected);
    }
}

#[test]
fn levels_of_array_domain() {
    let mut r = responder();
    let (_, words) = call(&mut r, VOLTAGE, 0x4, &[0, 1]);
    assert_eq!(returned_12(words[0]), 2);
    assert_eq!(remaining_16(words[0]), 0);
    assert_eq!(&words[1..], &[900_000, 1_000_000]);
    assert_eq!(call(&mut r, VOLTAGE, 0x4, &[0, 3]), (Status::Success, vec![0]));
    assert_eq!(call(&mut r, VOLTAGE, 0x4, &[0, 4]), (Status::OutOfRange, vec![]));
}

#[test]
fn triplet_ignores_index() {
    let mut r = responder();
    for index in [0, 2, 3, 1000] {
        let (status, words) = call(&mut r, VOLTAGE, 0x4, &[1, index]);
        assert_eq!(status, Status::Success);
        assert_eq!(returned_12(words[0]), 3);
        assert_eq!(remaining_16(words[0]), 0);
    }
}

#[test]
fn enumerate_hundred_levels() {
    let mut r = responder();
    let listing = Enumeration::new(ListKind::VoltageLevels { domain_id: 2 })
        .run(&mut r)
        .unwrap();
    let levels: Vec<u32> = listing.descriptors.iter().map(|d| d[0]).collect();
    let expected: Vec<u32> = (0..100).map(|i| 500_000 + i * 10_000).collect();
    assert_eq!(levels, expected);
}

#[test]
fn level_and_mode_round_trip() {
    let mut r = responder();
    assert_eq!(call(&mut r, VOLTAGE, 0x7, &[2, 0, 750_000]), (Status::Success, vec![]));
    assert_eq!(call(&mut r, VOLTAGE, 0x8, &[2]), (Status::Success, vec![750_000]));
    assert_eq!(call(&mut r, VOLTAGE, 0x8, &[0]), (Status::Success, vec![900_000]));

    assert_eq!(call(&mut r, VOLTAGE, 0x5, &[1, 0x7]), (Status::Success, vec![]));
    assert_eq!(call(&mut r, VOLTAGE, 0x6, &[1]), (Status::Success, vec![0x7]));
    assert_eq!(call(&mut r, VOLTAGE, 0x5, &[1, 0x1]), (Status::InvalidParameters, vec![]));
    assert_eq!(call(&mut r, VOLTAGE, 0x6, &[1]), (Status::Success, vec![0x7]));
}

#[test]
fn level_set_touches_one_domain() {
    let mut r = responder();
    let before: Vec<_> = (0..3).map(|id| call(&mut r, VOLTAGE, 0x8, &[id])).collect();
    assert_eq!(call(&mut r, VOLTAGE, 0x7, &[1, 0, 1_100_000]), (Status::Success, vec![]));
    assert_eq!(call(&mut r, VOLTAGE, 0x8, &[0]), before[0]);
    assert_eq!(call(&mut r, VOLTAGE, 0x8, &[2]), before[2]);
    assert_eq!(call(&mut r, VOLTAGE, 0x8, &[1]), (Status::Success, vec![1_100_000]));
}
