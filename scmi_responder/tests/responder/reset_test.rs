#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{RESET, call, responder};
use scmi_responder::Status;

#[test]
fn attributes() {
    let mut r = responder();
    assert_eq!(call(&mut r, RESET, 0x0, &[]), (Status::Success, vec![0x0002_0000]));
    assert_eq!(call(&mut r, RESET, 0x1, &[]), (Status::Success, vec![2]));
    let (status, words) = call(&mut r, RESET, 0x3, &[0]);
    assert_eq!(status, Status::Success);
    assert_eq!(&words[..2], &[1 << 30, 100]);
}

#[test]
fn autonomous_reset_releases() {
    let mut r = responder();
    assert_eq!(call(&mut r, RESET, 0x4, &[0, 0x2, 0]), (Status::Success, vec![]));
    assert!(r.platform().reset_domains.descriptor(0).unwrap().state.asserted);
    assert_eq!(call(&mut r, RESET, 0x4, &[0, 0x1, 0]), (Status::Success, vec![]));
    assert!(!r.platform().reset_domains.descriptor(0).unwrap().state.asserted);
}

#[test]
fn async_reset_needs_support() {
    let mut r = responder();
    assert_eq!(call(&mut r, RESET, 0x4, &[0, 0x5, 0]), (Status::NotSupported, vec![]));
    assert_eq!(call(&mut r, RESET, 0x4, &[1, 0x5, 0]), (Status::Success, vec![]));
}

#[test]
fn short_reset_request() {
    let mut r = responder();
    assert_eq!(call(&mut r, RESET, 0x4, &[0, 0]), (Status::InvalidParameters, vec![]));
}

#[test]
fn notify() {
    let mut r = responder();
    assert_eq!(call(&mut r, RESET, 0x5, &[0, 1]), (Status::Success, vec![]));
    assert_eq!(call(&mut r, RESET, 0x5, &[1, 1]), (Status::NotSupported, vec![]));
    assert_eq!(call(&mut r, RESET, 0x5, &[2, 1]), (Status::NotFound, vec![]));
}
