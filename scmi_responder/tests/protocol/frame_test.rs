use scmi_responder::protocol::{MessageHeader, MessageType, Request, Response};
use scmi_responder::{Error, ProtocolId, Status};

#[test]
fn request_round_trip() {
    let header = MessageHeader::command(ProtocolId::SENSOR, 0x6, 0x3FF);
    let req = Request::new(header, vec![1, 0]);
    let frame = req.encode().unwrap();
    assert_eq!(frame[0], 0x6 | (0x15 << 10) | (0x3FF << 18));
    assert_eq!(Request::decode(&frame).unwrap(), req);
}

#[test]
fn empty_frame_is_invalid_length() {
    assert!(matches!(
        Request::decode(&[]),
        Err(Error::InvalidLength { expected: 1, actual: 0 })
    ));
    assert!(matches!(
        Response::decode(&[0]),
        Err(Error::InvalidLength { expected: 2, actual: 1 })
    ));
}

#[test]
fn response_status_word() {
    let header = MessageHeader::command(ProtocolId::VOLTAGE, 0x3, 7);
    let frame = Response::rejected(header, Status::NotFound).encode().unwrap();
    assert_eq!(frame[1], 0xFFFF_FFFC);
    assert_eq!(frame.len(), 2);
    let back = Response::decode(&frame).unwrap();
    assert_eq!(back.status, Status::NotFound);
    assert_eq!(back.header.kind(), Some(MessageType::Command));
}

#[test]
fn unknown_status_is_rejected_on_decode() {
    assert!(matches!(
        Response::decode(&[0, 0xFFFF_FFFD]),
        Err(Error::UnknownStatus(0xFFFF_FFFD))
    ));
}
