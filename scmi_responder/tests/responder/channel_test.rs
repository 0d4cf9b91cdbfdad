#[path = "../common/mod.rs"]
mod common;

use scmi_responder::prelude::*;
use scmi_responder::test_support::{reference_responder, request_frame, seeded_channel};

#[test]
fn serve_answers_in_order() -> anyhow::Result<()> {
    common::init_logging();
    let mut r = reference_responder()?;
    let frames = vec![
        request_frame(ProtocolId::VOLTAGE, 0x8, 1, &[0])?,
        request_frame(ProtocolId::SENSOR, 0x9, 2, &[5])?,
        request_frame(ProtocolId::new(0x42), 0x0, 3, &[])?,
    ];
    let mut ch = seeded_channel(frames.clone());
    assert_eq!(r.serve(&mut ch)?, 3);

    let responses: Vec<Response> = ch
        .sent
        .iter()
        .map(|f| Response::decode(f))
        .collect::<Result<_>>()?;
    assert_eq!(responses[0].header.token, 1);
    assert_eq!(responses[0].status, Status::Success);
    assert_eq!(responses[0].returns, vec![900_000]);
    assert_eq!(responses[1].status, Status::NotFound);
    assert!(responses[1].returns.is_empty());
    assert_eq!(responses[2].status, Status::NotSupported);
    for (req, resp) in frames.iter().zip(&ch.sent) {
        assert_eq!(req[0], resp[0]);
    }
    Ok(())
}

#[test]
fn frames_without_header_are_dropped() -> anyhow::Result<()> {
    let mut r = reference_responder()?;
    let mut ch = seeded_channel(vec![vec![], request_frame(ProtocolId::RESET, 0x1, 0, &[])?]);
    assert_eq!(r.serve(&mut ch)?, 1);
    assert_eq!(ch.sent[0][1..], [0, 2]);
    Ok(())
}

#[test]
fn hex_dump_round_trip() -> anyhow::Result<()> {
    let frame = request_frame(ProtocolId::SENSOR, 0x6, 9, &[1, 0])?;
    let text = words_to_hex(&frame);
    assert_eq!(parse_words(&text).map_err(anyhow::Error::msg)?, frame);
    Ok(())
}
