use scmi_responder::protocol::Command;
use scmi_responder::protocol::layout::{lookup, registry, sensor, voltage};
use scmi_responder::{ProtocolId, Responder};
use std::collections::HashSet;

#[test]
fn registry_matches_routes() {
    let routes: HashSet<_> = Command::all().map(|c| (c.protocol(), c.message_id())).collect();
    let layouts: HashSet<_> = registry().map(|l| (l.protocol, l.message_id)).collect();
    assert_eq!(routes, layouts);
    for layout in registry() {
        layout.validate().unwrap();
    }
}

#[test]
fn dispatcher_builds_from_registry() {
    let r = Responder::reference().unwrap();
    assert_eq!(r.dispatcher().route_count(), 27);
    assert!(r.dispatcher().supports_protocol(ProtocolId::RESET));
    assert!(!r.dispatcher().supports_protocol(ProtocolId::new(0x14)));
}

#[test]
fn descriptor_strides() {
    let desc = lookup(ProtocolId::SENSOR, sensor::DESCRIPTION_GET)
        .and_then(|l| l.descriptors)
        .unwrap();
    assert_eq!(desc.stride, 13);
    assert_eq!(desc.base(2), 27);
    let axes = lookup(ProtocolId::SENSOR, sensor::AXIS_DESCRIPTION_GET)
        .and_then(|l| l.descriptors)
        .unwrap();
    assert_eq!(axes.stride, 12);
    let levels = lookup(ProtocolId::VOLTAGE, voltage::DESCRIBE_LEVELS)
        .and_then(|l| l.descriptors)
        .unwrap();
    assert_eq!(levels.stride, 1);
}

#[test]
fn reserved_violations_are_reported() {
    let layout = lookup(ProtocolId::SENSOR, sensor::CONFIG_GET).unwrap();
    assert!(layout.reserved_violations(&[0x0001_0001]).is_empty());
    let bad = layout.reserved_violations(&[0x0000_0004]);
    assert_eq!(bad, vec![("config_reserved", 0)]);
}

#[test]
fn mandatory_parameter_counts() {
    assert_eq!(lookup(ProtocolId::RESET, 0x4).unwrap().min_params, 3);
    assert_eq!(lookup(ProtocolId::VOLTAGE, 0x7).unwrap().min_params, 3);
    assert_eq!(lookup(ProtocolId::SENSOR, 0x0).unwrap().min_params, 0);
}
