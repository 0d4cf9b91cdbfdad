// fixtures.rs: platforms and request helpers shared by the integration tests

use scmi_responder::config::{PlatformConfig, SensorConfig};
use scmi_responder::{Name, ProtocolId, Responder, Status};

pub const SENSOR: ProtocolId = ProtocolId::SENSOR;
pub const RESET: ProtocolId = ProtocolId::RESET;
pub const VOLTAGE: ProtocolId = ProtocolId::VOLTAGE;

pub fn reference() -> PlatformConfig {
    PlatformConfig::reference().expect("reference config")
}

pub fn responder() -> Responder {
    super::init_logging();
    Responder::reference().expect("reference responder")
}

/// `count` axis-less sensors cloned from reference sensor 1.
pub fn sensors(count: usize) -> Vec<SensorConfig> {
    let template = reference().sensors[1].clone();
    (0..count)
        .map(|i| SensorConfig {
            name: Name::new(&format!("SENSOR_{}", i)).expect("name"),
            ..template.clone()
        })
        .collect()
}

/// Platform with `count` sensors and the given return budget.
pub fn many_sensors(count: usize, budget: usize) -> Responder {
    super::init_logging();
    let config = PlatformConfig {
        return_budget_words: budget,
        sensors: sensors(count),
        ..reference()
    };
    Responder::new(config).expect("many-sensor responder")
}

pub fn call(
    r: &mut Responder,
    protocol: ProtocolId,
    message_id: u32,
    params: &[u32],
) -> (Status, Vec<u32>) {
    r.send_message(protocol, message_id, params)
        .expect("no internal fault")
}

/// Returned count in bits [11:0] of a list flags word.
pub fn returned_12(flags: u32) -> u32 {
    flags & 0xFFF
}

/// Remaining count in bits [31:16] of a list flags word.
pub fn remaining_16(flags: u32) -> u32 {
    flags >> 16
}
