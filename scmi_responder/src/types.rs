// scmi_responder/src/types.rs
//! Small wire-level value types.

use crate::constants::{NAME_STR_SIZE, NAME_WORDS};
use crate::protocol::bits;
use crate::{Error, Result};
use derive_more::{Display, From, Into};
use std::cmp::Ordering;
use std::convert::TryFrom;

/// Protocol identifier (8 bits on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Display)]
#[display(fmt = "{:#04x}", _0)]
pub struct ProtocolId(u8);

impl ProtocolId {
    /// Sensor management.
    pub const SENSOR: Self = Self(crate::constants::SENSOR_PROTOCOL_ID);
    /// Reset domain management.
    pub const RESET: Self = Self(crate::constants::RESET_PROTOCOL_ID);
    /// Voltage domain management.
    pub const VOLTAGE: Self = Self(crate::constants::VOLTAGE_PROTOCOL_ID);

    /// Wrap a raw protocol id.
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw protocol id.
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

/// Message identifier within a protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Display)]
#[display(fmt = "{:#x}", _0)]
pub struct MessageId(u32);

impl MessageId {
    /// Wrap a raw message id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw message id.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Fixed-length resource name: printable ASCII, at most 15 bytes so that the
/// 16-byte wire field always carries a NUL terminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Name(String);

impl Name {
    /// Checked name; `InvalidConfig` when too long or not printable.
    pub fn new(name: &str) -> Result<Self> {
        if name.len() >= NAME_STR_SIZE {
            return Err(Error::InvalidConfig(format!(
                "name `{}` longer than {} bytes",
                name,
                NAME_STR_SIZE - 1
            )));
        }
        if !name.bytes().all(|b| b.is_ascii_graphic() || b == b' ') {
            return Err(Error::InvalidConfig(format!(
                "name `{}` is not printable ASCII",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// Name text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Pack into four little-endian words, NUL padded.
    pub fn to_words(&self) -> [u32; NAME_WORDS] {
        let mut bytes = [0u8; NAME_STR_SIZE];
        bytes[..self.0.len()].copy_from_slice(self.0.as_bytes());
        let mut words = [0u32; NAME_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }

    /// Decode a name field as an agent would read it: bytes up to the first
    /// NUL. Returns `InvalidLength` when fewer than four words are present.
    pub fn from_words(words: &[u32]) -> Result<String> {
        if words.len() < NAME_WORDS {
            return Err(Error::InvalidLength {
                expected: NAME_WORDS,
                actual: words.len(),
            });
        }
        let bytes: Vec<u8> = words[..NAME_WORDS]
            .iter()
            .flat_map(|w| w.to_le_bytes())
            .take_while(|&b| b != 0)
            .collect();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl TryFrom<String> for Name {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Name::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a list of levels or intervals is reported
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListFormat {
    /// Explicit entries, paginated.
    Array = 0,
    /// Low, high and step.
    Triplet = 1,
}

/// Sensor update interval: `seconds * 10^exponent`.
///
/// Wire form: [4:0] signed exponent, [20:5] seconds, [31:21] reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateInterval {
    /// Mantissa in seconds.
    pub seconds: u16,
    /// Power-of-ten exponent, 5 bits signed.
    pub exponent: i8,
}

impl UpdateInterval {
    /// `seconds * 10^exponent`.
    pub const fn new(seconds: u16, exponent: i8) -> Self {
        Self { seconds, exponent }
    }

    /// Zero length; CONFIG_SET uses it to keep the current interval.
    pub fn is_zero(&self) -> bool {
        self.seconds == 0
    }

    /// Interval length in seconds; only used for ordering.
    pub fn as_secs_f64(&self) -> f64 {
        f64::from(self.seconds) * 10f64.powi(i32::from(self.exponent))
    }

    /// Compare lengths across exponents.
    pub fn cmp_length(&self, other: &Self) -> Ordering {
        self.as_secs_f64().total_cmp(&other.as_secs_f64())
    }

    /// Interval word.
    pub fn encode(&self) -> Result<u32> {
        let word = bits::insert_signed(0, 0, 4, i32::from(self.exponent), "interval_exponent")?;
        bits::insert(word, 5, 20, u32::from(self.seconds), "interval_seconds")
    }

    /// Interval from its word; reserved bits are ignored.
    pub fn decode(word: u32) -> Self {
        Self {
            seconds: bits::extract(word, 5, 20) as u16,
            exponent: bits::extract_signed(word, 0, 4) as i8,
        }
    }
}

/// Resolution of a sensor or axis: [26:0] value, [31:27] signed exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Mantissa, 27 bits.
    pub value: u32,
    /// Power-of-ten exponent, 5 bits signed.
    pub exponent: i8,
}

impl Resolution {
    /// `value * 10^exponent`.
    pub const fn new(value: u32, exponent: i8) -> Self {
        Self { value, exponent }
    }

    /// Resolution word.
    pub fn encode(&self) -> Result<u32> {
        let word = bits::insert(0, 0, 26, self.value, "resolution")?;
        bits::insert_signed(word, 27, 31, i32::from(self.exponent), "resolution_exponent")
    }
}

/// Split a signed 64-bit quantity into (low, high) words.
pub fn split_i64(value: i64) -> (u32, u32) {
    let raw = value as u64;
    (raw as u32, (raw >> 32) as u32)
}

/// Join (low, high) words back into a signed 64-bit quantity.
pub fn join_i64(low: u32, high: u32) -> i64 {
    ((u64::from(high) << 32) | u64::from(low)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_packs_little_endian_with_nul() {
        let name = Name::new("SENSOR_0").unwrap();
        let words = name.to_words();
        assert_eq!(words[0], u32::from_le_bytes(*b"SENS"));
        assert_eq!(words[1], u32::from_le_bytes(*b"OR_0"));
        assert_eq!(words[2], 0);
        assert_eq!(words[3], 0);
        assert_eq!(Name::from_words(&words).unwrap(), "SENSOR_0");
    }

    #[test]
    fn name_rejects_sixteen_bytes() {
        assert!(Name::new("ABCDEFGHIJKLMNOP").is_err());
        assert!(Name::new("ABCDEFGHIJKLMNO").is_ok());
    }

    #[test]
    fn name_rejects_control_characters() {
        assert!(Name::new("bad\nname").is_err());
    }

    #[test]
    fn name_from_short_slice_is_error() {
        assert!(matches!(
            Name::from_words(&[0, 0]),
            Err(Error::InvalidLength { expected: 4, actual: 2 })
        ));
    }

    #[test]
    fn update_interval_wire_form() {
        let interval = UpdateInterval::new(100, -3);
        let word = interval.encode().unwrap();
        assert_eq!(word & 0x1F, 0x1D); // -3 in 5-bit two's complement
        assert_eq!((word >> 5) & 0xFFFF, 100);
        assert_eq!(word >> 21, 0);
        assert_eq!(UpdateInterval::decode(word), interval);
    }

    #[test]
    fn update_interval_exponent_out_of_range() {
        assert!(UpdateInterval::new(1, 16).encode().is_err());
        assert!(UpdateInterval::new(1, -16).encode().is_ok());
    }

    #[test]
    fn update_interval_ordering_crosses_exponents() {
        let a = UpdateInterval::new(1, 0); // 1 s
        let b = UpdateInterval::new(500, -3); // 0.5 s
        assert_eq!(a.cmp_length(&b), Ordering::Greater);
    }

    #[test]
    fn resolution_rejects_wide_value() {
        assert!(Resolution::new(1 << 27, 0).encode().is_err());
        let word = Resolution::new(7, -1).encode().unwrap();
        assert_eq!(word & 0x07FF_FFFF, 7);
        assert_eq!(word >> 27, 0x1F);
    }

    #[test]
    fn i64_split_and_join() {
        let (lo, hi) = split_i64(-2);
        assert_eq!(lo, 0xFFFF_FFFE);
        assert_eq!(hi, 0xFFFF_FFFF);
        assert_eq!(join_i64(lo, hi), -2);
    }

    #[test]
    fn protocol_id_display() {
        assert_eq!(ProtocolId::SENSOR.to_string(), "0x15");
        assert_eq!(MessageId::new(0xB).to_string(), "0xb");
    }
}
