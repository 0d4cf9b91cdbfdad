// scmi_responder/src/protocol/bits.rs
//! Bit-field helpers over 32-bit protocol words.
//!
//! Ranges are inclusive `[lo, hi]` with `lo <= hi <= 31`. Field layouts come
//! from the registry in `protocol::layout`, which validates every range when
//! the dispatcher is built, so the helpers here only `debug_assert!` it.

use crate::{Error, Result};

/// Unit of wire data
pub type Word = u32;

/// Number of bits covered by `[lo, hi]`.
pub const fn width(lo: u32, hi: u32) -> u32 {
    hi - lo + 1
}

/// Mask with ones in `[lo, hi]`.
pub const fn mask(lo: u32, hi: u32) -> Word {
    (u32::MAX >> (32 - width(lo, hi))) << lo
}

/// Read bits `[lo, hi]` of `word`, shifted down to bit 0.
pub fn extract(word: Word, lo: u32, hi: u32) -> u32 {
    debug_assert!(lo <= hi && hi < 32);
    (word & mask(lo, hi)) >> lo
}

/// Read bits `[lo, hi]` as a two's complement value of that width.
pub fn extract_signed(word: Word, lo: u32, hi: u32) -> i32 {
    let shift = 32 - width(lo, hi);
    ((extract(word, lo, hi) << shift) as i32) >> shift
}

/// Replace bits `[lo, hi]` of `word` with `value`.
///
/// `value` must fit in the field; a wider value is reported as
/// `FieldOverflow` instead of being masked.
pub fn insert(word: Word, lo: u32, hi: u32, value: u32, field: &'static str) -> Result<Word> {
    debug_assert!(lo <= hi && hi < 32);
    let w = width(lo, hi);
    if w < 32 && value >> w != 0 {
        return Err(Error::FieldOverflow {
            field,
            value: i64::from(value),
            width: w,
        });
    }
    Ok((word & !mask(lo, hi)) | (value << lo))
}

/// Store a signed value as two's complement in bits `[lo, hi]`.
pub fn insert_signed(word: Word, lo: u32, hi: u32, value: i32, field: &'static str) -> Result<Word> {
    let w = width(lo, hi);
    let min = -(1i64 << (w - 1));
    let max = (1i64 << (w - 1)) - 1;
    let v = i64::from(value);
    if v < min || v > max {
        return Err(Error::FieldOverflow {
            field,
            value: v,
            width: w,
        });
    }
    let raw = (value as u32) & (u32::MAX >> (32 - w));
    insert(word, lo, hi, raw, field)
}

/// True when every bit of `[lo, hi]` is clear.
pub fn reserved_is_zero(word: Word, lo: u32, hi: u32) -> bool {
    word & mask(lo, hi) == 0
}

/// Set a single-bit flag.
pub fn insert_flag(word: Word, bit: u32, value: bool, field: &'static str) -> Result<Word> {
    insert(word, bit, bit, u32::from(value), field)
}
