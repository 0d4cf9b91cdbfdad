// scmi_responder/src/protocol/words.rs
//! Typed accessors over parameter and return words.
//!
//! Handlers never index raw buffers: they read parameters and write returns
//! through [`FieldSpec`]s taken from the layout registry.

use crate::protocol::bits::{self, Word};
use crate::protocol::layout::FieldSpec;
use crate::types::{Name, split_i64};
use crate::{Error, Result};

/// Ensure the slice has at least `min` words.
pub fn ensure_len(words: &[Word], min: usize) -> Result<()> {
    if words.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: words.len(),
        });
    }
    Ok(())
}

/// Read-only view of the parameter words of one request.
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    words: &'a [Word],
}

impl<'a> Params<'a> {
    /// View over `words`.
    pub fn new(words: &'a [Word]) -> Self {
        Self { words }
    }

    /// Parameter words received.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no parameters were sent.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Absent trailing parameters read as zero.
    pub fn get(&self, spec: FieldSpec) -> u32 {
        spec.read(self.words)
    }

    /// Sign-extended read.
    pub fn get_signed(&self, spec: FieldSpec) -> i32 {
        spec.read_signed(self.words)
    }

    /// True when the field is non-zero.
    pub fn flag(&self, spec: FieldSpec) -> bool {
        spec.read(self.words) != 0
    }

    /// True when every bit of `spec` is clear.
    pub fn is_clear(&self, spec: FieldSpec) -> bool {
        spec.is_zero(self.words)
    }

    /// Resource identifiers are whole words; widen for comparison with counts.
    pub fn id(&self, spec: FieldSpec) -> usize {
        self.get(spec) as usize
    }

    /// Raw parameter words.
    pub fn as_slice(&self) -> &'a [Word] {
        self.words
    }
}

/// Growable return buffer written through field specs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Returns {
    words: Vec<Word>,
}

impl Returns {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty buffer with room for `words`.
    pub fn with_capacity(words: usize) -> Self {
        Self {
            words: Vec::with_capacity(words),
        }
    }

    fn slot(&mut self, offset: usize) -> &mut Word {
        if self.words.len() <= offset {
            self.words.resize(offset + 1, 0);
        }
        &mut self.words[offset]
    }

    /// Insert `value` into `spec`. Fails with `FieldOverflow` when the value
    /// does not fit.
    pub fn set(&mut self, spec: FieldSpec, value: u32) -> Result<()> {
        let slot = self.slot(spec.offset);
        *slot = bits::insert(*slot, spec.lo, spec.hi, value, spec.name)?;
        Ok(())
    }

    /// Insert `value` as two's complement; it must fit the field signed.
    pub fn set_signed(&mut self, spec: FieldSpec, value: i32) -> Result<()> {
        let slot = self.slot(spec.offset);
        *slot = bits::insert_signed(*slot, spec.lo, spec.hi, value, spec.name)?;
        Ok(())
    }

    /// Numeric conversion that reports overflow against `spec`.
    pub fn set_usize(&mut self, spec: FieldSpec, value: usize) -> Result<()> {
        let v = u32::try_from(value).map_err(|_| Error::FieldOverflow {
            field: spec.name,
            value: i64::try_from(value).unwrap_or(i64::MAX),
            width: spec.width(),
        })?;
        self.set(spec, v)
    }

    /// Set or clear a single-bit field.
    pub fn set_flag(&mut self, spec: FieldSpec, value: bool) -> Result<()> {
        debug_assert_eq!(spec.lo, spec.hi, "{} is not a flag", spec.name);
        let slot = self.slot(spec.offset);
        *slot = bits::insert_flag(*slot, spec.lo, value, spec.name)?;
        Ok(())
    }

    /// Write a name starting at `spec.offset` (four words).
    pub fn set_name(&mut self, spec: FieldSpec, name: &Name) -> Result<()> {
        for (i, word) in name.to_words().into_iter().enumerate() {
            self.set(spec.shifted(i), word)?;
        }
        Ok(())
    }

    /// Write a signed 64-bit value as (low, high) words.
    pub fn set_i64(&mut self, low: FieldSpec, high: FieldSpec, value: i64) -> Result<()> {
        let (lo, hi) = split_i64(value);
        self.set(low, lo)?;
        self.set(high, hi)
    }

    /// Words written so far, gaps included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when nothing was written.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Current words.
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Finished return words.
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }
}
