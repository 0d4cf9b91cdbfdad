use proptest::prelude::*;
use scmi_responder::Error;
use scmi_responder::protocol::bits::{extract, extract_signed, insert, insert_signed, reserved_is_zero};

#[test]
fn insert_clears_target_range_first() {
    let word = insert(0xFFFF_FFFF, 8, 15, 0x12, "mid").unwrap();
    assert_eq!(word, 0xFFFF_12FF);
    assert_eq!(extract(word, 8, 15), 0x12);
}

#[test]
fn too_wide_value_faults_instead_of_masking() {
    let err = insert(0, 0, 5, 64, "num_axes").unwrap_err();
    assert!(matches!(err, Error::FieldOverflow { field: "num_axes", width: 6, .. }));
}

#[test]
fn signed_exponents_use_twos_complement() {
    let word = insert_signed(0, 11, 15, -6, "unit_exponent").unwrap();
    assert_eq!(extract(word, 11, 15), 0b11010);
    assert_eq!(extract_signed(word, 11, 15), -6);
    assert!(insert_signed(0, 11, 15, 16, "unit_exponent").is_err());
    assert!(insert_signed(0, 11, 15, -17, "unit_exponent").is_err());
}

#[test]
fn reserved_check_only_looks_at_its_range() {
    assert!(reserved_is_zero(0x0000_0FFF, 12, 15));
    assert!(!reserved_is_zero(0x0000_1000, 12, 15));
}

proptest! {
    #[test]
    fn insert_then_extract(word in any::<u32>(), lo in 0u32..32, span in 0u32..32, value in any::<u32>()) {
        let hi = (lo + span).min(31);
        let width = hi - lo + 1;
        let value = if width == 32 { value } else { value & ((1u32 << width) - 1) };
        let out = insert(word, lo, hi, value, "f").unwrap();
        prop_assert_eq!(extract(out, lo, hi), value);
        // bits outside the range are untouched
        let outside = !(((1u64 << width) - 1) << lo) as u32;
        prop_assert_eq!(out & outside, word & outside);
    }
}
