//! Hexadecimal helpers for logging and test fixtures.
//!
//! Frames are rendered as space separated `0x`-less 8-digit words, which is
//! also the form [`parse_words`] accepts back.

use crate::protocol::bits::Word;
use std::fmt::Write;

/// Render words as lowercase hex separated by single spaces.
///
/// Example: `&[0x5400, 0xffff_fffe]` -> `"00005400 fffffffe"`
pub fn words_to_hex(words: &[Word]) -> String {
    let mut s = String::with_capacity(words.len() * 9);
    for (i, w) in words.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:08x}", w);
    }
    s
}

/// Parse whitespace separated hex words. An optional `0x` prefix is accepted
/// on each word.
pub fn parse_words(s: &str) -> Result<Vec<Word>, String> {
    s.split_whitespace()
        .map(|tok| {
            let digits = tok
                .strip_prefix("0x")
                .or_else(|| tok.strip_prefix("0X"))
                .unwrap_or(tok);
            Word::from_str_radix(digits, 16)
                .map_err(|e| format!("invalid hex word '{}': {}", tok, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_to_hex_basic() {
        assert_eq!(words_to_hex(&[0x5400, 0xFFFF_FFFE]), "00005400 fffffffe");
        assert_eq!(words_to_hex(&[]), "");
    }

    #[test]
    fn parse_words_basic() {
        assert_eq!(
            parse_words("00005400 0xfffffffe\n3").unwrap(),
            vec![0x5400, 0xFFFF_FFFE, 3]
        );
        assert_eq!(parse_words("").unwrap(), Vec::<Word>::new());
    }

    #[test]
    fn parse_words_err_cases() {
        assert!(parse_words("zz").is_err());
        assert!(parse_words("100000000").is_err());
    }
}
