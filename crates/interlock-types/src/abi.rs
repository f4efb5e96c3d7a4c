//! Call-data encoding.
//!
//! Call data is a four-byte [`Selector`] followed by zero or more 32-byte
//! argument words. Integers travel as big-endian two's-complement `int256`
//! words; four-byte identifiers travel left-aligned in a zero-padded word.
//! Decoding is strict: anything that would not be produced by the matching
//! encoder is rejected.

use crate::error::TypeError;
use crate::selector::{Selector, ID_LEN};

/// Width in bytes of one argument or return word.
pub const WORD_LEN: usize = 32;

/// A single 32-byte argument or return word.
pub type Word = [u8; WORD_LEN];

/// The all-zero word.
pub const ZERO_WORD: Word = [0u8; WORD_LEN];

/// Encode a signed integer as an `int256` word.
pub fn encode_int(value: i64) -> Word {
    let fill = if value < 0 { 0xff } else { 0x00 };
    let mut word = [fill; WORD_LEN];
    word[WORD_LEN - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Decode an `int256` word, rejecting values outside the `i64` range.
pub fn decode_int(data: &[u8]) -> Result<i64, TypeError> {
    let word = as_word(data)?;
    let mut low = [0u8; 8];
    low.copy_from_slice(&word[WORD_LEN - 8..]);
    let value = i64::from_be_bytes(low);
    let fill = if value < 0 { 0xff } else { 0x00 };
    if word[..WORD_LEN - 8].iter().any(|&b| b != fill) {
        return Err(TypeError::IntegerOverflow);
    }
    Ok(value)
}

/// Encode a four-byte identifier as a left-aligned word.
pub fn encode_bytes4(bytes: [u8; ID_LEN]) -> Word {
    let mut word = ZERO_WORD;
    word[..ID_LEN].copy_from_slice(&bytes);
    word
}

/// Decode a left-aligned four-byte identifier.
pub fn decode_bytes4(data: &[u8]) -> Result<[u8; ID_LEN], TypeError> {
    let word = as_word(data)?;
    if word[ID_LEN..].iter().any(|&b| b != 0) {
        return Err(TypeError::NonCanonicalPadding("bytes4"));
    }
    let mut bytes = [0u8; ID_LEN];
    bytes.copy_from_slice(&word[..ID_LEN]);
    Ok(bytes)
}

fn as_word(data: &[u8]) -> Result<&Word, TypeError> {
    data.try_into().map_err(|_| TypeError::InvalidLength {
        expected: WORD_LEN,
        actual: data.len(),
    })
}

/// An operation invocation: selector plus argument words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    selector: Selector,
    args: Vec<Word>,
}

impl Call {
    /// A call with no arguments.
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            args: Vec::new(),
        }
    }

    /// Append a raw argument word.
    pub fn with_word(mut self, word: Word) -> Self {
        self.args.push(word);
        self
    }

    /// Append an `int256` argument.
    pub fn with_int(self, value: i64) -> Self {
        self.with_word(encode_int(value))
    }

    /// The operation being invoked.
    pub fn selector(&self) -> Selector {
        self.selector
    }

    /// All argument words in order.
    pub fn args(&self) -> &[Word] {
        &self.args
    }

    /// The argument word at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&Word> {
        self.args.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn positive_int_is_zero_extended() {
        let word = encode_int(100);
        assert!(word[..31].iter().all(|&b| b == 0));
        assert_eq!(word[31], 100);
    }

    #[test]
    fn negative_int_is_sign_extended() {
        let word = encode_int(-1);
        assert!(word.iter().all(|&b| b == 0xff));
        assert_eq!(decode_int(&word).unwrap(), -1);
    }

    #[test]
    fn extremes_decode() {
        assert_eq!(decode_int(&encode_int(i64::MAX)).unwrap(), i64::MAX);
        assert_eq!(decode_int(&encode_int(i64::MIN)).unwrap(), i64::MIN);
    }

    #[test]
    fn int_out_of_range_is_rejected() {
        let mut word = encode_int(5);
        word[0] = 0x01;
        assert_eq!(decode_int(&word), Err(TypeError::IntegerOverflow));

        // High bit of the low limb set without sign extension: 2^63.
        let mut word = ZERO_WORD;
        word[24] = 0x80;
        assert_eq!(decode_int(&word), Err(TypeError::IntegerOverflow));
    }

    #[test]
    fn short_reply_is_rejected() {
        assert_eq!(
            decode_int(&[]),
            Err(TypeError::InvalidLength {
                expected: 32,
                actual: 0
            })
        );
    }

    #[test]
    fn bytes4_is_left_aligned() {
        let word = encode_bytes4([0xee, 0x10, 0x61, 0xf6]);
        assert_eq!(&word[..4], &[0xee, 0x10, 0x61, 0xf6]);
        assert!(word[4..].iter().all(|&b| b == 0));
        assert_eq!(decode_bytes4(&word).unwrap(), [0xee, 0x10, 0x61, 0xf6]);
    }

    #[test]
    fn bytes4_with_dirty_padding_is_rejected() {
        let mut word = encode_bytes4([1, 2, 3, 4]);
        word[31] = 1;
        assert_eq!(
            decode_bytes4(&word),
            Err(TypeError::NonCanonicalPadding("bytes4"))
        );
    }

    #[test]
    fn call_carries_selector_and_words() {
        let sel = Selector::from_bytes([0x30, 0xfd, 0x4e, 0x13]);
        let call = Call::new(sel).with_int(7);
        assert_eq!(call.selector(), sel);
        assert_eq!(call.args().len(), 1);
        assert_eq!(decode_int(call.arg(0).unwrap()).unwrap(), 7);
        assert!(call.arg(1).is_none());
    }

    proptest! {
        #[test]
        fn every_i64_survives_the_word_codec(v in any::<i64>()) {
            prop_assert_eq!(decode_int(&encode_int(v)).unwrap(), v);
        }
    }
}
