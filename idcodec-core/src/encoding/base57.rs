//! Fixed-width base57 for 128-bit values, in the ShortUUID alphabet.

use crate::result::{Error, Result};

/// The ShortUUID alphabet: digits and letters without `0`, `1`, `I`, `O` and `l`.
pub const ALPHABET: &[u8; 57] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
/// Number of symbols needed for any 128-bit value.
pub const ENCODED_LEN: usize = 22;

const BASE: u128 = 57;
const INVALID: u8 = 0xff;
const DECODE_MAP: [u8; 256] = decode_map();

#[allow(clippy::cast_possible_truncation)]
const fn decode_map() -> [u8; 256] {
    let mut map = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
}

/// Position of the most significant digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitOrder {
    /// Least significant digit first, zero-padded at the end (ShortUUID v3).
    LeastSignificantFirst,
    /// Most significant digit first, zero-padded at the front (ShortUUID v4).
    MostSignificantFirst,
}

/// Encode a value to exactly [`ENCODED_LEN`] symbols.
#[allow(clippy::integer_division_remainder_used, clippy::cast_possible_truncation)]
pub fn encode(value: u128, order: DigitOrder) -> String {
    let mut digits = [ALPHABET[0]; ENCODED_LEN];
    let mut rest = value;
    for digit in &mut digits {
        *digit = ALPHABET[(rest % BASE) as usize];
        rest /= BASE;
    }
    if order == DigitOrder::MostSignificantFirst {
        digits.reverse();
    }
    digits.iter().copied().map(char::from).collect()
}

/// Decode exactly [`ENCODED_LEN`] symbols. Values above `u128::MAX` are rejected.
pub fn decode(text: &str, order: DigitOrder) -> Result<u128> {
    let mut digits: [u8; ENCODED_LEN] =
        text.as_bytes().try_into().map_err(|_| Error::InvalidLength {
            expected: ENCODED_LEN,
            actual: text.len(),
        })?;
    if order == DigitOrder::LeastSignificantFirst {
        digits.reverse();
    }
    digits.iter().try_fold(0u128, |acc, &symbol| {
        let digit = DECODE_MAP[usize::from(symbol)];
        if digit == INVALID {
            return Err(Error::DecodingError(format!(
                "invalid base57 symbol {:?}",
                char::from(symbol)
            )));
        }
        acc.checked_mul(BASE)
            .and_then(|v| v.checked_add(u128::from(digit)))
            .ok_or_else(|| Error::DecodingError("base57 value overflows 128 bits".to_owned()))
    })
}
