//! Front padding for block-aligned encodings.
//!
//! A 16-byte identifier does not fill whole Base64 (3-byte) or Base32 (5-byte) blocks.
//! Prepending a few zero bytes aligns it, and the text produced by those zero bytes is
//! a constant prefix that can be dropped after encoding and restored before decoding.

use crate::{
    result::{Error, Result},
    utils::ID_LEN,
};
use concat_string::concat_string;

const ZEROS: [u8; 8] = [0; 8];

/// A front padding scheme for one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontPad {
    zero_bytes: usize,
    prefix: &'static str,
    encoded_len: usize,
}

/// URL-safe Base64: 2 zero bytes make 18 bytes, the leading `AA` is dropped.
pub const BASE64: FrontPad = FrontPad::new(2, "AA", 22);
/// Base32 (any alphabet whose zero symbol is `0`): 4 zero bytes make 20 bytes,
/// the leading `000000` is dropped.
pub const BASE32: FrontPad = FrontPad::new(4, "000000", 26);

impl FrontPad {
    /// Create a padding scheme. `zero_bytes` must not exceed 8.
    pub const fn new(zero_bytes: usize, prefix: &'static str, encoded_len: usize) -> Self {
        assert!(zero_bytes <= ZEROS.len());
        Self {
            zero_bytes,
            prefix,
            encoded_len,
        }
    }

    /// Length of an encoded identifier once the prefix is removed.
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    /// Pad `data` in front, encode it and strip the constant prefix.
    pub fn encode(
        &self,
        data: &[u8; ID_LEN],
        encode: impl FnOnce(&[u8]) -> String,
    ) -> Result<String> {
        let padded = [&ZEROS[..self.zero_bytes], data.as_slice()].concat();
        let encoded = encode(&padded);
        encoded
            .strip_prefix(self.prefix)
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::EncodingError(format!("missing padding prefix \"{}\"", self.prefix))
            })
    }

    /// Restore the constant prefix, decode, and strip the zero bytes.
    /// Input whose restored prefix does not decode to zero bytes is rejected.
    pub fn decode(
        &self,
        text: &str,
        decode: impl FnOnce(&str) -> Result<Vec<u8>>,
    ) -> Result<[u8; ID_LEN]> {
        if text.len() != self.encoded_len {
            return Err(Error::InvalidLength {
                expected: self.encoded_len,
                actual: text.len(),
            });
        }
        let decoded = decode(&concat_string!(self.prefix, text))?;
        let Some((pad, payload)) = decoded.split_at_checked(self.zero_bytes) else {
            return Err(Error::InvalidLength {
                expected: self.zero_bytes + ID_LEN,
                actual: decoded.len(),
            });
        };
        if pad.iter().any(|b| *b != 0) {
            return Err(Error::InvalidPadding(format!(
                "value does not fit after \"{}\"",
                self.prefix
            )));
        }
        payload.try_into().map_err(|_| Error::InvalidLength {
            expected: self.zero_bytes + ID_LEN,
            actual: decoded.len(),
        })
    }
}
