use crate::result::{Error, Result};
use base32ct::{Base32Upper, Encoding as _};
use base64::Engine;
use data_encoding::BASE32HEX_NOPAD;

/// Encode to RFC 4648 Base64 with `=` padding.
pub fn to_base64_std(data: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(data)
}

/// Decode RFC 4648 Base64 with `=` padding.
pub fn from_base64_std(s: &str) -> Result<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(s)
        .map_err(|e| Error::DecodingError(e.to_string()))
}

/// Encode to URL-safe Base64 without padding.
pub fn to_base64_url(data: &[u8]) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(data)
}

/// Decode URL-safe Base64 without padding.
pub fn from_base64_url(s: &str) -> Result<Vec<u8>> {
    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(s)
        .map_err(|e| Error::DecodingError(e.to_string()))
}

/// Encode to upper case RFC 4648 Base32 with `=` padding.
pub fn to_base32_std(data: &[u8]) -> String {
    Base32Upper::encode_string(data)
}

/// Decode upper case RFC 4648 Base32 with `=` padding.
pub fn from_base32_std(s: &str) -> Result<Vec<u8>> {
    Base32Upper::decode_vec(s).map_err(|e| Error::DecodingError(e.to_string()))
}

/// Encode to the RFC 4648 "extended hex" Base32 alphabet without padding.
pub fn to_base32_hex(data: &[u8]) -> String {
    BASE32HEX_NOPAD.encode(data)
}

/// Decode the RFC 4648 "extended hex" Base32 alphabet without padding.
pub fn from_base32_hex(s: &str) -> Result<Vec<u8>> {
    BASE32HEX_NOPAD
        .decode(s.as_bytes())
        .map_err(|e| Error::DecodingError(e.to_string()))
}

/// Encode to Base58 with the Bitcoin alphabet.
pub fn to_base58(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode Base58 with the Bitcoin alphabet.
pub fn from_base58(s: &str) -> Result<Vec<u8>> {
    bs58::decode(s)
        .into_vec()
        .map_err(|e| Error::DecodingError(e.to_string()))
}
