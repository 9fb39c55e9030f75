use crate::result::{Error, Result};

/// Length of an identifier payload in bytes.
pub const ID_LEN: usize = 16;

/// Convert decoded bytes into an identifier payload, rejecting any other length.
pub fn to_id_bytes(bytes: &[u8]) -> Result<[u8; ID_LEN]> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        expected: ID_LEN,
        actual: bytes.len(),
    })
}
