use crate::result::{Error, Result};
use data_encoding::Encoding;
use data_encoding_macro::new_encoding;

/// Crockford Base32, upper case. Same symbol set as ULID.
const CROCKFORD: Encoding = new_encoding! {
    symbols: "0123456789ABCDEFGHJKMNPQRSTVWXYZ",
};
/// Crockford Base32, lower case. Used for TypeID suffixes.
const CROCKFORD_LOWER: Encoding = new_encoding! {
    symbols: "0123456789abcdefghjkmnpqrstvwxyz",
};

/// Encode to upper case Crockford Base32 without padding.
pub fn to_crockford(data: &[u8]) -> String {
    CROCKFORD.encode(data)
}

/// Decode upper case Crockford Base32 without padding.
pub fn from_crockford(s: &str) -> Result<Vec<u8>> {
    CROCKFORD
        .decode(s.as_bytes())
        .map_err(|e| Error::DecodingError(e.to_string()))
}

/// Encode to lower case Crockford Base32 without padding.
pub fn to_crockford_lower(data: &[u8]) -> String {
    CROCKFORD_LOWER.encode(data)
}

/// Decode lower case Crockford Base32 without padding.
pub fn from_crockford_lower(s: &str) -> Result<Vec<u8>> {
    CROCKFORD_LOWER
        .decode(s.as_bytes())
        .map_err(|e| Error::DecodingError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{from_crockford, from_crockford_lower, to_crockford, to_crockford_lower};

    const PADDED: [u8; 20] = [
        0, 0, 0, 0, 0x01, 0x88, 0xba, 0xc7, 0x4a, 0xfa, 0x78, 0xaa, 0xbc, 0x3b, 0xbd, 0x1e, 0xef,
        0x28, 0xd8, 0x81,
    ];

    #[test]
    fn test_encode_decode() {
        let encoded = to_crockford(&PADDED);
        assert_eq!(encoded, "00000001H2XCEJQTF2NBREXX3VQJHP41");
        assert_eq!(from_crockford(&encoded).expect("cannot decode"), PADDED);
    }

    #[test]
    fn test_encode_decode_lower() {
        let encoded = to_crockford_lower(&PADDED);
        assert_eq!(encoded, "00000001h2xcejqtf2nbrexx3vqjhp41");
        assert_eq!(from_crockford_lower(&encoded).expect("cannot decode"), PADDED);
    }

    #[test]
    fn test_excluded_symbols() {
        // I, L, O and U are not part of the alphabet.
        for symbol in ["I", "L", "O", "U"] {
            let text = ["0000000", symbol, "H2XCEJQTF2NBREXX3VQJHP41"].concat();
            assert!(from_crockford(&text).is_err(), "accepted {symbol}");
        }
    }

    #[test]
    fn test_case_is_strict() {
        assert!(from_crockford("00000001h2xcejqtf2nbrexx3vqjhp41").is_err());
        assert!(from_crockford_lower("00000001H2XCEJQTF2NBREXX3VQJHP41").is_err());
    }
}
