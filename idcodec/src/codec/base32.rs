use super::IdCodec;
use crate::result::{Error, Result};
use idcodec_core::{crockford, front_pad, text, utils::to_id_bytes};
use ulid::Ulid;
use uuid::Uuid;

/// RFC 4648 upper case Base32 with `=` padding (32 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32Std;

impl IdCodec for Base32Std {
    fn name(&self) -> &'static str {
        "base32_std"
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        Ok(text::to_base32_std(id.as_bytes()))
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        let raw = text::from_base32_std(encoded)?;
        Ok(Uuid::from_bytes(to_id_bytes(&raw)?))
    }
}

/// RFC 4648 extended hex Base32, front-padded with 4 zero bytes (26 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32HexPrePadded;

impl IdCodec for Base32HexPrePadded {
    fn name(&self) -> &'static str {
        "base32_hex_pre_padded"
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        front_pad::BASE32.encode(id.as_bytes(), text::to_base32_hex)
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        front_pad::BASE32
            .decode(encoded, text::from_base32_hex)
            .map(Uuid::from_bytes)
    }
}

/// Crockford Base32, front-padded with 4 zero bytes (26 characters).
/// Produces the same text as [`UlidBase32`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CrockfordBase32;

impl IdCodec for CrockfordBase32 {
    fn name(&self) -> &'static str {
        "crockford_base32_pre_padded"
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        front_pad::BASE32.encode(id.as_bytes(), crockford::to_crockford)
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        front_pad::BASE32
            .decode(encoded, crockford::from_crockford)
            .map(Uuid::from_bytes)
    }
}

/// ULID text form. ULIDs and UUIDs are both 16-byte values, so the bytes carry over as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct UlidBase32;

impl IdCodec for UlidBase32 {
    fn name(&self) -> &'static str {
        "ulid_crockford_base32"
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        Ok(Ulid::from_bytes(*id.as_bytes()).to_string())
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        // 26 symbols carry 130 bits; the top two must be zero.
        if let Some(b'8'..=b'9' | b'A'..=b'Z' | b'a'..=b'z') = encoded.as_bytes().first() {
            return Err(Error::InvalidPadding(
                "ULID does not fit in 128 bits".to_owned(),
            ));
        }
        Ulid::from_string(encoded)
            .map(|ulid| Uuid::from_bytes(ulid.to_bytes()))
            .map_err(|e| Error::DecodingError(e.to_string()))
    }
}

/// TypeID suffix: lower case Crockford Base32, front-padded with 4 zero bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeIdBase32;

impl IdCodec for TypeIdBase32 {
    fn name(&self) -> &'static str {
        "typeid_crockford_base32"
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        front_pad::BASE32.encode(id.as_bytes(), crockford::to_crockford_lower)
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        front_pad::BASE32
            .decode(encoded, crockford::from_crockford_lower)
            .map(Uuid::from_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::{Base32HexPrePadded, Base32Std, CrockfordBase32, TypeIdBase32, UlidBase32};
    use crate::{codec::IdCodec, result::Error};
    use rand::{RngCore, rng};
    use uuid::{Uuid, uuid};

    const ID: Uuid = uuid!("0188bac7-4afa-78aa-bc3b-bd1eef28d881");

    #[test]
    fn test_std_encode_decode() {
        let encoded = Base32Std.encode(&ID).unwrap();
        assert_eq!(encoded, "AGELVR2K7J4KVPB3XUPO6KGYQE======");
        assert_eq!(Base32Std.decode(&encoded).unwrap(), ID);
    }

    #[test]
    fn test_hex_encode_decode() {
        let encoded = Base32HexPrePadded.encode(&ID).unwrap();
        assert_eq!(encoded, "01H2TCEINQF2LBOETT3RNIHM41");
        assert_eq!(Base32HexPrePadded.decode(&encoded).unwrap(), ID);
    }

    #[test]
    fn test_crockford_encode_decode() {
        let encoded = CrockfordBase32.encode(&ID).unwrap();
        assert_eq!(encoded, "01H2XCEJQTF2NBREXX3VQJHP41");
        assert_eq!(CrockfordBase32.decode(&encoded).unwrap(), ID);
    }

    #[test]
    fn test_typeid_encode_decode() {
        let encoded = TypeIdBase32.encode(&ID).unwrap();
        assert_eq!(encoded, "01h2xcejqtf2nbrexx3vqjhp41");
        assert_eq!(TypeIdBase32.decode(&encoded).unwrap(), ID);
    }

    #[test]
    fn test_typeid_rejects_overflowing_suffix() {
        assert!(matches!(
            TypeIdBase32.decode("81h2xcejqtf2nbrexx3vqjhp41"),
            Err(Error::InvalidPadding(_))
        ));
    }

    #[test]
    fn test_ulid_rejects_overflowing_text() {
        for text in [
            "81H2XCEJQTF2NBREXX3VQJHP41",
            "ZZZZZZZZZZZZZZZZZZZZZZZZZZ",
            "88888888888888888888888888",
            "z1h2xcejqtf2nbrexx3vqjhp41",
        ] {
            assert!(matches!(
                UlidBase32.decode(text),
                Err(Error::InvalidPadding(_))
            ));
            assert!(CrockfordBase32.decode(&text.to_ascii_uppercase()).is_err());
        }
        assert_eq!(
            UlidBase32.decode("7ZZZZZZZZZZZZZZZZZZZZZZZZZ").unwrap(),
            Uuid::max()
        );
        assert!(UlidBase32.decode("").is_err());
    }

    #[test]
    fn test_ulid_encode_decode() {
        let encoded = UlidBase32.encode(&ID).unwrap();
        assert_eq!(encoded, "01H2XCEJQTF2NBREXX3VQJHP41");
        assert_eq!(UlidBase32.decode(&encoded).unwrap(), ID);
    }

    #[test]
    fn test_crockford_variants_agree() {
        let mut bytes = [0u8; 16];
        for _ in 0..100 {
            rng().fill_bytes(&mut bytes);
            let id = Uuid::from_bytes(bytes);
            let crockford = CrockfordBase32.encode(&id).unwrap();
            assert_eq!(UlidBase32.encode(&id).unwrap(), crockford);
            assert_eq!(
                TypeIdBase32.encode(&id).unwrap(),
                crockford.to_ascii_lowercase()
            );
            assert_eq!(UlidBase32.decode(&crockford).unwrap(), id);
        }
    }

    #[test]
    fn test_std_rejects_base58() {
        let base58 = "BzGURpnHGn6oNru84B3Ri";
        assert!(matches!(
            Base32Std.decode(base58),
            Err(Error::DecodingError(_))
        ));
        assert!(Base32HexPrePadded.decode(base58).is_err());
        assert!(CrockfordBase32.decode(base58).is_err());
    }
}
