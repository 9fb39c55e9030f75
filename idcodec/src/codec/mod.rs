//! Textual identifier codecs.
//!
//! Every variant is a unit struct implementing [`IdCodec`]. [`all`] lists them in the
//! order they are benchmarked. [`FnCodec`] turns any pair of closures into a codec.

mod base32;
mod base58;
mod base64;
mod shortuuid;
mod string;

pub use base32::{Base32HexPrePadded, Base32Std, CrockfordBase32, TypeIdBase32, UlidBase32};
pub use base58::BtcBase58;
pub use base64::{Base64RawUrlPrePadded, Base64Std};
pub use shortuuid::{ShortUuidV3, ShortUuidV4};
pub use string::DefaultString;

use crate::result::Result;
use uuid::Uuid;

/// A paired encode/decode for one textual form of an identifier.
///
/// Both directions are pure: `decode(&encode(id)?)?` must give back `id`.
pub trait IdCodec {
    /// Stable name used in reports and benchmark ids.
    fn name(&self) -> &'static str;

    /// Encode an identifier to text.
    fn encode(&self, id: &Uuid) -> Result<String>;

    /// Decode text produced by [`IdCodec::encode`] back to an identifier.
    fn decode(&self, encoded: &str) -> Result<Uuid>;
}

impl<C: IdCodec + ?Sized> IdCodec for &C {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        (**self).encode(id)
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        (**self).decode(encoded)
    }
}

/// A codec built from two functions.
pub struct FnCodec<E, D> {
    name: &'static str,
    encode: E,
    decode: D,
}

impl<E, D> FnCodec<E, D>
where
    E: Fn(&Uuid) -> Result<String>,
    D: Fn(&str) -> Result<Uuid>,
{
    pub fn new(name: &'static str, encode: E, decode: D) -> Self {
        Self {
            name,
            encode,
            decode,
        }
    }
}

impl<E, D> IdCodec for FnCodec<E, D>
where
    E: Fn(&Uuid) -> Result<String>,
    D: Fn(&str) -> Result<Uuid>,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        (self.encode)(id)
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        (self.decode)(encoded)
    }
}

/// Every built-in codec, in benchmark order.
pub fn all() -> [&'static dyn IdCodec; 11] {
    [
        &DefaultString,
        &Base64Std,
        &Base64RawUrlPrePadded,
        &Base32Std,
        &Base32HexPrePadded,
        &CrockfordBase32,
        &UlidBase32,
        &TypeIdBase32,
        &ShortUuidV3,
        &ShortUuidV4,
        &BtcBase58,
    ]
}

/// Look up a built-in codec by name.
pub fn by_name(name: &str) -> Option<&'static dyn IdCodec> {
    all().into_iter().find(|codec| codec.name() == name)
}

#[cfg(test)]
mod tests {
    use super::{FnCodec, IdCodec, all, by_name};
    use crate::result::Error;
    use std::collections::HashSet;
    use uuid::Uuid;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = all().iter().map(|codec| codec.name()).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("btc_base58").map(|codec| codec.name()), Some("btc_base58"));
        assert!(by_name("base65536").is_none());
    }

    #[test]
    fn test_fn_codec() {
        let codec = FnCodec::new(
            "simple",
            |id: &Uuid| Ok(id.simple().to_string()),
            |encoded: &str| {
                Uuid::try_parse(encoded).map_err(|e| Error::DecodingError(e.to_string()))
            },
        );
        let id = Uuid::from_u128(0x0188_bac7_4afa_78aa_bc3b_bd1e_ef28_d881);
        let encoded = codec.encode(&id).unwrap();
        assert_eq!(encoded, "0188bac74afa78aabc3bbd1eef28d881");
        assert_eq!(codec.decode(&encoded).unwrap(), id);
        assert_eq!(codec.name(), "simple");
    }
}
