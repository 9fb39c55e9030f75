use super::IdCodec;
use crate::result::Result;
use idcodec_core::base57::{self, DigitOrder};
use uuid::Uuid;

/// ShortUUID v3: base57, least significant digit first (22 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortUuidV3;

impl IdCodec for ShortUuidV3 {
    fn name(&self) -> &'static str {
        "shortuuid_v3"
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        Ok(base57::encode(
            id.as_u128(),
            DigitOrder::LeastSignificantFirst,
        ))
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        base57::decode(encoded, DigitOrder::LeastSignificantFirst).map(Uuid::from_u128)
    }
}

/// ShortUUID v4: base57, most significant digit first (22 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortUuidV4;

impl IdCodec for ShortUuidV4 {
    fn name(&self) -> &'static str {
        "shortuuid_v4"
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        Ok(base57::encode(id.as_u128(), DigitOrder::MostSignificantFirst))
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        base57::decode(encoded, DigitOrder::MostSignificantFirst).map(Uuid::from_u128)
    }
}

#[cfg(test)]
mod tests {
    use super::{ShortUuidV3, ShortUuidV4};
    use crate::codec::IdCodec;
    use uuid::{Uuid, uuid};

    const ID: Uuid = uuid!("0188bac7-4afa-78aa-bc3b-bd1eef28d881");

    #[test]
    fn test_v3_encode_decode() {
        let encoded = ShortUuidV3.encode(&ID).unwrap();
        assert_eq!(encoded, "rYfSnkjVhxRxdac4nDpZH2");
        assert_eq!(ShortUuidV3.decode(&encoded).unwrap(), ID);
    }

    #[test]
    fn test_v4_encode_decode() {
        let encoded = ShortUuidV4.encode(&ID).unwrap();
        assert_eq!(encoded, "2HZpDn4cadxRxhVjknSfYr");
        assert_eq!(ShortUuidV4.decode(&encoded).unwrap(), ID);
    }

    #[test]
    fn test_nil_and_max() {
        for id in [Uuid::nil(), Uuid::max()] {
            for codec in [&ShortUuidV3 as &dyn IdCodec, &ShortUuidV4] {
                let encoded = codec.encode(&id).unwrap();
                assert_eq!(encoded.len(), 22);
                assert_eq!(codec.decode(&encoded).unwrap(), id);
            }
        }
    }
}
