use super::IdCodec;
use crate::result::Result;
use idcodec_core::{text, utils::to_id_bytes};
use uuid::Uuid;

/// Base58 with the Bitcoin alphabet. Length varies with the value (up to 22 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct BtcBase58;

impl IdCodec for BtcBase58 {
    fn name(&self) -> &'static str {
        "btc_base58"
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        Ok(text::to_base58(id.as_bytes()))
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        let raw = text::from_base58(encoded)?;
        Ok(Uuid::from_bytes(to_id_bytes(&raw)?))
    }
}
