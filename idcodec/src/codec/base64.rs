use super::IdCodec;
use crate::result::Result;
use idcodec_core::{front_pad, text, utils::to_id_bytes};
use uuid::Uuid;

/// RFC 4648 Base64 with `=` padding (24 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Std;

impl IdCodec for Base64Std {
    fn name(&self) -> &'static str {
        "base64_std"
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        Ok(text::to_base64_std(id.as_bytes()))
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        let raw = text::from_base64_std(encoded)?;
        Ok(Uuid::from_bytes(to_id_bytes(&raw)?))
    }
}

/// URL-safe Base64 without padding, front-padded with 2 zero bytes (22 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64RawUrlPrePadded;

impl IdCodec for Base64RawUrlPrePadded {
    fn name(&self) -> &'static str {
        "base64_raw_url_pre_padded"
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        front_pad::BASE64.encode(id.as_bytes(), text::to_base64_url)
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        front_pad::BASE64
            .decode(encoded, text::from_base64_url)
            .map(Uuid::from_bytes)
    }
}
