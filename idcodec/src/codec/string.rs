use super::IdCodec;
use crate::result::{Error, Result};
use uuid::Uuid;

/// The canonical 36-character hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultString;

impl IdCodec for DefaultString {
    fn name(&self) -> &'static str {
        "default_string"
    }

    fn encode(&self, id: &Uuid) -> Result<String> {
        Ok(id.hyphenated().to_string())
    }

    fn decode(&self, encoded: &str) -> Result<Uuid> {
        Uuid::parse_str(encoded).map_err(|e| Error::DecodingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::DefaultString;
    use crate::codec::IdCodec;
    use uuid::{Uuid, uuid};

    const ID: Uuid = uuid!("0188bac7-4afa-78aa-bc3b-bd1eef28d881");

    #[test]
    fn test_encode_decode() {
        let encoded = DefaultString.encode(&ID).unwrap();
        assert_eq!(encoded, "0188bac7-4afa-78aa-bc3b-bd1eef28d881");
        assert_eq!(DefaultString.decode(&encoded).unwrap(), ID);
    }

    #[test]
    fn test_decode_upper_case() {
        assert_eq!(
            DefaultString
                .decode("0188BAC7-4AFA-78AA-BC3B-BD1EEF28D881")
                .unwrap(),
            ID
        );
    }

    #[test]
    fn test_decode_invalid() {
        assert!(DefaultString.decode("").is_err());
        assert!(DefaultString.decode("0188bac7-4afa-78aa-bc3b-bd1eef28d88").is_err());
        assert!(DefaultString.decode("0188bac7-4afa-78aa-bc3b-bd1eef28d88g").is_err());
    }
}
