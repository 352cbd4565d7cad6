//! Strategies that map raw response bytes onto a typed value.

use serde::de::DeserializeOwned;

/// Decodes a response body into `T`.
pub trait Decoder {
    type Error: std::error::Error + Send + Sync + 'static;

    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, Self::Error>;
}

/// JSON decoder backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder {
    empty_as_null: bool,
}

impl JsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat an empty (or whitespace only) body as JSON `null` instead of failing. Useful for
    /// `Option<T>` targets on endpoints that answer with an empty 204.
    pub fn empty_as_null(mut self, enabled: bool) -> Self {
        self.empty_as_null = enabled;
        self
    }
}

impl Decoder for JsonDecoder {
    type Error = serde_json::Error;

    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, Self::Error> {
        if self.empty_as_null && body.iter().all(u8::is_ascii_whitespace) {
            return serde_json::from_slice(b"null");
        }
        serde_json::from_slice(body)
    }
}

impl<D: Decoder + ?Sized> Decoder for &D {
    type Error = D::Error;

    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, Self::Error> {
        (**self).decode(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rejects_empty_body() {
        let err = JsonDecoder::default().decode::<Option<u32>>(b"").unwrap_err();
        assert!(err.is_eof());
    }

    #[test]
    fn empty_as_null() {
        let decoder = JsonDecoder::new().empty_as_null(true);
        assert_eq!(decoder.decode::<Option<u32>>(b"").unwrap(), None);
        assert_eq!(decoder.decode::<Option<u32>>(b" \n").unwrap(), None);
        assert_eq!(decoder.decode::<Option<u32>>(b"7").unwrap(), Some(7));

        // a non-nullable target still fails
        assert!(decoder.decode::<u32>(b"").is_err());
    }

    #[test]
    fn shape_mismatch_is_data_error() {
        let err = JsonDecoder::default().decode::<Vec<String>>(br#"{"a":1}"#).unwrap_err();
        assert!(err.is_data());
    }
}
