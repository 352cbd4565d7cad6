//! Minimal HTTP response model.
//!
//! A request produces a **fully buffered** [`RawResponse`]: the raw body bytes plus the
//! protocol metadata (final URL, status code + reason, headers) when the transport exposes it.
//! A [`DecodedResponse`] is the same thing with the body replaced by a typed value.
//!
//! ## Notes
//! - Non-2xx statuses are not errors at this level. Check `metadata.status` or
//!   [`ResponseMetadata::is_success`] when it matters.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for header names.
//!
use crate::net::decoder::Decoder;
use http::HeaderMap;
use url::Url;

/// Protocol level information that accompanies a response body.
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// URL the requester ended up at, which differs from the requested one when the client
    /// followed redirects.
    pub url: Url,

    /// Status code as received. Any value is kept, including 4xx and 5xx.
    pub status: u16,

    /// Canonical reason phrase for `status`, `"Unknown"` when there is none.
    pub status_text: String,

    pub headers: HeaderMap,
}

impl ResponseMetadata {
    /// True for 2xx status codes
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Undecoded response as returned by a [`Requester`](crate::net::Requester).
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Raw response body bytes.
    pub body: Vec<u8>,

    /// Response metadata, `None` when the transport does not provide any.
    pub metadata: Option<ResponseMetadata>,
}

impl RawResponse {
    pub fn new(body: impl Into<Vec<u8>>, metadata: Option<ResponseMetadata>) -> Self {
        Self {
            body: body.into(),
            metadata,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.metadata.as_ref().map(|m| m.status)
    }

    /// Body as text. Invalid UTF-8 sequences are replaced.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

/// A response whose body has been decoded into `T`.
///
/// Only obtainable through [`DecodedResponse::decode_from`], so a value always originates from a
/// successful decode.
#[derive(Debug, Clone)]
pub struct DecodedResponse<T> {
    value: T,
    metadata: Option<ResponseMetadata>,
}

impl<T> DecodedResponse<T> {
    /// Decodes the body of `raw` with `decoder`. The body is dropped afterwards, the metadata is
    /// carried over untouched.
    pub fn decode_from<D>(raw: RawResponse, decoder: &D) -> Result<Self, D::Error>
    where
        D: Decoder + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let value = decoder.decode::<T>(&raw.body)?;
        Ok(Self {
            value,
            metadata: raw.metadata,
        })
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn metadata(&self) -> Option<&ResponseMetadata> {
        self.metadata.as_ref()
    }

    pub fn status(&self) -> Option<u16> {
        self.metadata.as_ref().map(|m| m.status)
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, Option<ResponseMetadata>) {
        (self.value, self.metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::decoder::JsonDecoder;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: u32,
        name: String,
    }

    fn meta(status: u16) -> ResponseMetadata {
        ResponseMetadata {
            url: Url::parse("https://api.example.com/user/1").unwrap(),
            status,
            status_text: "OK".to_string(),
            headers: HeaderMap::new(),
        }
    }

    #[test]
    fn decode_carries_metadata_over() {
        let raw = RawResponse::new(br#"{"id":1,"name":"Ada"}"#.to_vec(), Some(meta(200)));
        let decoded: DecodedResponse<User> = DecodedResponse::decode_from(raw, &JsonDecoder::default()).unwrap();

        assert_eq!(decoded.value(), &User { id: 1, name: "Ada".to_string() });
        assert_eq!(decoded.status(), Some(200));
        assert_eq!(decoded.metadata().unwrap().url.as_str(), "https://api.example.com/user/1");
    }

    #[test]
    fn decode_without_metadata() {
        let raw = RawResponse::new(b"[1,2,3]".to_vec(), None);
        let decoded: DecodedResponse<Vec<u8>> = DecodedResponse::decode_from(raw, &JsonDecoder::default()).unwrap();
        assert!(decoded.metadata().is_none());
        assert_eq!(decoded.into_value(), vec![1, 2, 3]);
    }

    #[test]
    fn failed_decode_yields_no_response() {
        let raw = RawResponse::new(b"not json".to_vec(), Some(meta(200)));
        let res: Result<DecodedResponse<User>, _> = DecodedResponse::decode_from(raw, &JsonDecoder::default());
        assert!(res.unwrap_err().is_syntax());
    }

    #[test]
    fn success_range() {
        assert!(meta(200).is_success());
        assert!(meta(204).is_success());
        assert!(!meta(301).is_success());
        assert!(!meta(404).is_success());
    }

    #[test]
    fn lossy_text() {
        let raw = RawResponse::new(b"caf\xc3\xa9 \xff".to_vec(), None);
        assert_eq!(raw.text(), "café \u{fffd}");
        assert_eq!(raw.status(), None);
    }
}
