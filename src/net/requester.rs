use crate::errors::{DecodeError, RequestError};
use crate::net::decoder::{Decoder, JsonDecoder};
use crate::net::response::{DecodedResponse, RawResponse};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use url::Url;

/// Something that can fetch the raw bytes behind a URL.
///
/// Implementers only provide [`Requester::request`]. Decoding comes for free through
/// [`decode_request`] and [`RequesterExt`].
pub trait Requester: Send + Sync {
    /// Fetches `url` and returns the buffered body together with the response metadata.
    fn request(&self, url: &Url) -> impl Future<Output = Result<RawResponse, RequestError>> + Send;
}

impl<R: Requester + ?Sized> Requester for &R {
    fn request(&self, url: &Url) -> impl Future<Output = Result<RawResponse, RequestError>> + Send {
        (**self).request(url)
    }
}

impl<R: Requester + ?Sized> Requester for Arc<R> {
    fn request(&self, url: &Url) -> impl Future<Output = Result<RawResponse, RequestError>> + Send {
        (**self).request(url)
    }
}

/// Fetches `url` through `requester` and decodes the body into `T` with `decoder`.
///
/// Transport failures surface as [`DecodeError::Request`], decoder failures as
/// [`DecodeError::Decode`] with the decoder's own error untouched.
pub async fn decode_request<R, T, D>(
    requester: &R,
    url: &Url,
    decoder: &D,
) -> Result<DecodedResponse<T>, DecodeError<D::Error>>
where
    R: Requester + ?Sized,
    T: DeserializeOwned,
    D: Decoder + ?Sized,
{
    let raw = requester.request(url).await?;
    DecodedResponse::decode_from(raw, decoder).map_err(DecodeError::Decode)
}

/// Decoding helpers available on every [`Requester`].
pub trait RequesterExt: Requester {
    fn decode_request<'a, T, D>(
        &'a self,
        url: &'a Url,
        decoder: &'a D,
    ) -> impl Future<Output = Result<DecodedResponse<T>, DecodeError<D::Error>>> + Send + 'a
    where
        T: DeserializeOwned + Send + 'a,
        D: Decoder + Sync + ?Sized,
    {
        decode_request(self, url, decoder)
    }

    /// Same as [`RequesterExt::decode_request`] with the default [`JsonDecoder`].
    fn request_json<'a, T>(
        &'a self,
        url: &'a Url,
    ) -> impl Future<Output = Result<DecodedResponse<T>, DecodeError<serde_json::Error>>> + Send + 'a
    where
        T: DeserializeOwned + Send + 'a,
    {
        async move { decode_request(self, url, &JsonDecoder::default()).await }
    }
}

impl<R: Requester + ?Sized> RequesterExt for R {}
