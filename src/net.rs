//! Fetching remote resources and decoding them into typed values.
//!
//! [`Requester`] is the single raw-fetch capability, [`HttpRequester`] its default implementation.
//! Decoding is layered on top of any requester through [`decode_request`] or [`RequesterExt`].

mod decoder;
mod fetch;
mod requester;
mod response;

pub use decoder::{Decoder, JsonDecoder};
pub use fetch::HttpRequester;
pub use requester::{decode_request, Requester, RequesterExt};
pub use response::{DecodedResponse, RawResponse, ResponseMetadata};
