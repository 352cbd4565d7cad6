use url::Url;

/// Errors raised while fetching a resource.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The exchange failed on the wire: DNS, connect, timeout, or a connection that dropped
    /// while the body was streaming. Carries the requested URL.
    #[error("Unreachable URL: {0}")]
    AddressUnreachable(Url),

    /// Anything else that went wrong with the exchange, such as a body that could not be
    /// content-decoded or a redirect loop.
    #[error("Invalid response from the server")]
    InvalidResponse,
}

/// Errors raised while fetching and decoding a resource.
///
/// Decoder failures are carried as-is in `Decode`, they are never folded into a `RequestError`.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError<E> {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Decode(E),
}

impl<E> DecodeError<E> {
    /// Returns the decoder error, if this is one
    pub fn as_decode_error(&self) -> Option<&E> {
        match self {
            DecodeError::Decode(e) => Some(e),
            DecodeError::Request(_) => None,
        }
    }

    pub fn into_decode_error(self) -> Option<E> {
        match self {
            DecodeError::Decode(e) => Some(e),
            DecodeError::Request(_) => None,
        }
    }

    pub fn as_request_error(&self) -> Option<&RequestError> {
        match self {
            DecodeError::Request(e) => Some(e),
            DecodeError::Decode(_) => None,
        }
    }
}
