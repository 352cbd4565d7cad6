use crate::errors::RequestError;
use crate::net::requester::Requester;
use crate::net::response::{RawResponse, ResponseMetadata};
use url::Url;

/// Default [`Requester`] backed by a `reqwest` client.
///
/// Each call issues a single GET and buffers the whole body. Nothing is retried or cached. The
/// client is a cheap handle onto a shared connection pool, so clones can be handed to other tasks.
#[derive(Debug, Clone, Default)]
pub struct HttpRequester {
    client: reqwest::Client,
}

impl HttpRequester {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Uses an already configured client (proxies, timeouts, default headers...)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Requester for HttpRequester {
    async fn request(&self, url: &Url) -> Result<RawResponse, RequestError> {
        log::debug!("GET {}", url);

        let res = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        // Fetch results
        let metadata = ResponseMetadata {
            url: res.url().clone(),
            status: res.status().as_u16(),
            status_text: res.status().canonical_reason().unwrap_or("Unknown").to_string(),
            headers: res.headers().clone(),
        };

        // Fetch body. We don't do streaming
        let body = res.bytes().await.map_err(|e| classify(url, e))?.to_vec();

        log::debug!("GET {} -> {} ({} bytes)", url, metadata.status, body.len());

        Ok(RawResponse::new(body, Some(metadata)))
    }
}

/// Maps a reqwest error onto our two error kinds. Anything that went wrong on the wire is
/// reported as unreachable, everything else as an invalid response.
fn classify(url: &Url, e: reqwest::Error) -> RequestError {
    if is_transport_error(&e) {
        log::warn!("GET {} failed at transport level: {}", url, e);
        RequestError::AddressUnreachable(url.clone())
    } else {
        log::warn!("GET {} failed: {}", url, e);
        RequestError::InvalidResponse
    }
}

fn is_transport_error(e: &reqwest::Error) -> bool {
    if e.is_connect() || e.is_timeout() || e.is_request() || e.is_body() {
        return true;
    }

    // With content decoding enabled a dropped connection mid-body surfaces as a decode error.
    // Only a broken stream counts here, corrupt payloads stay invalid responses.
    e.is_decode() && has_broken_stream(e)
}

fn has_broken_stream(e: &reqwest::Error) -> bool {
    use std::io::ErrorKind;

    let mut source = std::error::Error::source(e);
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                ErrorKind::UnexpectedEof
                    | ErrorKind::ConnectionReset
                    | ErrorKind::ConnectionAborted
                    | ErrorKind::BrokenPipe
                    | ErrorKind::TimedOut
            ) {
                return true;
            }
        }
        source = std::error::Error::source(err);
    }
    false
}
