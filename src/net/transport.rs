//! HTTP boundary for JSON form posts.
//!
//! Client-side (csr): `BrowserTransport` posts via `gloo-net`.
//! Native builds: `BrowserTransport` reports `Unavailable`; tests supply
//! their own `Transport`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Headers sent with every JSON form post.
#[cfg(any(test, feature = "csr"))]
fn json_post_headers() -> [(&'static str, &'static str); 1] {
    [("Content-Type", JSON_CONTENT_TYPE)]
}

/// Raw reply from the server, before any JSON parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Same range as fetch's `Response.ok`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),
    #[error("network requests are only available in the browser")]
    Unavailable,
}

/// Sends a JSON body with `POST` and hands back the raw reply.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns an error when the request never completes.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, TransportError>;
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, TransportError> {
        #[cfg(feature = "csr")]
        {
            let network = |e: gloo_net::Error| TransportError::Network(e.to_string());
            let request = json_post_headers()
                .into_iter()
                .fold(gloo_net::http::Request::post(url), |req, (name, value)| {
                    req.header(name, value)
                });
            let resp = request
                .body(body)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network)?;
            Ok(HttpReply { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, body);
            Err(TransportError::Unavailable)
        }
    }
}
