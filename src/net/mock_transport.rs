//! Scripted `Transport` for tests.

use std::cell::RefCell;

use serde_json::Value;

use super::transport::{HttpReply, Transport, TransportError};

/// Replies with a fixed result and records every request.
pub struct MockTransport {
    reply: Result<HttpReply, TransportError>,
    requests: RefCell<Vec<(String, String)>>,
}

impl MockTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self::with_result(Ok(HttpReply::new(status, body)))
    }

    pub fn json(status: u16, body: &Value) -> Self {
        Self::replying(status, &body.to_string())
    }

    pub fn failing(message: &str) -> Self {
        Self::with_result(Err(TransportError::Network(message.to_owned())))
    }

    fn with_result(reply: Result<HttpReply, TransportError>) -> Self {
        Self {
            reply,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// `(url, body)` of every request sent so far.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.borrow().clone()
    }

    /// Body of the only request sent, parsed as JSON.
    pub fn sent_json(&self) -> Value {
        let requests = self.requests.borrow();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        serde_json::from_str(&requests[0].1).expect("request body is JSON")
    }
}

impl Transport for MockTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, TransportError> {
        self.requests.borrow_mut().push((url.to_owned(), body));
        self.reply.clone()
    }
}
