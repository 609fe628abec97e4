//! Form submission: post a payload, then render exactly one feedback message.
//!
//! ERROR HANDLING
//! ==============
//! Rejections (`detail`), transport failures and unparseable bodies are all
//! folded into `SubmitError` and rendered as the form's error message.
//! Callers only see `Some(body)` on success and `None` otherwise.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use serde_json::Value;

use super::transport::{Transport, TransportError};
use super::types::{AuthReply, ErrorDetail};
use crate::config::PortalConfig;
use crate::state::Store;
use crate::state::feedback::{Feedback, Messages};
use crate::state::forms::Payload;
use crate::state::tabs::AuthForm;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{}", .detail.message())]
    Rejected { status: u16, detail: ErrorDetail },
}

#[derive(Clone, Debug)]
pub struct FormSubmitter<T> {
    transport: T,
    config: PortalConfig,
}

impl<T: Transport> FormSubmitter<T> {
    pub fn new(transport: T, config: PortalConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Post `payload` to `endpoint` and set `target`'s feedback message.
    ///
    /// Returns the parsed body on success, `None` on any failure.
    pub async fn submit<M>(
        &self,
        endpoint: &str,
        payload: &Payload,
        target: AuthForm,
        messages: &M,
    ) -> Option<Value>
    where
        M: Store<Messages>,
    {
        let (feedback, body) = match self.exchange(endpoint, payload).await {
            Ok(body) => {
                log::info!("{target} request to {endpoint} succeeded");
                (Feedback::success(AuthReply(&body).message()), Some(body))
            }
            Err(e) => {
                log::warn!("{target} request to {endpoint} failed: {e:?}");
                (Feedback::error(e.to_string()), None)
            }
        };
        messages.modify(|m| m.set(target, feedback));
        body
    }

    async fn exchange(&self, endpoint: &str, payload: &Payload) -> Result<Value, SubmitError> {
        let url = self.config.endpoint_url(endpoint);
        let request = serde_json::to_string(payload)?;
        let reply = self.transport.post_json(&url, request).await?;
        // The body is parsed before the status is checked, so a non-JSON
        // error page surfaces as a parse error.
        let body: Value = serde_json::from_str(&reply.body)?;
        if !reply.is_success() {
            return Err(SubmitError::Rejected {
                status: reply.status,
                detail: ErrorDetail::from_body(&body),
            });
        }
        Ok(body)
    }
}
