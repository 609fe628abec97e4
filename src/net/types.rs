//! Typed views over auth API response bodies.
//!
//! Bodies are parsed as untyped JSON first; a failed request carries
//! `detail` as either a plain string or a list of validation entries, and a
//! successful one may carry `message`, `redirect_to` or `user_id`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_SUCCESS_TEXT: &str = "Success.";
pub const DEFAULT_FAILURE_TEXT: &str = "Request failed.";

/// One validation entry from a rejected request. Only `msg` is read; any
/// other keys are ignored whatever their type.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DetailItem {
    pub msg: String,
}

/// The `detail` field of a failed response.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorDetail {
    Text(String),
    Items(Vec<DetailItem>),
    Unrecognized,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDetail {
    Text(String),
    Items(Vec<DetailItem>),
}

impl ErrorDetail {
    pub fn from_body(body: &Value) -> Self {
        match body.get("detail").map(RawDetail::deserialize) {
            Some(Ok(RawDetail::Text(text))) => Self::Text(text),
            Some(Ok(RawDetail::Items(items))) => Self::Items(items),
            Some(Err(_)) | None => Self::Unrecognized,
        }
    }

    /// Text rendered in the error message region.
    pub fn message(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Items(items) => items
                .iter()
                .map(|item| item.msg.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            Self::Unrecognized => DEFAULT_FAILURE_TEXT.to_owned(),
        }
    }
}

/// Accessors over a successful response body.
#[derive(Clone, Copy, Debug)]
pub struct AuthReply<'a>(pub &'a Value);

impl AuthReply<'_> {
    /// Success text: the body's non-empty `message`, else the generic text.
    pub fn message(&self) -> String {
        self.0
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_SUCCESS_TEXT)
            .to_owned()
    }

    /// Where to send the browser after a login, if anywhere.
    pub fn redirect_to(&self) -> Option<&str> {
        self.0
            .get("redirect_to")
            .and_then(Value::as_str)
            .filter(|target| !target.is_empty())
    }

    /// Whether the body identifies a newly created user.
    pub fn has_user_id(&self) -> bool {
        self.0.get("user_id").is_some_and(is_truthy)
    }
}

/// JavaScript-style truthiness for optional reply fields.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
