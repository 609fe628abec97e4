//! Networking for the auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP boundary (browser fetch or a test double),
//! `types` interprets response bodies, and `submit` turns one form
//! submission into exactly one feedback update.

pub mod submit;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mock_transport;
