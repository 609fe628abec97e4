//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from page logic so the page
//! flows stay testable off the browser.

pub mod navigation;
