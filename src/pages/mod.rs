//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `auth` renders the sign-in page and wires browser events to the submit
//! flows in `auth_actions`, which hold no browser dependencies.

pub mod auth;
pub mod auth_actions;
