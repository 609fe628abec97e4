//! Login/signup tab switching.
//!
//! Exactly one form is active at a time. Every activation, including a click
//! on the tab that is already active, clears both feedback messages.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use std::fmt;
use std::str::FromStr;

use super::Store;
use super::feedback::Messages;

/// The two forms on the page. Also identifies a form's feedback slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AuthForm {
    #[default]
    Login,
    Signup,
}

impl AuthForm {
    pub const ALL: [Self; 2] = [Self::Login, Self::Signup];

    /// Identifier used in the tab button's `data-target` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Signup => "Sign up",
        }
    }
}

impl fmt::Display for AuthForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab: {0}")]
pub struct UnknownTab(pub String);

impl FromStr for AuthForm {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(Self::Login),
            "signup" => Ok(Self::Signup),
            other => Err(UnknownTab(other.to_owned())),
        }
    }
}

/// Moves the active tab and clears stale feedback.
#[derive(Clone, Copy, Debug)]
pub struct TabController<A, M> {
    active: A,
    messages: M,
}

impl<A, M> TabController<A, M>
where
    A: Store<AuthForm>,
    M: Store<Messages>,
{
    pub fn new(active: A, messages: M) -> Self {
        Self { active, messages }
    }

    pub fn active(&self) -> AuthForm {
        self.active.snapshot()
    }

    pub fn is_visible(&self, form: AuthForm) -> bool {
        self.active() == form
    }

    /// Handle a click on the tab for `target`.
    pub fn activate(&self, target: AuthForm) {
        let previous = self.active.snapshot();
        self.active.modify(|active| *active = target);
        self.messages.modify(Messages::clear_all);
        log::debug!("tab {previous} -> {target}");
    }
}
