//! Inline feedback shown under each form after a submission attempt.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use super::tabs::AuthForm;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedbackKind {
    #[default]
    None,
    Success,
    Error,
}

impl FeedbackKind {
    /// Modifier class applied next to `message` on the display region.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == FeedbackKind::None && self.text.is_empty()
    }

    /// Full `class` attribute for the message region.
    pub fn class_attr(&self) -> String {
        match self.kind {
            FeedbackKind::None => "message".to_owned(),
            kind => format!("message {}", kind.css_class()),
        }
    }
}

/// One feedback slot per form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Messages {
    pub login: Feedback,
    pub signup: Feedback,
}

impl Messages {
    pub fn get(&self, form: AuthForm) -> &Feedback {
        match form {
            AuthForm::Login => &self.login,
            AuthForm::Signup => &self.signup,
        }
    }

    pub fn set(&mut self, form: AuthForm, feedback: Feedback) {
        match form {
            AuthForm::Login => self.login = feedback,
            AuthForm::Signup => self.signup = feedback,
        }
    }

    pub fn clear(&mut self, form: AuthForm) {
        self.set(form, Feedback::default());
    }

    pub fn clear_all(&mut self) {
        self.login = Feedback::default();
        self.signup = Feedback::default();
    }
}
