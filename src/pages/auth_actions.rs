//! Submit flows behind the login and signup forms.
//!
//! Each flow clears its own form's message, builds the payload, hands it to
//! the `FormSubmitter`, and then applies the follow-up for a successful
//! reply: a delayed redirect after login, a form reset after signup.

#[cfg(test)]
#[path = "auth_actions_test.rs"]
mod auth_actions_test;

use crate::net::submit::FormSubmitter;
use crate::net::transport::Transport;
use crate::net::types::AuthReply;
use crate::state::Store;
use crate::state::feedback::Messages;
use crate::state::forms::{LoginForm, SignupForm};
use crate::state::tabs::AuthForm;
use crate::util::navigation::Navigator;

/// Submit the login form. Returns whether the server accepted it.
pub async fn submit_login<T, M, N>(
    submitter: &FormSubmitter<T>,
    form: &LoginForm,
    messages: &M,
    navigator: &N,
) -> bool
where
    T: Transport,
    M: Store<Messages>,
    N: Navigator,
{
    messages.modify(|m| m.clear(AuthForm::Login));
    let config = submitter.config();
    let Some(body) = submitter
        .submit(config.login_endpoint, &form.payload(), AuthForm::Login, messages)
        .await
    else {
        return false;
    };
    if let Some(location) = AuthReply(&body).redirect_to() {
        navigator.redirect_after(config.redirect_delay, location.to_owned());
    }
    true
}

/// Submit the signup form held in `form`. Returns whether the server
/// accepted it.
///
/// The form is read when the submission starts; a reply naming the new
/// user blanks it and repopulates both selects.
pub async fn submit_signup<T, F, M>(submitter: &FormSubmitter<T>, form: &F, messages: &M) -> bool
where
    T: Transport,
    F: Store<SignupForm>,
    M: Store<Messages>,
{
    messages.modify(|m| m.clear(AuthForm::Signup));
    let config = submitter.config();
    let payload = form.snapshot().payload();
    let Some(body) = submitter
        .submit(config.signup_endpoint, &payload, AuthForm::Signup, messages)
        .await
    else {
        return false;
    };
    if AuthReply(&body).has_user_id() {
        form.modify(|f| f.reset(config.industries, config.professions));
        log::debug!("signup form reset after account creation");
    }
    true
}
