//! Sign-in page: login and signup forms behind two tabs.

use leptos::callback::{Callable, Callback};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::auth_actions::{submit_login, submit_signup};
use crate::config::PortalConfig;
use crate::net::submit::FormSubmitter;
use crate::net::transport::BrowserTransport;
use crate::state::feedback::{Feedback, Messages};
use crate::state::forms::{LoginForm, SignupForm, TextField};
use crate::state::options::SelectEntry;
use crate::state::tabs::{AuthForm, TabController};
use crate::util::navigation::BrowserNavigator;

/// Tabbed login/signup page.
///
/// Submissions are not debounced: a second submit while a request is in
/// flight sends another request.
#[component]
pub fn AuthPage(config: PortalConfig) -> impl IntoView {
    let active = RwSignal::new(config.initial_tab);
    let messages = RwSignal::new(Messages::default());
    let login = RwSignal::new(LoginForm::default());
    let signup = RwSignal::new(SignupForm::new(config.industries, config.professions));

    let tabs = TabController::new(active, messages);
    let submitter = FormSubmitter::new(BrowserTransport, config);

    let login_submitter = submitter.clone();
    let on_login = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submitter = login_submitter.clone();
        let form = login.get_untracked();
        leptos::task::spawn_local(async move {
            let accepted = submit_login(&submitter, &form, &messages, &BrowserNavigator).await;
            log::debug!("login submission accepted: {accepted}");
        });
    };

    let on_signup = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submitter = submitter.clone();
        leptos::task::spawn_local(async move {
            let accepted = submit_signup(&submitter, &signup, &messages).await;
            log::debug!("signup submission accepted: {accepted}");
        });
    };

    let industry_entries = Memo::new(move |_| signup.with(|f| f.industry.entries().to_vec()));
    let profession_entries = Memo::new(move |_| signup.with(|f| f.profession.entries().to_vec()));

    let signup_text_input = move |field: TextField| {
        view! {
            <TextInput
                label=field.label()
                name=field.name()
                kind=field.input_type()
                required=field.required()
                value=Signal::derive(move || signup.with(|f| f.field(field).to_owned()))
                on_input=Callback::new(move |value: String| {
                    signup.update(|f| f.set_field(field, value));
                })
            />
        }
    };

    view! {
        <main class="auth-page">
            <section class="auth-card">
                <h1>"PanelPrompt"</h1>
                <div class="tabs" role="tablist">
                    {AuthForm::ALL
                        .into_iter()
                        .map(move |form| {
                            view! {
                                <button
                                    type="button"
                                    class="tab"
                                    class:active=move || active.get() == form
                                    data-target=form.as_str()
                                    on:click=move |_| tabs.activate(form)
                                >
                                    {form.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <form
                    id="loginForm"
                    class="auth-form"
                    class:hidden=move || active.get() != AuthForm::Login
                    hidden=move || active.get() != AuthForm::Login
                    on:submit=on_login
                >
                    <TextInput
                        label="Username"
                        name="username"
                        value=Signal::derive(move || login.with(|f| f.username.clone()))
                        on_input=Callback::new(move |value: String| {
                            login.update(|f| f.username = value);
                        })
                    />
                    <TextInput
                        label="Password"
                        name="password"
                        kind="password"
                        value=Signal::derive(move || login.with(|f| f.password.clone()))
                        on_input=Callback::new(move |value: String| {
                            login.update(|f| f.password = value);
                        })
                    />
                    <button type="submit" class="primary">"Log in"</button>
                    <MessageRegion form=AuthForm::Login messages=messages/>
                </form>

                <form
                    id="signupForm"
                    class="auth-form"
                    class:hidden=move || active.get() != AuthForm::Signup
                    hidden=move || active.get() != AuthForm::Signup
                    on:submit=on_signup
                >
                    {TextField::SIGNUP
                        .into_iter()
                        .filter(|field| *field != TextField::CreditCard)
                        .map(signup_text_input)
                        .collect_view()}
                    <SelectInput
                        label="Industry"
                        name="industry"
                        entries=industry_entries
                        on_change=Callback::new(move |value: String| {
                            signup.update(|f| {
                                f.industry.select(&value);
                            });
                        })
                    />
                    <SelectInput
                        label="Profession"
                        name="profession"
                        entries=profession_entries
                        on_change=Callback::new(move |value: String| {
                            signup.update(|f| {
                                f.profession.select(&value);
                            });
                        })
                    />
                    {signup_text_input(TextField::CreditCard)}
                    <button type="submit" class="primary">"Create account"</button>
                    <MessageRegion form=AuthForm::Signup messages=messages/>
                </form>
            </section>
        </main>
    }
}

#[component]
fn TextInput(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = true)] required: bool,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type=kind
                name=name
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// `<select>` rendered from a `SelectControl`'s entries.
#[component]
fn SelectInput(
    label: &'static str,
    name: &'static str,
    #[prop(into)] entries: Signal<Vec<SelectEntry>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <select name=name required on:change=move |ev| on_change.run(event_target_value(&ev))>
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <option
                                    value=entry.value
                                    disabled=entry.disabled
                                    selected=entry.selected
                                >
                                    {entry.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

/// Feedback region under a form.
#[component]
fn MessageRegion(form: AuthForm, messages: RwSignal<Messages>) -> impl IntoView {
    let feedback = Memo::new(move |_| messages.with(|m| m.get(form).clone()));
    view! {
        <p
            class=move || feedback.with(Feedback::class_attr)
            data-form=form.as_str()
            role="status"
            aria-live="polite"
        >
            {move || feedback.with(|f| f.text.clone())}
        </p>
    }
}
