//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::PortalConfig;
use crate::pages::auth::AuthPage;

/// Root application component.
///
/// `config` is built once at startup and handed down to the page.
#[component]
pub fn App(config: PortalConfig) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="PanelPrompt | Sign in"/>
        <AuthPage config=config/>
    }
}
