//! Portal configuration injected at startup.
//!
//! The option catalogs and endpoints are constant data; the host page may
//! override the API base URL and the initially active tab through `<meta>`
//! tags (`auth-api-base`, `auth-initial-tab`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::tabs::{AuthForm, UnknownTab};

pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const SIGNUP_ENDPOINT: &str = "/api/signup";
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 600;

pub const API_BASE_META: &str = "auth-api-base";
pub const INITIAL_TAB_META: &str = "auth-initial-tab";

pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "Retail",
    "Manufacturing",
    "Education",
];

pub const PROFESSIONS: &[&str] = &[
    "Analyst",
    "Engineer",
    "Founder",
    "Marketer",
    "Operations",
    "Researcher",
    "Other",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid auth-initial-tab: {0}")]
    InitialTab(#[from] UnknownTab),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Prefix prepended to both endpoints. Empty means same origin.
    pub api_base: String,
    pub login_endpoint: &'static str,
    pub signup_endpoint: &'static str,
    pub industries: &'static [&'static str],
    pub professions: &'static [&'static str],
    /// Pause between a successful login message and the redirect.
    pub redirect_delay: Duration,
    pub initial_tab: AuthForm,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_endpoint: LOGIN_ENDPOINT,
            signup_endpoint: SIGNUP_ENDPOINT,
            industries: INDUSTRIES,
            professions: PROFESSIONS,
            redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
            initial_tab: AuthForm::Login,
        }
    }
}

impl PortalConfig {
    /// Build config from the host page's `<meta>` tags.
    ///
    /// Outside the browser this is the default config. Invalid values are
    /// logged and replaced by their defaults.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let api_base = read_meta(API_BASE_META);
            let initial_tab = read_meta(INITIAL_TAB_META);
            Self::from_meta(api_base.as_deref(), initial_tab.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Build config from raw `<meta>` values.
    pub fn from_meta(api_base: Option<&str>, initial_tab: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base {
            config = config.with_api_base(base);
        }
        match parse_initial_tab(initial_tab) {
            Ok(tab) => config.initial_tab = tab,
            Err(e) => log::warn!("{e}; falling back to {}", config.initial_tab),
        }
        config
    }

    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = normalize_api_base(base);
        self
    }

    #[must_use]
    pub fn with_initial_tab(mut self, tab: AuthForm) -> Self {
        self.initial_tab = tab;
        self
    }

    #[must_use]
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    #[must_use]
    pub fn with_catalogs(
        mut self,
        industries: &'static [&'static str],
        professions: &'static [&'static str],
    ) -> Self {
        self.industries = industries;
        self.professions = professions;
        self
    }

    /// Full request URL for an endpoint path.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.api_base)
    }
}

fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_initial_tab(raw: Option<&str>) -> Result<AuthForm, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(AuthForm::Login),
        Some(value) => Ok(value.parse::<AuthForm>()?),
    }
}

#[cfg(feature = "csr")]
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{name}\"]");
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
}
