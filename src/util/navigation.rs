//! Delayed browser redirects.
//!
//! After a successful login the page keeps the success message on screen
//! for a short delay before leaving. Requires a browser environment; native
//! builds only log the request.

use std::time::Duration;

/// Schedules a navigation to `location` once `delay` has elapsed.
pub trait Navigator {
    fn redirect_after(&self, delay: Duration, location: String);
}

/// Navigator that sets `window.location.href` after a `gloo-timers` timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect_after(&self, delay: Duration, location: String) {
        log::info!("redirecting to {location} in {}ms", delay.as_millis());
        #[cfg(feature = "csr")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(millis).await;
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().set_href(&location) {
                        log::error!("redirect to {location} failed: {e:?}");
                    }
                }
            });
        }
    }
}
