//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior. The SSR host
//! runs the same [`guard::evaluate`](super::guard::evaluate) on full page
//! loads; these helpers cover client-side navigations.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::guard::{GuardDecision, LOGIN_PATH, evaluate};
use crate::net::client::ApiClient;
use crate::state::auth::AuthState;

/// `true` once auth has settled without a user.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Where a navigation to `path` must go instead, given the stored session.
pub fn guard_redirect(path: &str, api: &ApiClient) -> Option<&'static str> {
    match evaluate(path, api.has_session()) {
        GuardDecision::Allow => None,
        GuardDecision::Redirect(target) => Some(target),
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Evaluate the route guard for `path` once the view mounts in the browser.
pub fn install_route_guard<F>(path: &'static str, api: ApiClient, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = guard_redirect(path, &api) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
