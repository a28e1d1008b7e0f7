//! Username + password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Credentials go through `AuthSession::login`, which stores the token,
//! loads the profile, and navigates to the dashboard. Errors stay inline on
//! this page; a rejected password never triggers the session-expiry redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::state::auth_session::AuthSession;
use crate::util::auth::install_route_guard;
use crate::util::guard::LOGIN_PATH;

pub const MISSING_CREDENTIALS: &str = "Username and password are required";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Trim-check both fields, returning the username ready to send.
///
/// # Errors
///
/// Returns [`MISSING_CREDENTIALS`] if either field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<String, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(username.to_owned())
}

/// Inline message for a failed sign-in.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::InvalidCredentials => INVALID_CREDENTIALS.to_owned(),
        other => format!("Login failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    install_route_guard(LOGIN_PATH, expect_context::<ApiClient>(), use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(user) => user,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let pass = password.get_untracked();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.login(&user, &pass).await {
                    error.set(Some(login_error_message(&e)));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, user);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in to your account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        name="username"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
