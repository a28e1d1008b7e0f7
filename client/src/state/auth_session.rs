//! The per-page-load auth context: identity resolution, login, logout.
//!
//! ARCHITECTURE
//! ============
//! `AuthSession` is constructed once in `App` with the shared `ApiClient` and
//! the auth signal as its sink, then provided through context. Nothing reads
//! ambient globals; tests build one over scripted collaborators.
//!
//! State machine
//! -------------
//! ```text
//! loading ──no token──────────────▶ unauthenticated (→ /login)
//! loading ──profile ok────────────▶ authenticated
//! loading ──profile failed────────▶ unauthenticated (token cleared)
//! unauthenticated ──login ok──────▶ authenticated (→ /dashboard)
//! any ──logout────────────────────▶ unauthenticated (→ /login)
//! ```

#[cfg(test)]
#[path = "auth_session_test.rs"]
mod auth_session_test;

use std::sync::Arc;

use super::auth::{AuthSink, AuthState};
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::util::guard::{DASHBOARD_PATH, LOGIN_PATH};

#[derive(Clone)]
pub struct AuthSession {
    api: ApiClient,
    sink: Arc<dyn AuthSink>,
}

impl AuthSession {
    /// The session's own calls expire into `sink` as well; views that share
    /// the client must attach the same sink via [`ApiClient::with_auth_sink`].
    pub fn new(api: ApiClient, sink: Arc<dyn AuthSink>) -> Self {
        let api = api.with_auth_sink(sink.clone());
        Self { api, sink }
    }

    /// Resolve identity on mount from the stored token.
    pub async fn resolve(&self) -> AuthState {
        if !self.api.has_session() {
            let state = AuthState::signed_out();
            self.sink.publish(state.clone());
            self.api.navigator().redirect(LOGIN_PATH);
            return state;
        }

        let state = match api::fetch_current_user(&self.api).await {
            Ok(user) => AuthState::signed_in(user),
            Err(e) => {
                leptos::logging::warn!("profile fetch failed: {e}");
                self.api.session().clear();
                AuthState::signed_out()
            }
        };
        self.sink.publish(state.clone());
        state
    }

    /// Authenticate, store the token, load the profile, and enter the dashboard.
    ///
    /// # Errors
    ///
    /// Returns the credential or profile error; the session ends signed out.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let token = match api::login(&self.api, username, password).await {
            Ok(resp) => resp.access_token,
            Err(e) => {
                self.sink.publish(AuthState::signed_out());
                return Err(e);
            }
        };
        self.api.session().set(&token);

        match api::fetch_current_user(&self.api).await {
            Ok(user) => {
                leptos::logging::log!("signed in as {}", user.username);
                self.sink.publish(AuthState::signed_in(user.clone()));
                self.api.navigator().redirect(DASHBOARD_PATH);
                Ok(user)
            }
            Err(e) => {
                leptos::logging::warn!("profile fetch after login failed: {e}");
                self.api.session().clear();
                self.sink.publish(AuthState::signed_out());
                Err(e)
            }
        }
    }

    pub fn logout(&self) {
        self.api.session().clear();
        self.sink.publish(AuthState::signed_out());
        self.api.navigator().redirect(LOGIN_PATH);
    }
}
