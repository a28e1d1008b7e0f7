//! Shared HTTP client wrapper.
//!
//! ARCHITECTURE
//! ============
//! One `ApiClient` is built per page load and handed to views through context.
//! It owns the three seams every call goes through: the transport, the
//! session store (read before each request), and the navigator used to force
//! a login on 401.
//!
//! ERROR HANDLING
//! ==============
//! A 401 on a bearer call clears the token, publishes a signed-out auth state
//! when a sink is attached, and redirects to `/login` once, then surfaces
//! [`ApiError::Unauthorized`]. Everything else is returned to
//! the caller unchanged.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Credentials, Transport};
use crate::state::auth::{AuthSink, AuthState};
use crate::util::guard::LOGIN_PATH;
use crate::util::navigation::Navigator;
use crate::util::session::SessionStore;

#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    auth_sink: Option<Arc<dyn AuthSink>>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        transport: Arc<dyn Transport>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            transport,
            session,
            navigator,
            auth_sink: None,
        }
    }

    /// Publish [`AuthState::signed_out`] to `sink` whenever the session expires.
    #[must_use]
    pub fn with_auth_sink(mut self, sink: Arc<dyn AuthSink>) -> Self {
        self.auth_sink = Some(sink);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    pub fn has_session(&self) -> bool {
        self.session.has_token()
    }

    /// Send `request`, returning the response only for 2xx statuses.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Unauthorized`] for a 401 on a bearer call (session expired).
    /// - [`ApiError::InvalidCredentials`] for a 401 on an anonymous call.
    /// - [`ApiError::NotFound`] / [`ApiError::Status`] for other failures.
    /// - Transport errors as reported by the transport.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let credentials = request.credentials;
        let token = match credentials {
            Credentials::Bearer => self.session.get(),
            Credentials::Anonymous => None,
        };
        let http = request.prepare(&self.base_url, token.as_deref());
        let resp = self.transport.send(&http).await?;

        if resp.status == 401 {
            return Err(match credentials {
                Credentials::Anonymous => ApiError::InvalidCredentials,
                Credentials::Bearer => {
                    leptos::logging::warn!("401 from {} {}; expiring session", http.method, http.url);
                    self.expire_session();
                    ApiError::Unauthorized
                }
            });
        }
        if !resp.is_success() {
            return Err(ApiError::from_status(resp.status, &resp.body));
        }
        Ok(resp)
    }

    fn expire_session(&self) {
        self.session.clear();
        if let Some(sink) = &self.auth_sink {
            sink.publish(AuthState::signed_out());
        }
        self.navigator.redirect(LOGIN_PATH);
    }
}
