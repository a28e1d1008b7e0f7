//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. `AuthSession` publishes every transition
//! through an `AuthSink`; in the app that sink is the context `RwSignal`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Coarse position in the auth state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Loading,
    Unauthenticated,
    Authenticated,
}

/// Authentication state tracking the current user and loading status.
///
/// `Default` is the settled, signed-out state; a fresh page load starts from
/// [`AuthState::loading`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    pub fn phase(&self) -> AuthPhase {
        match (self.loading, self.user.is_some()) {
            (true, _) => AuthPhase::Loading,
            (false, true) => AuthPhase::Authenticated,
            (false, false) => AuthPhase::Unauthenticated,
        }
    }
}

/// Receives auth state transitions.
pub trait AuthSink: Send + Sync {
    fn publish(&self, state: AuthState);
}

impl AuthSink for RwSignal<AuthState> {
    fn publish(&self, state: AuthState) {
        self.set(state);
    }
}
